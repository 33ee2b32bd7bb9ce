use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::domain::config::paths::{INDEX_ASSET_TYPE, INDEX_MARKER_EXTENSION};
use crate::domain::{AppError, AssetId, NamingPrompt};
use crate::ports::AssetStore;

/// Asset type tag matching generated scripts in index queries.
const SCRIPT_ASSET_TYPE: &str = "script";
/// Asset type tag matching folders in index queries.
const FOLDER_ASSET_TYPE: &str = "folder";

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    paths: BTreeMap<AssetId, PathBuf>,
    revealed: Option<PathBuf>,
    pending: Option<NamingPrompt>,
}

impl Registry {
    fn register(&mut self, path: PathBuf) -> AssetId {
        if let Some((id, _)) = self.paths.iter().find(|(_, p)| **p == path) {
            return *id;
        }
        self.next_id += 1;
        let id = AssetId(self.next_id);
        self.paths.insert(id, path);
        id
    }
}

/// Asset store backed by a directory on disk.
///
/// Clones share the same asset registry, so a template store holding a clone
/// sees ids assigned through the original.
#[derive(Debug, Clone)]
pub struct FilesystemAssetStore {
    root: PathBuf,
    selection: Option<PathBuf>,
    script_extension: String,
    registry: Rc<RefCell<Registry>>,
}

impl FilesystemAssetStore {
    /// Create a store rooted at `root`, which must already exist.
    pub fn new(root: PathBuf, script_extension: &str) -> Result<Self, AppError> {
        if !root.is_dir() {
            return Err(AppError::config_error(format!(
                "Asset store root {} does not exist",
                root.display()
            )));
        }
        Ok(Self {
            root,
            selection: None,
            script_extension: script_extension.to_string(),
            registry: Rc::new(RefCell::new(Registry::default())),
        })
    }

    /// Set the operator's current selection. Relative paths resolve against the store root.
    pub fn with_selection(mut self, selection: Option<PathBuf>) -> Self {
        self.selection = selection.map(|p| if p.is_absolute() { p } else { self.root.join(p) });
        self
    }

    /// Last asset passed to [`AssetStore::reveal_asset`].
    pub fn revealed(&self) -> Option<PathBuf> {
        self.registry.borrow().revealed.clone()
    }

    /// Naming prompt most recently shown.
    pub fn pending_prompt(&self) -> Option<NamingPrompt> {
        self.registry.borrow().pending.clone()
    }

    fn ensure_inside(&self, path: &Path) -> Result<(), AppError> {
        let escapes = path.components().any(|c| c == Component::ParentDir);
        if path.starts_with(&self.root) && !escapes {
            Ok(())
        } else {
            Err(AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is outside the asset store {}", path.display(), self.root.display()),
            )))
        }
    }

    fn matches_type(&self, path: &Path, asset_type: Option<&str>) -> bool {
        let extension = path.extension().and_then(|e| e.to_str());
        match asset_type {
            None => true,
            Some(FOLDER_ASSET_TYPE) => path.is_dir(),
            Some(SCRIPT_ASSET_TYPE) => {
                path.is_file() && extension == Some(self.script_extension.as_str())
            }
            Some(INDEX_ASSET_TYPE) => path.is_file() && extension == Some(INDEX_MARKER_EXTENSION),
            Some(other) => path.is_file() && extension == Some(other),
        }
    }
}

impl AssetStore for FilesystemAssetStore {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn create_folder(&self, parent: &Path, name: &str) -> Result<AssetId, AppError> {
        let path = parent.join(name);
        self.ensure_inside(&path)?;
        fs::create_dir(&path)?;
        debug!(path = %path.display(), "created folder");
        Ok(self.registry.borrow_mut().register(path))
    }

    fn create_file_with_content(&self, path: &Path, content: &str) -> Result<AssetId, AppError> {
        self.ensure_inside(path)?;
        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        let mut file = options.open(path)?;
        io::Write::write_all(&mut file, content.as_bytes())?;
        debug!(path = %path.display(), bytes = content.len(), "created file");
        Ok(self.registry.borrow_mut().register(path.to_path_buf()))
    }

    fn path_for_id(&self, id: AssetId) -> Option<PathBuf> {
        self.registry.borrow().paths.get(&id).cloned()
    }

    fn current_selection_path(&self) -> Option<PathBuf> {
        self.selection.clone()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn begin_interactive_naming(&self, prompt: &NamingPrompt) -> Result<(), AppError> {
        self.ensure_inside(&prompt.anchor)?;
        debug!(
            session = %prompt.session,
            anchor = %prompt.anchor.display(),
            label = %prompt.default_label,
            "naming started"
        );
        self.registry.borrow_mut().pending = Some(prompt.clone());
        Ok(())
    }

    fn reveal_asset(&self, path: &Path) {
        info!(path = %path.display(), "revealing asset");
        let mut registry = self.registry.borrow_mut();
        registry.pending = None;
        registry.revealed = Some(path.to_path_buf());
    }

    fn find_assets_by_name_and_type(&self, query: &str) -> Vec<AssetId> {
        let (name, asset_type) = parse_query(query);
        let mut hits = Vec::new();
        collect_matches(&self.root, &mut |path| {
            let stem = path.file_stem().and_then(|s| s.to_str());
            if stem == Some(name) && self.matches_type(path, asset_type) {
                hits.push(path.to_path_buf());
            }
        });
        hits.sort();

        let mut registry = self.registry.borrow_mut();
        hits.into_iter().map(|path| registry.register(path)).collect()
    }
}

/// Split `<name> t:<type>` into its parts. The type filter is optional.
fn parse_query(query: &str) -> (&str, Option<&str>) {
    let mut name = "";
    let mut asset_type = None;
    for part in query.split_whitespace() {
        match part.strip_prefix("t:") {
            Some(t) => asset_type = Some(t),
            None => name = part,
        }
    }
    (name, asset_type)
}

/// Depth-first walk in sorted order. Unreadable directories are skipped.
fn collect_matches(dir: &Path, visit: &mut dyn FnMut(&Path)) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };
    let mut paths: Vec<PathBuf> =
        entries.filter_map(|entry| entry.ok().map(|e| e.path())).collect();
    paths.sort();
    for path in paths {
        visit(&path);
        if path.is_dir() {
            collect_matches(&path, visit);
        }
    }
}
