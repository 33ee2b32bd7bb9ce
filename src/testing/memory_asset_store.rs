//! In-memory asset store for unit tests.
//!
//! Records every mutation so tests can assert on exact call sequences, and
//! can be told to reject specific writes.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::domain::{AppError, AssetId, NamingPrompt};
use crate::ports::AssetStore;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Dir,
    File(String),
}

/// A mutation observed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    CreateFolder(PathBuf),
    CreateFile(PathBuf),
}

#[derive(Debug, Default)]
struct State {
    entries: BTreeMap<PathBuf, Entry>,
    ids: BTreeMap<AssetId, PathBuf>,
    calls: Vec<StoreCall>,
    rejected: BTreeSet<PathBuf>,
    selection: Option<PathBuf>,
    prompts: Vec<NamingPrompt>,
    revealed: Vec<PathBuf>,
}

impl State {
    fn register(&mut self, path: PathBuf) -> AssetId {
        if let Some((id, _)) = self.ids.iter().find(|(_, p)| **p == path) {
            return *id;
        }
        let id = AssetId(self.ids.len() as u64 + 1);
        self.ids.insert(id, path);
        id
    }
}

/// Shared-state in-memory store. Clones observe the same entries.
#[derive(Debug, Clone)]
pub struct MemoryAssetStore {
    root: PathBuf,
    state: Rc<RefCell<State>>,
}

impl MemoryAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut state = State::default();
        state.entries.insert(root.clone(), Entry::Dir);
        Self { root, state: Rc::new(RefCell::new(state)) }
    }

    /// Seed a directory (and its parents) relative to the root.
    pub fn with_dir(self, relative: &str) -> Self {
        let path = self.root.join(relative);
        self.seed_parents(&path);
        self.state.borrow_mut().entries.insert(path, Entry::Dir);
        self
    }

    /// Seed a file relative to the root.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.root.join(relative);
        self.seed_parents(&path);
        self.state.borrow_mut().entries.insert(path, Entry::File(content.to_string()));
        self
    }

    /// Select a path relative to the root.
    pub fn with_selection(self, relative: &str) -> Self {
        self.state.borrow_mut().selection = Some(self.root.join(relative));
        self
    }

    /// Make writes to `relative` fail as a store rejection.
    pub fn reject_write(self, relative: &str) -> Self {
        self.state.borrow_mut().rejected.insert(self.root.join(relative));
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.borrow().calls.clone()
    }

    /// Paths created through the port, in order.
    pub fn created(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .map(|call| match call {
                StoreCall::CreateFolder(p) | StoreCall::CreateFile(p) => p,
            })
            .collect()
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        match self.state.borrow().entries.get(path) {
            Some(Entry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    pub fn prompts(&self) -> Vec<NamingPrompt> {
        self.state.borrow().prompts.clone()
    }

    pub fn revealed(&self) -> Vec<PathBuf> {
        self.state.borrow().revealed.clone()
    }

    fn seed_parents(&self, path: &Path) {
        let mut state = self.state.borrow_mut();
        let mut current = path.parent();
        while let Some(dir) = current {
            if !dir.starts_with(&self.root) {
                break;
            }
            state.entries.entry(dir.to_path_buf()).or_insert(Entry::Dir);
            current = dir.parent();
        }
    }

    fn check_writable(&self, path: &Path) -> Result<(), AppError> {
        let state = self.state.borrow();
        if state.rejected.contains(path) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("store rejected {}", path.display()),
            )));
        }
        if state.entries.contains_key(path) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }
        let parent_is_dir = path
            .parent()
            .is_some_and(|parent| matches!(state.entries.get(parent), Some(Entry::Dir)));
        if !parent_is_dir {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent of {} does not exist", path.display()),
            )));
        }
        Ok(())
    }
}

impl AssetStore for MemoryAssetStore {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn create_folder(&self, parent: &Path, name: &str) -> Result<AssetId, AppError> {
        let path = parent.join(name);
        self.check_writable(&path)?;
        let mut state = self.state.borrow_mut();
        state.entries.insert(path.clone(), Entry::Dir);
        state.calls.push(StoreCall::CreateFolder(path.clone()));
        Ok(state.register(path))
    }

    fn create_file_with_content(&self, path: &Path, content: &str) -> Result<AssetId, AppError> {
        self.check_writable(path)?;
        let mut state = self.state.borrow_mut();
        state.entries.insert(path.to_path_buf(), Entry::File(content.to_string()));
        state.calls.push(StoreCall::CreateFile(path.to_path_buf()));
        Ok(state.register(path.to_path_buf()))
    }

    fn path_for_id(&self, id: AssetId) -> Option<PathBuf> {
        self.state.borrow().ids.get(&id).cloned()
    }

    fn current_selection_path(&self) -> Option<PathBuf> {
        self.state.borrow().selection.clone()
    }

    fn exists(&self, path: &Path) -> bool {
        self.state.borrow().entries.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.state.borrow().entries.get(path), Some(Entry::Dir))
    }

    fn begin_interactive_naming(&self, prompt: &NamingPrompt) -> Result<(), AppError> {
        self.state.borrow_mut().prompts.push(prompt.clone());
        Ok(())
    }

    fn reveal_asset(&self, path: &Path) {
        self.state.borrow_mut().revealed.push(path.to_path_buf());
    }

    fn find_assets_by_name_and_type(&self, query: &str) -> Vec<AssetId> {
        let mut name = "";
        let mut extension = None;
        for part in query.split_whitespace() {
            match part.strip_prefix("t:") {
                Some("template-index") => extension = Some("index"),
                Some(other) => extension = Some(other),
                None => name = part,
            }
        }

        let hits: Vec<PathBuf> = self
            .state
            .borrow()
            .entries
            .iter()
            .filter(|(path, entry)| {
                matches!(entry, Entry::File(_))
                    && path.file_stem().and_then(|s| s.to_str()) == Some(name)
                    && extension
                        .is_none_or(|ext| path.extension().and_then(|e| e.to_str()) == Some(ext))
            })
            .map(|(path, _)| path.clone())
            .collect();

        let mut state = self.state.borrow_mut();
        hits.into_iter().map(|path| state.register(path)).collect()
    }
}
