use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, AssetId, NamingPrompt};
use crate::ports::AssetStore;

/// Ids for planned assets start here so they never collide with the inner store's.
const PLANNED_ID_BASE: u64 = 1 << 48;

/// Asset store that reads through to an inner store and records writes instead of applying them.
#[derive(Debug)]
pub struct DryRunAssetStore<S: AssetStore> {
    inner: S,
    planned: RefCell<Vec<(PathBuf, bool)>>,
}

impl<S: AssetStore> DryRunAssetStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, planned: RefCell::new(Vec::new()) }
    }

    /// Paths that would have been created, in creation order.
    pub fn planned(&self) -> Vec<PathBuf> {
        self.planned.borrow().iter().map(|(path, _)| path.clone()).collect()
    }

    fn plan(&self, path: PathBuf, is_dir: bool) -> Result<AssetId, AppError> {
        if self.exists(&path) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }
        debug!(path = %path.display(), "planned (dry run)");
        let mut planned = self.planned.borrow_mut();
        planned.push((path, is_dir));
        Ok(AssetId(PLANNED_ID_BASE + planned.len() as u64 - 1))
    }
}

impl<S: AssetStore> AssetStore for DryRunAssetStore<S> {
    fn root(&self) -> PathBuf {
        self.inner.root()
    }

    fn create_folder(&self, parent: &Path, name: &str) -> Result<AssetId, AppError> {
        self.plan(parent.join(name), true)
    }

    fn create_file_with_content(&self, path: &Path, _content: &str) -> Result<AssetId, AppError> {
        if let Some(parent) = path.parent()
            && !self.is_dir(parent)
        {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", parent.display()),
            )));
        }
        self.plan(path.to_path_buf(), false)
    }

    fn path_for_id(&self, id: AssetId) -> Option<PathBuf> {
        match id.0.checked_sub(PLANNED_ID_BASE) {
            Some(index) => {
                self.planned.borrow().get(index as usize).map(|(path, _)| path.clone())
            }
            None => self.inner.path_for_id(id),
        }
    }

    fn current_selection_path(&self) -> Option<PathBuf> {
        self.inner.current_selection_path()
    }

    fn exists(&self, path: &Path) -> bool {
        self.planned.borrow().iter().any(|(p, _)| p == path) || self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.planned.borrow().iter().any(|(p, is_dir)| p == path && *is_dir)
            || self.inner.is_dir(path)
    }

    fn begin_interactive_naming(&self, prompt: &NamingPrompt) -> Result<(), AppError> {
        self.inner.begin_interactive_naming(prompt)
    }

    fn reveal_asset(&self, path: &Path) {
        debug!(path = %path.display(), "reveal skipped (dry run)");
    }

    fn find_assets_by_name_and_type(&self, query: &str) -> Vec<AssetId> {
        self.inner.find_assets_by_name_and_type(query)
    }
}
