use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::paths::index_query;
use crate::domain::{AppError, TemplateCatalog, TemplateKind};
use crate::ports::{AssetStore, TemplateStore};

/// Where the template directory is found.
#[derive(Debug, Clone)]
pub enum TemplateRoot<S> {
    /// Fixed directory relative to the engine's install location.
    Fixed(PathBuf),
    /// Directory under the host application's read-only resource tree.
    Resource(PathBuf),
    /// Directory containing the asset that matches `identity` in the store index,
    /// looked up on every resolve.
    Indexed { store: S, identity: String },
}

impl<S> TemplateRoot<S> {
    /// `<directory of the running executable>/<relative>`.
    pub fn beside_executable(relative: &Path) -> Result<Self, AppError> {
        let exe = std::env::current_exe()?;
        let install_dir = exe.parent().ok_or_else(|| {
            AppError::config_error(format!("Executable path has no parent: {}", exe.display()))
        })?;
        Ok(TemplateRoot::Fixed(install_dir.join(relative)))
    }
}

/// Template store reading `<Kind>.txt` files from one directory.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore<S> {
    root: TemplateRoot<S>,
    catalog: TemplateCatalog,
}

impl<S: AssetStore> DirectoryTemplateStore<S> {
    pub fn new(root: TemplateRoot<S>, catalog: TemplateCatalog) -> Self {
        Self { root, catalog }
    }

    /// Directory the configured strategy points at, or a description of where
    /// it looked when it cannot resolve one.
    pub fn template_dir(&self) -> Result<PathBuf, String> {
        match &self.root {
            TemplateRoot::Fixed(dir) | TemplateRoot::Resource(dir) => Ok(dir.clone()),
            TemplateRoot::Indexed { store, identity } => {
                let query = index_query(identity);
                store
                    .find_assets_by_name_and_type(&query)
                    .first()
                    .and_then(|id| store.path_for_id(*id))
                    .and_then(|path| path.parent().map(Path::to_path_buf))
                    .ok_or_else(|| format!("asset index (no asset matches '{}')", query))
            }
        }
    }
}

impl<S: AssetStore> TemplateStore for DirectoryTemplateStore<S> {
    fn resolve(&self, kind: TemplateKind) -> Result<String, AppError> {
        let dir = self
            .template_dir()
            .map_err(|location| AppError::TemplateNotFound { kind, location })?;
        let path = dir.join(&self.catalog.descriptor(kind).file_name);

        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(kind = %kind, path = %path.display(), "resolved template");
                Ok(text)
            }
            Err(err) => {
                debug!(kind = %kind, path = %path.display(), error = %err, "template unreadable");
                Err(AppError::TemplateNotFound { kind, location: path.display().to_string() })
            }
        }
    }
}
