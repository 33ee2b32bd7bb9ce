//! Host asset store port.
//!
//! The asset store owns the folders and files the engine creates. Every
//! mutation is a single call; the engine never holds two in flight.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, AssetId, NamingPrompt};

/// Port for the hierarchical store scaffolds are written into.
///
/// All paths are absolute paths inside [`AssetStore::root`].
pub trait AssetStore {
    /// Root directory of the store.
    fn root(&self) -> PathBuf;

    /// Create folder `name` inside `parent`. Fails if an entry with that name exists.
    fn create_folder(&self, parent: &Path, name: &str) -> Result<AssetId, AppError>;

    /// Create a new file with `content`. Fails if the path already exists.
    fn create_file_with_content(&self, path: &Path, content: &str) -> Result<AssetId, AppError>;

    /// Path of a previously created asset.
    fn path_for_id(&self, id: AssetId) -> Option<PathBuf>;

    /// Path of the asset the operator currently has selected, if any.
    fn current_selection_path(&self) -> Option<PathBuf>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Show the pending-name UI. The host later reports commit or cancel for
    /// `prompt.session` back to the naming coordinator.
    fn begin_interactive_naming(&self, prompt: &NamingPrompt) -> Result<(), AppError>;

    /// Reveal and select a created asset.
    fn reveal_asset(&self, path: &Path);

    /// Search the content index. `query` is `<name> t:<type>`.
    fn find_assets_by_name_and_type(&self, query: &str) -> Vec<AssetId>;
}
