//! Destination directory planning for new artifacts.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::ports::AssetStore;

/// Service choosing the directory a new artifact is created in.
pub struct DestinationPlanner;

impl DestinationPlanner {
    /// Directory for a new artifact given the operator's selection.
    ///
    /// - no selection: the store root
    /// - a directory: the directory itself
    /// - anything else: its containing directory
    ///
    /// Selections that do not exist, contain `..`, or whose directory is
    /// outside the store fall back to the store root. Never fails.
    pub fn plan<S: AssetStore>(store: &S, selection: Option<&Path>) -> PathBuf {
        let root = store.root();
        let Some(selected) = selection else {
            return root;
        };

        let candidate = if selected.components().any(|c| c == Component::ParentDir) {
            None
        } else if store.is_dir(selected) {
            Some(selected.to_path_buf())
        } else if store.exists(selected) {
            selected.parent().map(Path::to_path_buf)
        } else {
            None
        };

        match candidate {
            Some(dir) if dir.starts_with(&root) && store.is_dir(&dir) => dir,
            _ => {
                debug!(selection = %selected.display(), "selection unusable, using store root");
                root
            }
        }
    }

    /// [`DestinationPlanner::plan`] for the store's current selection.
    pub fn plan_current<S: AssetStore>(store: &S) -> PathBuf {
        let selection = store.current_selection_path();
        Self::plan(store, selection.as_deref())
    }
}
