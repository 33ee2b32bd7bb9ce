use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{BaseName, TemplateKind};

/// Identity assigned by the asset store to a created folder or file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully-resolved request to scaffold one template kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub kind: TemplateKind,
    /// Existing directory inside the asset store.
    pub destination: PathBuf,
    pub base_name: BaseName,
}

/// Everything a scaffold wrote, returned to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifactSet {
    /// The folder for composite scaffolds, the single file otherwise.
    pub root: PathBuf,
    /// Enclosing folder created by a composite scaffold.
    pub folder: Option<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl GeneratedArtifactSet {
    pub fn is_composite(&self) -> bool {
        self.folder.is_some()
    }

    /// Path of `root` relative to `base`, for display.
    pub fn display_root(&self, base: &Path) -> String {
        self.root.strip_prefix(base).unwrap_or(&self.root).display().to_string()
    }
}

/// What the host shows while a name is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPrompt {
    pub session: SessionId,
    pub default_label: String,
    /// Directory in which the pending entry appears.
    pub anchor: PathBuf,
}

/// Identifies one naming session so late events can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the host reports back for a naming session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingEvent {
    /// Operator finalized a name. Empty names are treated as cancel.
    Commit(String),
    /// Operator aborted (escape, interrupt, focus loss).
    Cancel,
}
