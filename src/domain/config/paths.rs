use std::path::{Path, PathBuf};

/// Configuration file name in the project root.
pub const CONFIG_FILE: &str = "scriptgen.toml";

/// Marker file whose directory is the template root for indexed lookup.
pub const INDEX_MARKER_EXTENSION: &str = "index";

/// Asset type tag used in index queries for the marker file.
pub const INDEX_ASSET_TYPE: &str = "template-index";

/// `<project>/scriptgen.toml`
pub fn config(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE)
}

/// `<identity> t:template-index`
pub fn index_query(identity: &str) -> String {
    format!("{} t:{}", identity, INDEX_ASSET_TYPE)
}

/// `<identity>.index`
pub fn index_marker_file(identity: &str) -> String {
    format!("{}.{}", identity, INDEX_MARKER_EXTENSION)
}
