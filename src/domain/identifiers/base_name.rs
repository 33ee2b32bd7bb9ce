use crate::domain::AppError;
use crate::impl_validated_name;

/// A validated base name shared by every artifact of one scaffold.
///
/// Guarantees:
/// - Non-empty
/// - No path separators or traversal components
/// - Usable verbatim as a folder name and as a file-name prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseName(String);

impl_validated_name!(BaseName, AppError::InvalidBaseName);

impl BaseName {
    /// Base name followed by a manifest suffix, e.g. `Outline` + `.Pass`.
    pub fn with_suffix(&self, suffix: &str) -> String {
        format!("{}{}", self.0, suffix)
    }
}

impl From<BaseName> for String {
    fn from(val: BaseName) -> Self {
        val.0
    }
}
