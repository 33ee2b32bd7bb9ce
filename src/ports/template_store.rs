use crate::domain::{AppError, TemplateKind};

/// Port for retrieving raw template text.
pub trait TemplateStore {
    /// Template text for `kind`, or `AppError::TemplateNotFound`.
    fn resolve(&self, kind: TemplateKind) -> Result<String, AppError>;
}
