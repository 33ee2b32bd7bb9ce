use crate::domain::TemplateCatalog;
use crate::ports::{AssetStore, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: AssetStore, T: TemplateStore> {
    store: S,
    templates: T,
    catalog: TemplateCatalog,
    extension: String,
}

impl<S: AssetStore, T: TemplateStore> AppContext<S, T> {
    /// Create a new application context.
    pub fn new(store: S, templates: T, catalog: TemplateCatalog, extension: &str) -> Self {
        Self { store, templates, catalog, extension: extension.to_string() }
    }

    /// Get a reference to the asset store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Extension of generated files, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `<stem>.<extension>`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension)
    }
}
