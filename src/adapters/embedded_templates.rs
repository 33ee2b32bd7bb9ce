use include_dir::{Dir, include_dir};

use crate::domain::{AppError, TemplateCatalog, TemplateKind};
use crate::ports::TemplateStore;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// A template file bundled into the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File name, `<Kind>.txt`.
    pub file_name: String,
    pub content: String,
}

/// Default templates compiled into the binary, exported by `init`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplates {
    catalog: TemplateCatalog,
}

impl EmbeddedTemplates {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// One file per template kind, in menu order.
    pub fn files(&self) -> Result<Vec<TemplateFile>, AppError> {
        self.catalog
            .menu()
            .into_iter()
            .map(|descriptor| {
                Ok(TemplateFile {
                    file_name: descriptor.file_name.clone(),
                    content: self.resolve(descriptor.kind)?,
                })
            })
            .collect()
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn resolve(&self, kind: TemplateKind) -> Result<String, AppError> {
        let file_name = &self.catalog.descriptor(kind).file_name;
        TEMPLATE_DIR
            .get_file(file_name)
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| AppError::TemplateNotFound {
                kind,
                location: format!("embedded templates ({})", file_name),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SCRIPT_NAME_TOKEN;

    #[test]
    fn every_kind_has_an_embedded_template() {
        let templates = EmbeddedTemplates::default();
        for kind in TemplateKind::ALL {
            let text = templates.resolve(kind).unwrap();
            assert!(!text.is_empty(), "{} template is empty", kind);
        }
    }

    #[test]
    fn every_embedded_template_uses_the_script_name_token() {
        let templates = EmbeddedTemplates::default();
        for file in templates.files().unwrap() {
            assert!(file.content.contains(SCRIPT_NAME_TOKEN), "{} lacks token", file.file_name);
        }
    }

    #[test]
    fn files_are_named_by_convention() {
        let files = EmbeddedTemplates::default().files().unwrap();
        assert_eq!(files.len(), TemplateKind::ALL.len());
        assert!(files.iter().any(|f| f.file_name == "Class.txt"));
        assert!(files.iter().any(|f| f.file_name == "CompositeFeatureSetting.txt"));
    }
}
