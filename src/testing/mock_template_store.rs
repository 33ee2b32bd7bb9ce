use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{AppError, TemplateKind};
use crate::ports::TemplateStore;

/// Mock template store for testing.
#[derive(Debug, Default)]
pub struct MockTemplateStore {
    pub templates: HashMap<TemplateKind, String>,
    pub resolved: RefCell<Vec<TemplateKind>>,
}

impl MockTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a distinguishable template for every kind: `<Kind>:#SCRIPTNAME#`.
    pub fn complete() -> Self {
        TemplateKind::ALL
            .into_iter()
            .fold(Self::new(), |store, kind| store.with(kind, &format!("{}:#SCRIPTNAME#", kind)))
    }

    pub fn with(mut self, kind: TemplateKind, text: &str) -> Self {
        self.templates.insert(kind, text.to_string());
        self
    }

    pub fn without(mut self, kind: TemplateKind) -> Self {
        self.templates.remove(&kind);
        self
    }
}

impl TemplateStore for MockTemplateStore {
    fn resolve(&self, kind: TemplateKind) -> Result<String, AppError> {
        self.resolved.borrow_mut().push(kind);
        self.templates.get(&kind).cloned().ok_or_else(|| AppError::TemplateNotFound {
            kind,
            location: "mock".to_string(),
        })
    }
}
