use serde::Serialize;

use crate::app::AppContext;
use crate::domain::TemplateKind;
use crate::ports::{AssetStore, TemplateStore};

/// One menu entry and whether its template text can currently be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub kind: TemplateKind,
    pub label: &'static str,
    pub priority: i32,
    pub file_name: String,
    /// Only produced through `feature`.
    pub composite_part: bool,
    pub available: bool,
}

/// Catalog entries in menu order.
pub fn execute<S, T>(ctx: &AppContext<S, T>) -> Vec<TemplateEntry>
where
    S: AssetStore,
    T: TemplateStore,
{
    ctx.catalog()
        .menu()
        .into_iter()
        .map(|descriptor| TemplateEntry {
            kind: descriptor.kind,
            label: descriptor.label,
            priority: descriptor.priority,
            file_name: descriptor.file_name.clone(),
            composite_part: descriptor.kind.is_composite_part(),
            available: ctx.templates().resolve(descriptor.kind).is_ok(),
        })
        .collect()
}
