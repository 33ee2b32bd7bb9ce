//! scriptgen: scaffold script files and renderer-feature folders from text templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InitOutcome, ScaffoldOptions, ScaffoldOutcome, TemplateEntry, TemplateListing,
    create_feature, create_feature_at, create_script, create_script_at, init, init_at,
    list_templates, list_templates_at,
};
pub use domain::{AppError, GeneratedArtifactSet, NamingEvent, NamingPrompt, TemplateKind};
pub use ports::NameInput;
