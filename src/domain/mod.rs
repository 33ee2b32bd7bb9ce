pub mod artifact;
pub mod catalog;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod manifest;
pub mod render;
pub mod template_kind;

pub use artifact::{
    AssetId, GeneratedArtifactSet, NamingEvent, NamingPrompt, ScaffoldRequest, SessionId,
};
pub use catalog::{TemplateCatalog, TemplateDescriptor};
pub use config::{EngineConfig, TemplateStrategy};
pub use error::AppError;
pub use identifiers::BaseName;
pub use manifest::{ArtifactManifest, ArtifactManifestEntry};
pub use render::{SCRIPT_NAME_TOKEN, render, render_script};
pub use template_kind::TemplateKind;
