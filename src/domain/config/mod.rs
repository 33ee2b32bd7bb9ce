mod engine_config;
pub mod parse;
pub mod paths;

pub use engine_config::{EngineConfig, StoreConfig, TemplateSourceConfig, TemplateStrategy};
pub use parse::parse_config_content;
