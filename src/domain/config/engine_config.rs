//! Engine configuration domain models.

use std::path::{Component, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::identifiers::validation::validate_asset_name;

/// Configuration loaded from `scriptgen.toml` in the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Asset store layout.
    #[serde(default)]
    pub store: StoreConfig,
    /// Where template text lives.
    #[serde(default)]
    pub templates: TemplateSourceConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.store.validate()?;
        self.templates.validate()?;
        Ok(())
    }
}

/// Asset store layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store root relative to the project directory.
    #[serde(default = "default_store_root")]
    pub root: PathBuf,
    /// Extension of generated script files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { root: default_store_root(), extension: default_extension() }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.root.as_os_str().is_empty() {
            return Err(AppError::config_error("store.root must not be empty"));
        }
        if self.root.is_absolute() {
            return Err(AppError::config_error(
                "store.root must be relative to the project directory",
            ));
        }
        if self.root.components().any(|c| c == Component::ParentDir) {
            return Err(AppError::config_error(format!(
                "store.root '{}' must stay inside the project directory",
                self.root.display()
            )));
        }
        if !validate_asset_name(&self.extension) || self.extension.contains('.') {
            return Err(AppError::config_error(format!(
                "store.extension '{}' must be a bare extension such as 'cs'",
                self.extension
            )));
        }
        Ok(())
    }
}

fn default_store_root() -> PathBuf {
    PathBuf::from("Assets")
}

fn default_extension() -> String {
    "cs".to_string()
}

/// How the template root directory is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateStrategy {
    /// Fixed directory relative to the engine's install location.
    #[default]
    FixedRoot,
    /// Directory under the host application's resource tree.
    ResourceRoot,
    /// Directory of the asset matching the engine identity in the store index.
    IndexedLookup,
}

/// Template source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSourceConfig {
    #[serde(default)]
    pub strategy: TemplateStrategy,
    /// Template directory. Relative to the executable for `fixed-root`,
    /// to the project directory for `resource-root`.
    #[serde(default = "default_template_dir")]
    pub dir: PathBuf,
    /// Asset name searched for by `indexed-lookup`.
    #[serde(default = "default_identity")]
    pub identity: String,
}

impl Default for TemplateSourceConfig {
    fn default() -> Self {
        Self {
            strategy: TemplateStrategy::default(),
            dir: default_template_dir(),
            identity: default_identity(),
        }
    }
}

impl TemplateSourceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.strategy != TemplateStrategy::IndexedLookup && self.dir.as_os_str().is_empty() {
            return Err(AppError::config_error("templates.dir must not be empty"));
        }
        if self.strategy == TemplateStrategy::IndexedLookup
            && !validate_asset_name(&self.identity)
        {
            return Err(AppError::config_error(format!(
                "templates.identity '{}' is not a valid asset name",
                self.identity
            )));
        }
        Ok(())
    }
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_identity() -> String {
    "ScriptGenerator".to_string()
}
