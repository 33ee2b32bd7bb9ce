//! Engine configuration loading from the project directory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config;
use crate::domain::{AppError, EngineConfig};

/// Load and validate `scriptgen.toml`, or defaults when the file is absent.
pub fn load_config(project_root: &Path) -> Result<EngineConfig, AppError> {
    let config_path = config::paths::config(project_root);
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(EngineConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    config::parse::parse_config_content(&content).map_err(|err| match err {
        AppError::TomlParseError(inner) => AppError::config_error(format!(
            "Invalid {}: {}",
            config_path.display(),
            inner
        )),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplateStrategy;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_config(temp.path()).unwrap(), EngineConfig::default());
    }

    #[test]
    fn reads_file_from_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("scriptgen.toml"),
            "[templates]\nstrategy = \"indexed-lookup\"\nidentity = \"Tools\"\n",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.templates.strategy, TemplateStrategy::IndexedLookup);
        assert_eq!(config.templates.identity, "Tools");
    }

    #[test]
    fn unknown_keys_name_the_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("scriptgen.toml"), "[store]\nfolder = \"Assets\"\n").unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert!(err.to_string().contains("scriptgen.toml"));
    }
}
