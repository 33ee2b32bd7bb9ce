//! Pure parse/validate for engine configuration (`scriptgen.toml`).

use crate::domain::AppError;

use super::EngineConfig;

/// Parse and validate engine configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<EngineConfig, AppError> {
    let config: EngineConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Serialize a configuration for `scriptgen init`.
pub fn render_config_content(config: &EngineConfig) -> Result<String, AppError> {
    toml::to_string_pretty(config)
        .map_err(|e| AppError::config_error(format!("Failed to serialize config: {e}")))
}
