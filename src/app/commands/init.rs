//! Export the embedded templates into the project.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::adapters::embedded_templates::EmbeddedTemplates;
use crate::app::config::load_config;
use crate::domain::config::parse::render_config_content;
use crate::domain::config::paths;
use crate::domain::{AppError, EngineConfig, TemplateStrategy};

/// What `init` wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitOutcome {
    pub template_dir: PathBuf,
    pub templates: Vec<PathBuf>,
    /// Index marker written for `indexed-lookup`.
    pub marker: Option<PathBuf>,
    /// Set when no config existed and a resource-root config was written.
    pub config: Option<PathBuf>,
}

/// Execute the init command.
///
/// Without a `scriptgen.toml`, writes one using `resource-root` and exports to
/// its template directory. With an existing config, exports wherever that
/// config's strategy reads from.
pub fn execute(
    project_root: &Path,
    templates: &EmbeddedTemplates,
    force: bool,
) -> Result<InitOutcome, AppError> {
    let config_path = paths::config(project_root);
    let write_config = !config_path.exists();
    let config = if write_config { resource_root_config() } else { load_config(project_root)? };

    let store_root = project_root.join(&config.store.root);
    let (template_dir, marker) = match config.templates.strategy {
        TemplateStrategy::ResourceRoot => (project_root.join(&config.templates.dir), None),
        TemplateStrategy::IndexedLookup => {
            let dir = store_root.join(&config.templates.identity);
            let marker = dir.join(paths::index_marker_file(&config.templates.identity));
            (dir, Some(marker))
        }
        TemplateStrategy::FixedRoot => {
            return Err(AppError::config_error(
                "fixed-root templates are installed beside the executable. Set \
                 templates.strategy to resource-root or indexed-lookup to export into the project",
            ));
        }
    };

    let files = templates.files()?;
    if !force
        && let Some(existing) =
            files.iter().map(|file| template_dir.join(&file.file_name)).find(|p| p.exists())
    {
        return Err(AppError::AlreadyInitialized(existing));
    }

    fs::create_dir_all(&store_root)?;
    fs::create_dir_all(&template_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = template_dir.join(&file.file_name);
        fs::write(&path, &file.content)?;
        written.push(path);
    }
    info!(dir = %template_dir.display(), count = written.len(), "exported templates");

    if let Some(marker) = &marker
        && !marker.exists()
    {
        fs::write(marker, "")?;
    }

    let config = if write_config {
        fs::write(&config_path, render_config_content(&config)?)?;
        info!(path = %config_path.display(), "wrote config");
        Some(config_path)
    } else {
        None
    };

    Ok(InitOutcome { template_dir, templates: written, marker, config })
}

fn resource_root_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.templates.strategy = TemplateStrategy::ResourceRoot;
    config
}
