//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Every operation has an `*_at` form taking the project
//! directory and a convenience form using the current directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::adapters::directory_template_store::{DirectoryTemplateStore, TemplateRoot};
use crate::adapters::dry_run_asset_store::DryRunAssetStore;
use crate::adapters::embedded_templates::EmbeddedTemplates;
use crate::adapters::filesystem_asset_store::FilesystemAssetStore;
use crate::app::{
    AppContext,
    commands::{create_feature, create_script, init, list},
    config::load_config,
};
use crate::domain::{EngineConfig, GeneratedArtifactSet, TemplateCatalog, TemplateStrategy};
use crate::ports::NameInput;

pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::list::TemplateEntry;
pub use crate::domain::{AppError, TemplateKind};

/// Options shared by the scaffold commands.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Selected asset; relative paths resolve against the project directory.
    pub selection: Option<PathBuf>,
    /// Template directory overriding the configured strategy with `resource-root`.
    pub templates: Option<PathBuf>,
    /// Resolve and render everything but write nothing.
    pub dry_run: bool,
}

/// Result of a scaffold command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldOutcome {
    pub kind: TemplateKind,
    pub dry_run: bool,
    #[serde(flatten)]
    pub artifacts: GeneratedArtifactSet,
}

/// Catalog listing together with where templates are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateListing {
    pub location: String,
    pub entries: Vec<TemplateEntry>,
}

/// Project directory plus its loaded configuration.
struct Project {
    root: PathBuf,
    config: EngineConfig,
}

impl Project {
    fn open(root: PathBuf, templates: Option<&Path>) -> Result<Self, AppError> {
        let mut config = load_config(&root)?;
        if let Some(dir) = templates {
            config.templates.strategy = TemplateStrategy::ResourceRoot;
            config.templates.dir = dir.to_path_buf();
        }
        Ok(Self { root, config })
    }

    fn asset_store(&self, selection: Option<&Path>) -> Result<FilesystemAssetStore, AppError> {
        let store_root = self.root.join(&self.config.store.root);
        let store = FilesystemAssetStore::new(store_root, &self.config.store.extension)?;
        Ok(store.with_selection(selection.map(|path| self.root.join(path))))
    }

    fn template_store(
        &self,
        store: &FilesystemAssetStore,
    ) -> Result<DirectoryTemplateStore<FilesystemAssetStore>, AppError> {
        let source = &self.config.templates;
        let root = match source.strategy {
            TemplateStrategy::FixedRoot => TemplateRoot::beside_executable(&source.dir)?,
            TemplateStrategy::ResourceRoot => TemplateRoot::Resource(self.root.join(&source.dir)),
            TemplateStrategy::IndexedLookup => {
                TemplateRoot::Indexed { store: store.clone(), identity: source.identity.clone() }
            }
        };
        Ok(DirectoryTemplateStore::new(root, TemplateCatalog::builtin()))
    }

    fn extension(&self) -> &str {
        &self.config.store.extension
    }
}

fn parse_kind(kind: &str) -> Result<TemplateKind, AppError> {
    TemplateKind::from_name(kind).ok_or_else(|| AppError::InvalidTemplateKind(kind.to_string()))
}

// =============================================================================
// Scaffold API
// =============================================================================

/// Create a single script of `kind` in the current directory's project.
pub fn create_script(kind: &str, options: &ScaffoldOptions) -> Result<ScaffoldOutcome, AppError> {
    create_script_at(std::env::current_dir()?, kind, options)
}

/// Create a single script of `kind` in the project at `root`.
pub fn create_script_at(
    root: impl Into<PathBuf>,
    kind: &str,
    options: &ScaffoldOptions,
) -> Result<ScaffoldOutcome, AppError> {
    let kind = parse_kind(kind)?;
    let project = Project::open(root.into(), options.templates.as_deref())?;
    let store = project.asset_store(options.selection.as_deref())?;
    let templates = project.template_store(&store)?;
    let catalog = TemplateCatalog::builtin();

    let artifacts = if options.dry_run {
        let ctx =
            AppContext::new(DryRunAssetStore::new(store), templates, catalog, project.extension());
        create_script::execute(&ctx, kind)?
    } else {
        let ctx = AppContext::new(store, templates, catalog, project.extension());
        create_script::execute(&ctx, kind)?
    };

    Ok(ScaffoldOutcome { kind, dry_run: options.dry_run, artifacts })
}

/// Create a renderer feature folder in the current directory's project.
pub fn create_feature<N: NameInput + ?Sized>(
    input: &mut N,
    options: &ScaffoldOptions,
) -> Result<Option<ScaffoldOutcome>, AppError> {
    create_feature_at(std::env::current_dir()?, input, options)
}

/// Create a renderer feature folder in the project at `root`, named through `input`.
///
/// Returns `None` when naming is cancelled.
pub fn create_feature_at<N: NameInput + ?Sized>(
    root: impl Into<PathBuf>,
    input: &mut N,
    options: &ScaffoldOptions,
) -> Result<Option<ScaffoldOutcome>, AppError> {
    let project = Project::open(root.into(), options.templates.as_deref())?;
    let store = project.asset_store(options.selection.as_deref())?;
    let templates = project.template_store(&store)?;
    let catalog = TemplateCatalog::builtin();

    let artifacts = if options.dry_run {
        let ctx =
            AppContext::new(DryRunAssetStore::new(store), templates, catalog, project.extension());
        create_feature::execute(&ctx, input)?
    } else {
        let ctx = AppContext::new(store, templates, catalog, project.extension());
        create_feature::execute(&ctx, input)?
    };

    Ok(artifacts.map(|artifacts| ScaffoldOutcome {
        kind: TemplateKind::CompositeFeature,
        dry_run: options.dry_run,
        artifacts,
    }))
}

// =============================================================================
// Catalog API
// =============================================================================

/// List template kinds for the current directory's project.
pub fn list_templates(templates: Option<&Path>) -> Result<TemplateListing, AppError> {
    list_templates_at(std::env::current_dir()?, templates)
}

/// List template kinds and their availability for the project at `root`.
pub fn list_templates_at(
    root: impl Into<PathBuf>,
    templates: Option<&Path>,
) -> Result<TemplateListing, AppError> {
    let project = Project::open(root.into(), templates)?;
    let store = project.asset_store(None)?;
    let template_store = project.template_store(&store)?;
    let location = match template_store.template_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(location) => location,
    };

    let catalog = TemplateCatalog::builtin();
    let ctx = AppContext::new(store, template_store, catalog, project.extension());
    Ok(TemplateListing { location, entries: list::execute(&ctx) })
}

// =============================================================================
// Init API
// =============================================================================

/// Export the embedded templates into the current directory.
pub fn init(force: bool) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, force)
}

/// Export the embedded templates into the project at `root`.
pub fn init_at(root: impl Into<PathBuf>, force: bool) -> Result<InitOutcome, AppError> {
    let templates = EmbeddedTemplates::new(TemplateCatalog::builtin());
    init::execute(&root.into(), &templates, force)
}
