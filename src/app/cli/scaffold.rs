//! `new` and `feature` command implementations.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::adapters::terminal_name_input::{PresetNameInput, TerminalNameInput};
use crate::app::api::{self, ScaffoldOptions, ScaffoldOutcome};
use crate::domain::AppError;

use super::{json_output, relative};

/// Where and how a scaffold is written.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Selected asset or folder, relative to the project directory
    #[arg(short, long, value_name = "PATH")]
    selection: Option<PathBuf>,
    /// Show what would be created without writing
    #[arg(long)]
    dry_run: bool,
    /// Print machine-readable JSON
    #[arg(long)]
    json: bool,
}

impl TargetArgs {
    fn options(&self, templates: Option<PathBuf>) -> ScaffoldOptions {
        ScaffoldOptions { selection: self.selection.clone(), templates, dry_run: self.dry_run }
    }
}

pub fn run_new(kind: &str, target: TargetArgs, templates: Option<PathBuf>) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let outcome = api::create_script_at(&root, kind, &target.options(templates))?;

    if target.json {
        return json_output(&outcome);
    }
    report(&outcome, &root);
    Ok(())
}

pub fn run_feature(
    name: Option<String>,
    target: TargetArgs,
    templates: Option<PathBuf>,
) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let options = target.options(templates);
    let outcome = match name {
        Some(name) => {
            let mut input = PresetNameInput::new(Some(name));
            api::create_feature_at(&root, &mut input, &options)?
        }
        None => api::create_feature_at(&root, &mut TerminalNameInput, &options)?,
    };

    match (outcome, target.json) {
        (Some(outcome), true) => json_output(&outcome),
        (Some(outcome), false) => {
            report(&outcome, &root);
            Ok(())
        }
        (None, true) => json_output(&serde_json::json!({ "cancelled": true })),
        (None, false) => {
            println!("Cancelled; nothing was created");
            Ok(())
        }
    }
}

fn report(outcome: &ScaffoldOutcome, root: &Path) {
    let artifacts = &outcome.artifacts;

    if outcome.dry_run {
        println!("Dry run: nothing was written");
        if let Some(folder) = &artifacts.folder {
            println!("  Would create {}/", relative(folder, root));
        }
        for file in &artifacts.files {
            println!("  Would create {}", relative(file, root));
        }
        return;
    }

    if artifacts.is_composite() {
        println!("✅ Created {} at {}/", outcome.kind, artifacts.display_root(root));
        for file in &artifacts.files {
            println!("  • {}", relative(file, root));
        }
    } else {
        println!("✅ Created {} at {}", outcome.kind, artifacts.display_root(root));
    }
}
