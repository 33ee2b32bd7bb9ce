//! CLI Adapter.

mod init;
mod list;
mod scaffold;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable consulted for the log filter before `RUST_LOG`.
const LOG_ENV: &str = "SCRIPTGEN_LOG";

#[derive(Parser)]
#[command(name = "scriptgen")]
#[command(version)]
#[command(
    about = "Scaffold script files and renderer-feature folders from text templates",
    long_about = None
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read templates from this directory instead of the configured location
    #[arg(long, global = true, value_name = "DIR")]
    templates: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a single script from a template kind
    #[clap(visible_alias = "n")]
    New {
        /// Template kind (behavior, class, interface, data-type, value-type)
        kind: String,
        #[command(flatten)]
        target: scaffold::TargetArgs,
    },
    /// Create a renderer feature folder with its pass and setting scripts
    #[clap(visible_alias = "f")]
    Feature {
        /// Feature name; prompts interactively when omitted
        #[arg(short, long)]
        name: Option<String>,
        #[command(flatten)]
        target: scaffold::TargetArgs,
    },
    /// List template kinds and whether their templates resolve
    #[clap(visible_alias = "ls")]
    List {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in templates into the project
    #[clap(visible_alias = "i")]
    Init {
        /// Overwrite previously exported templates
        #[arg(long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let templates = cli.templates;
    let result: Result<(), AppError> = match cli.command {
        Commands::New { kind, target } => scaffold::run_new(&kind, target, templates),
        Commands::Feature { name, target } => scaffold::run_feature(name, target, templates),
        Commands::List { json } => list::run_list(templates.as_deref(), json),
        Commands::Init { force } => init::run_init(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("scriptgen=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in a host process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn json_output<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::config_error(format!("Failed to render JSON: {e}")))?;
    println!("{}", rendered);
    Ok(())
}

/// `path` relative to the project directory, for display.
fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
