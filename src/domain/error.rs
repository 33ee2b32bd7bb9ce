use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::TemplateKind;

/// Library-wide error type for scriptgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Template text for a kind could not be located or read.
    #[error("Template for '{kind}' not found at {location}")]
    TemplateNotFound { kind: TemplateKind, location: String },

    /// The enclosing folder of a composite scaffold could not be created.
    #[error("Failed to create folder {}: {reason}", path.display())]
    FolderCreationFailed { path: PathBuf, reason: String },

    /// The store rejected an individual file write.
    #[error("Failed to write {} ({kind}): {reason}", path.display())]
    FileWriteFailed { path: PathBuf, kind: TemplateKind, reason: String },

    /// Base name is empty or contains path components.
    #[error("Invalid name '{0}': must be non-empty and must not contain path separators")]
    InvalidBaseName(String),

    /// Template kind selector is unknown.
    #[error("Unknown template kind '{0}'. Run 'scriptgen list' to see available kinds.")]
    InvalidTemplateKind(String),

    /// Template kind can only be produced as part of a composite scaffold.
    #[error("Template '{0}' is part of the renderer feature set. Use 'scriptgen feature' instead.")]
    CompositeOnlyKind(TemplateKind),

    /// A naming session is already waiting for the operator.
    #[error("A naming session is already in progress")]
    NamingSessionActive,

    /// Commit or cancel arrived for a session that is not active.
    #[error("Naming session {0} is not active")]
    UnknownNamingSession(u64),

    /// `init` would overwrite exported templates.
    #[error("{} already exists. Use --force to overwrite exported templates.", .0.display())]
    AlreadyInitialized(PathBuf),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidBaseName(_)
            | AppError::InvalidTemplateKind(_)
            | AppError::CompositeOnlyKind(_)
            | AppError::UnknownNamingSession(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound { .. } => io::ErrorKind::NotFound,
            AppError::FolderCreationFailed { .. }
            | AppError::NamingSessionActive
            | AppError::AlreadyInitialized(_) => io::ErrorKind::AlreadyExists,
            AppError::FileWriteFailed { .. } => io::ErrorKind::Other,
        }
    }
}
