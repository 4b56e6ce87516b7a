//! Error types for the studio shell
//!
//! Composition errors live in `zanlu-templates`; this module adds the
//! failures of the external collaborators (identity service, clipboard and
//! file export) and a top-level error that wraps them all.

use thiserror::Error;
use zanlu_templates::ComposeError;

/// Top-level error for studio operations
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),
}

impl StudioError {
    /// Message shown to the user in a notification
    ///
    /// Collaborator errors carry their own text verbatim.
    pub fn user_message(&self) -> String {
        match self {
            StudioError::Identity(e) => e.to_string(),
            StudioError::Export(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

/// Failures reported by the identity collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Email not confirmed")]
    EmailNotConfirmed,

    #[error("Password should be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("Unable to validate email address: invalid format")]
    InvalidEmail,

    #[error("{0}")]
    Service(String),
}

/// Failures reported by the clipboard or file-download collaborator
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Nothing to export")]
    Empty,

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StudioError>;
