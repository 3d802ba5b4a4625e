//! Error taxonomy shared by the store, the command handlers and the REPL.

use thiserror::Error;

/// Everything a command can fail with.
///
/// `NotFound`, `Validation` and `UnknownCommand` are user-facing and are
/// printed as a single line by the dispatcher. `Storage` and `Io` wrap the
/// underlying failure; they are also reported without ending the session.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Contact with ID {0} not found.")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Unknown command: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True for errors caused by what the user typed rather than by the
    /// environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Validation(_) | Self::UnknownCommand(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
