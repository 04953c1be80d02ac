use thiserror::Error;

use crate::{config::ConfigError, core::MprisError};

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// Talking to the player failed.
    #[error("Media player error: {0}")]
    PlayerError(#[from] MprisError),
}

/// Type alias for command execution results.
///
/// On success, holds the text to print; it may be empty.
pub type CommandResult = Result<String, CliError>;
