use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors raised while locating or loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("cannot read config file '{path}': {details}")]
    IoError {
        /// File that failed to read
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The config directory could not be determined
    #[error("cannot locate config directory: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid TOML or does not match the schema
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Config file that failed to parse
        location: String,
        /// Parse error details
        details: String,
    },
}

impl ConfigError {
    /// Creates a parse error for the config file at `path`.
    pub fn toml_parse(error: impl fmt::Display, path: &Path) -> Self {
        let location = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf())
            .to_string_lossy()
            .into_owned();

        Self::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a read error for the config file at `path`.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        Self::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
