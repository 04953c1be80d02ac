//! Client configuration.
//!
//! Read from `config.toml` in the XDG config directory. Every field has a
//! default, so a missing file or an empty one is a valid configuration.

mod error;
mod log_level;
mod paths;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use log_level::LogLevel;
pub use paths::ConfigPaths;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{bus::BusKind, mpris::Discovery};

/// Configuration for the MPRIS client and `mpris2ctl`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Bus to look for players on.
    pub bus: BusKind,

    /// Player to control when none is given on the command line.
    ///
    /// Either a full bus name or a short name such as `vlc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,

    /// List of player bus name patterns to ignore during discovery
    pub ignored_players: Vec<String>,

    /// Logging level used when `RUST_LOG` is not set.
    pub log_level: LogLevel,
}

impl ClientConfig {
    /// Loads the configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(e, path))?;
        toml::from_str(&content).map_err(|e| ConfigError::toml_parse(e, path))
    }

    /// Discovery honouring the configured ignore list
    pub fn discovery(&self) -> Discovery {
        Discovery::with_ignored_players(self.ignored_players.clone())
    }
}
