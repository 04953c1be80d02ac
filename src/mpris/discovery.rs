use tracing::{debug, info, instrument, warn};

use crate::{
    bus::Connection,
    core::{MprisError, Result},
};

use super::{MPRIS_PREFIX, MediaPlayer};

/// Lists the MPRIS services currently on the bus.
///
/// Keeps the bus order; an empty result is not an error.
///
/// # Errors
/// Returns the error from [`Connection::list_names`].
pub fn list_candidates(connection: &Connection) -> Result<Vec<String>> {
    Discovery::new().list_candidates(connection)
}

/// Returns a client for the first MPRIS service the bus reports.
///
/// With several players running, which one comes first is up to the bus.
///
/// # Errors
/// Returns [`MprisError::NoCandidatesFound`] when no player is running, or the
/// error from [`Connection::list_names`].
pub fn first_candidate(connection: &Connection) -> Result<MediaPlayer> {
    Discovery::new().first_candidate(connection)
}

/// Player discovery with an optional ignore list.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    ignored_players: Vec<String>,
}

impl Discovery {
    /// Discovery that accepts every MPRIS service
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery that skips services whose bus name contains any of `patterns`
    pub fn with_ignored_players(patterns: Vec<String>) -> Self {
        Self {
            ignored_players: patterns,
        }
    }

    /// Check if a player should be ignored based on its bus name
    pub fn should_ignore_player(&self, bus_name: &str) -> bool {
        self.ignored_players
            .iter()
            .any(|pattern| bus_name.contains(pattern.as_str()))
    }

    /// Lists MPRIS services on the bus, minus ignored ones.
    ///
    /// # Errors
    /// Returns the error from [`Connection::list_names`].
    #[instrument(skip(self, connection))]
    pub fn list_candidates(&self, connection: &Connection) -> Result<Vec<String>> {
        let names = connection.list_names()?;

        let candidates: Vec<String> = names
            .into_iter()
            .filter(|name| name.starts_with(MPRIS_PREFIX))
            .filter(|name| {
                let ignored = self.should_ignore_player(name);
                if ignored {
                    debug!(bus_name = %name, "Ignoring player based on configuration");
                }
                !ignored
            })
            .collect();

        debug!(count = candidates.len(), "Discovered MPRIS players");
        Ok(candidates)
    }

    /// Returns a client for the first non-ignored MPRIS service.
    ///
    /// # Errors
    /// Returns [`MprisError::NoCandidatesFound`] when nothing is left after
    /// filtering, or the error from [`Connection::list_names`].
    #[instrument(skip(self, connection))]
    pub fn first_candidate(&self, connection: &Connection) -> Result<MediaPlayer> {
        let candidates = self.list_candidates(connection)?;

        let Some(name) = candidates.first() else {
            warn!("No MPRIS players found on the bus");
            return Err(MprisError::NoCandidatesFound);
        };

        info!(bus_name = %name, "Selected media player");
        Ok(MediaPlayer::new(connection, name))
    }
}
