//! Typed MPRIS media player client.
//!
//! <http://specifications.freedesktop.org/mpris-spec/latest/>

/// Player discovery on the bus
pub mod discovery;
/// Track metadata
pub mod metadata;
/// Typed facade over the MPRIS interfaces
pub mod player;
/// Playback enums
pub mod types;
/// MPRIS utility functions
pub mod utils;

pub use discovery::{Discovery, first_candidate, list_candidates};
pub use metadata::Metadata;
pub use player::MediaPlayer;
pub use types::{LoopMode, PlaybackState};

/// Object path every MPRIS player exports.
pub const MPRIS_PATH: &str = "/org/mpris/MediaPlayer2";
/// Prefix of every MPRIS service name.
pub const MPRIS_PREFIX: &str = "org.mpris.MediaPlayer2";
/// Root interface: identity and window-level controls.
pub const ROOT_INTERFACE: &str = MPRIS_PREFIX;
/// Playback control interface.
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";
