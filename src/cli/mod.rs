//! Command-line interface for `mpris2ctl`.
//!
//! Argument parsing lives here; each command is a thin call into the
//! library followed by formatting.

mod commands;
pub mod formatting;
mod types;

pub use commands::{execute, resolve_player};
pub use types::{CliError, CommandResult};

use clap::{Parser, Subcommand, ValueEnum};

use crate::mpris::LoopMode;

/// Control MPRIS media players from the command line
#[derive(Debug, Parser)]
#[command(name = "mpris2ctl")]
#[command(about = "Control MPRIS media players over D-Bus")]
pub struct Cli {
    /// Player to control: full bus name or short name such as `vlc`
    #[arg(short, long, global = true)]
    pub player: Option<String>,

    /// Use the system bus instead of the session bus
    #[arg(long, global = true)]
    pub system: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Commands {
    /// List all available media players
    List,
    /// Show playback state and current track
    Status,
    /// Print every metadata entry of the current track
    Metadata,
    /// Start playback
    Play,
    /// Pause playback
    Pause,
    /// Toggle play/pause state
    PlayPause,
    /// Stop playback
    Stop,
    /// Skip to next track
    Next,
    /// Go to previous track
    Previous,
    /// Raise the player window
    Raise,
    /// Quit the player
    Quit,
    /// Seek by a relative offset in microseconds
    Seek {
        /// Offset in microseconds, negative to seek backwards
        #[arg(allow_hyphen_values = true)]
        offset: i64,
    },
    /// Open and play a URI
    Open {
        /// URI to open
        uri: String,
    },
    /// Show the playback position
    Position,
    /// Show or set the volume
    Volume {
        /// New volume, 0.0 to 1.0
        value: Option<f64>,
    },
    /// Show or set shuffle mode
    Shuffle {
        /// New shuffle state
        state: Option<Toggle>,
    },
    /// Show or set loop mode
    Loop {
        /// New loop mode
        mode: Option<LoopArg>,
    },
}

/// On/off switch argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    /// Enabled
    On,
    /// Disabled
    Off,
}

/// Loop mode argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoopArg {
    /// No looping
    None,
    /// Loop current track
    Track,
    /// Loop entire playlist
    Playlist,
}

impl From<LoopArg> for LoopMode {
    fn from(arg: LoopArg) -> Self {
        match arg {
            LoopArg::None => LoopMode::None,
            LoopArg::Track => LoopMode::Track,
            LoopArg::Playlist => LoopMode::Playlist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_player_after_subcommand() {
        let cli = Cli::try_parse_from(["mpris2ctl", "play", "--player", "vlc"]).unwrap();

        assert_eq!(cli.player.as_deref(), Some("vlc"));
        assert_eq!(cli.command, Commands::Play);
        assert!(!cli.system);
    }

    #[test]
    fn parses_negative_seek_offset() {
        let cli = Cli::try_parse_from(["mpris2ctl", "seek", "-5000000"]).unwrap();

        assert_eq!(cli.command, Commands::Seek { offset: -5_000_000 });
    }

    #[test]
    fn parses_loop_mode() {
        let cli = Cli::try_parse_from(["mpris2ctl", "loop", "playlist"]).unwrap();

        assert_eq!(
            cli.command,
            Commands::Loop {
                mode: Some(LoopArg::Playlist)
            }
        );
    }

    #[test]
    fn rejects_unknown_shuffle_state() {
        assert!(Cli::try_parse_from(["mpris2ctl", "shuffle", "maybe"]).is_err());
    }
}
