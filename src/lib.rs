//! mpris2-client - Typed blocking client for MPRIS media players.
//!
//! Talks to players over D-Bus: discovers running MPRIS services, reads
//! their properties into strictly checked Rust types and invokes their
//! methods. Every call blocks until the player answers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mpris2_client::{BusKind, Connection, mpris};
//!
//! let connection = Connection::connect(BusKind::Session)?;
//! let player = mpris::first_candidate(&connection)?;
//!
//! if player.can_play()? {
//!     player.play()?;
//! }
//! println!("Now playing: {}", player.metadata()?.title());
//! # Ok::<(), mpris2_client::MprisError>(())
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]

/// Core error types and result aliases.
pub mod core;

/// Dynamic bus values and the decoder that checks them.
pub mod value;

/// Bus connection, remote handles and the transport seam.
pub mod bus;

/// MPRIS discovery, player facade and track metadata.
pub mod mpris;

/// Client configuration.
pub mod config;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Command-line interface for `mpris2ctl`.
pub mod cli;

/// Re-exported core types for convenience.
pub use core::{MprisError, Result};

pub use bus::{Bus, BusKind, Connection, RemoteHandle};
pub use mpris::{LoopMode, MediaPlayer, Metadata, PlaybackState};
pub use value::{DynamicValue, FromDynamic, Kind, decode, decode_kind};
