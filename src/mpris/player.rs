//! All accessors return the remote or decode error unchanged; none of them
//! keeps state between calls.

use std::collections::HashMap;

use crate::{
    bus::{Connection, RemoteHandle},
    core::{MprisError, Result},
    value::{DynamicValue, decode},
};

use super::{
    LoopMode, MPRIS_PATH, MPRIS_PREFIX, Metadata, PLAYER_INTERFACE, PlaybackState,
    ROOT_INTERFACE,
};

/// Typed client for one MPRIS media player.
///
/// Composed of two handles on the same service and object path: one for the
/// `org.mpris.MediaPlayer2` root interface and one for
/// `org.mpris.MediaPlayer2.Player`.
#[derive(Debug, Clone)]
pub struct MediaPlayer {
    root: RemoteHandle,
    player: RemoteHandle,
}

impl MediaPlayer {
    /// Creates a client for the player registered as `name`.
    ///
    /// A name without a `.` is a short player name and is expanded onto the
    /// MPRIS prefix, so `vlc` addresses `org.mpris.MediaPlayer2.vlc`. No I/O
    /// happens here.
    pub fn new(connection: &Connection, name: &str) -> Self {
        let service = service_name(name);

        Self {
            root: connection.handle(service.clone(), MPRIS_PATH, ROOT_INTERFACE),
            player: connection.handle(service, MPRIS_PATH, PLAYER_INTERFACE),
        }
    }

    /// Bus name of the player service
    pub fn service(&self) -> &str {
        self.root.service()
    }

    /// Handle on the root interface
    pub fn root(&self) -> &RemoteHandle {
        &self.root
    }

    /// Handle on the player interface
    pub fn player(&self) -> &RemoteHandle {
        &self.player
    }

    // root

    /// Raise the media player window to the foreground
    pub fn raise(&self) -> Result<()> {
        self.root.call_void("Raise", &[])
    }

    /// Quit the media player application
    pub fn quit(&self) -> Result<()> {
        self.root.call_void("Quit", &[])
    }

    /// Whether the player window can be raised
    pub fn can_raise(&self) -> Result<bool> {
        self.root.get("CanRaise")
    }

    /// Whether the player can be quit
    pub fn can_quit(&self) -> Result<bool> {
        self.root.get("CanQuit")
    }

    /// Whether the player exposes a track list
    pub fn has_track_list(&self) -> Result<bool> {
        self.root.get("HasTrackList")
    }

    /// Whether the player is in fullscreen mode
    pub fn fullscreen(&self) -> Result<bool> {
        self.root.get("Fullscreen")
    }

    /// Set the player's fullscreen mode
    pub fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
        self.root
            .set_property("Fullscreen", DynamicValue::Bool(fullscreen))
    }

    /// Whether the player can change fullscreen mode
    pub fn can_set_fullscreen(&self) -> Result<bool> {
        self.root.get("CanSetFullscreen")
    }

    /// Human-readable name of the player
    pub fn identity(&self) -> Result<String> {
        self.root.get("Identity")
    }

    /// Desktop entry name for the player
    pub fn desktop_entry(&self) -> Result<String> {
        self.root.get("DesktopEntry")
    }

    /// URI schemes supported by the player
    pub fn supported_uri_schemes(&self) -> Result<Vec<String>> {
        self.root.get("SupportedUriSchemes")
    }

    /// MIME types supported by the player
    pub fn supported_mime_types(&self) -> Result<Vec<String>> {
        self.root.get("SupportedMimeTypes")
    }

    // player

    /// Skip to next track
    pub fn next(&self) -> Result<()> {
        self.player.call_void("Next", &[])
    }

    /// Skip to previous track
    pub fn previous(&self) -> Result<()> {
        self.player.call_void("Previous", &[])
    }

    /// Pause playback
    pub fn pause(&self) -> Result<()> {
        self.player.call_void("Pause", &[])
    }

    /// Toggle play/pause state
    pub fn play_pause(&self) -> Result<()> {
        self.player.call_void("PlayPause", &[])
    }

    /// Stop playback
    pub fn stop(&self) -> Result<()> {
        self.player.call_void("Stop", &[])
    }

    /// Start playback
    pub fn play(&self) -> Result<()> {
        self.player.call_void("Play", &[])
    }

    /// Seek by a relative offset in microseconds
    pub fn seek(&self, offset: i64) -> Result<()> {
        self.player.call_void("Seek", &[DynamicValue::Int64(offset)])
    }

    /// Set absolute playback position in microseconds
    ///
    /// `track_id` must be the object path from the current metadata; players
    /// ignore the request for any other track.
    pub fn set_position(&self, track_id: &str, position: i64) -> Result<()> {
        self.player.call_void(
            "SetPosition",
            &[
                DynamicValue::ObjectPath(track_id.to_string()),
                DynamicValue::Int64(position),
            ],
        )
    }

    /// Open and play a URI
    pub fn open_uri(&self, uri: &str) -> Result<()> {
        self.player.call_void("OpenUri", &[DynamicValue::from(uri)])
    }

    /// Current playback status (Playing, Paused, Stopped)
    pub fn playback_status(&self) -> Result<String> {
        self.player.get("PlaybackStatus")
    }

    /// Current playback status as a [`PlaybackState`]
    pub fn playback_state(&self) -> Result<PlaybackState> {
        self.playback_status()
            .map(|status| PlaybackState::from(status.as_str()))
    }

    /// Current loop status (None, Track, Playlist)
    pub fn loop_status(&self) -> Result<String> {
        self.player.get("LoopStatus")
    }

    /// Current loop status as a [`LoopMode`]
    pub fn loop_mode(&self) -> Result<LoopMode> {
        self.loop_status().map(|status| LoopMode::from(status.as_str()))
    }

    /// Set the loop status
    ///
    /// # Errors
    /// Returns [`MprisError::UnsupportedValue`] for [`LoopMode::Unsupported`]
    /// without contacting the player.
    pub fn set_loop_status(&self, mode: LoopMode) -> Result<()> {
        let status = mode.as_mpris().ok_or_else(|| {
            MprisError::UnsupportedValue(format!("loop mode '{mode}' cannot be set"))
        })?;
        self.player
            .set_property("LoopStatus", DynamicValue::from(status))
    }

    /// Current track metadata
    pub fn metadata(&self) -> Result<Metadata> {
        decode::<HashMap<String, DynamicValue>>(self.player.get_property("Metadata")?)
            .map(Metadata::from)
    }

    /// Current playback position in microseconds
    pub fn position(&self) -> Result<i64> {
        self.player.get("Position")
    }

    /// Current volume level (0.0 to 1.0)
    pub fn volume(&self) -> Result<f64> {
        self.player.get("Volume")
    }

    /// Set volume level
    pub fn set_volume(&self, volume: f64) -> Result<()> {
        self.player.set_property("Volume", DynamicValue::Double(volume))
    }

    /// Current playback rate (1.0 is normal speed)
    pub fn rate(&self) -> Result<f64> {
        self.player.get("Rate")
    }

    /// Set the playback rate
    pub fn set_rate(&self, rate: f64) -> Result<()> {
        self.player.set_property("Rate", DynamicValue::Double(rate))
    }

    /// Minimum supported playback rate
    pub fn minimum_rate(&self) -> Result<f64> {
        self.player.get("MinimumRate")
    }

    /// Maximum supported playback rate
    pub fn maximum_rate(&self) -> Result<f64> {
        self.player.get("MaximumRate")
    }

    /// Whether shuffle mode is enabled
    pub fn shuffle(&self) -> Result<bool> {
        self.player.get("Shuffle")
    }

    /// Set shuffle mode
    pub fn set_shuffle(&self, shuffle: bool) -> Result<()> {
        self.player.set_property("Shuffle", DynamicValue::Bool(shuffle))
    }

    /// Whether the player can skip to next track
    pub fn can_go_next(&self) -> Result<bool> {
        self.player.get("CanGoNext")
    }

    /// Whether the player can skip to previous track
    pub fn can_go_previous(&self) -> Result<bool> {
        self.player.get("CanGoPrevious")
    }

    /// Whether the player can start playback
    pub fn can_play(&self) -> Result<bool> {
        self.player.get("CanPlay")
    }

    /// Whether the player can pause playback
    pub fn can_pause(&self) -> Result<bool> {
        self.player.get("CanPause")
    }

    /// Whether the player supports seeking
    pub fn can_seek(&self) -> Result<bool> {
        self.player.get("CanSeek")
    }

    /// Whether the player can be controlled
    pub fn can_control(&self) -> Result<bool> {
        self.player.get("CanControl")
    }
}

impl Connection {
    /// Creates a [`MediaPlayer`] for `name` on this connection.
    ///
    /// See [`MediaPlayer::new`] for how short names are expanded.
    pub fn media_player(&self, name: &str) -> MediaPlayer {
        MediaPlayer::new(self, name)
    }
}

fn service_name(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{MPRIS_PREFIX}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::bus::testing::{Reply, ScriptedBus};

    const VLC: &str = "org.mpris.MediaPlayer2.vlc";

    fn player_with(bus: ScriptedBus) -> MediaPlayer {
        Connection::with_bus(bus).media_player("vlc")
    }

    #[test]
    fn short_names_expand_onto_mpris_prefix() {
        let connection = Connection::with_bus(ScriptedBus::new());

        let short = connection.media_player("vlc");
        let full = connection.media_player(VLC);

        assert_eq!(short.service(), VLC);
        assert_eq!(full.service(), VLC);
        assert_eq!(short.player().interface(), full.player().interface());
    }

    #[test]
    fn dotted_names_are_used_verbatim() {
        let connection = Connection::with_bus(ScriptedBus::new());

        let player = connection.media_player("com.example.Player");

        assert_eq!(player.service(), "com.example.Player");
    }

    #[test]
    fn handles_share_path_and_differ_by_interface() {
        let player = player_with(ScriptedBus::new());

        assert_eq!(player.root().path(), MPRIS_PATH);
        assert_eq!(player.player().path(), MPRIS_PATH);
        assert_eq!(player.root().interface(), ROOT_INTERFACE);
        assert_eq!(player.player().interface(), PLAYER_INTERFACE);
    }

    #[test]
    fn void_actions_make_exactly_one_player_call() {
        let actions: [(&str, fn(&MediaPlayer) -> Result<()>); 6] = [
            ("Play", MediaPlayer::play),
            ("Pause", MediaPlayer::pause),
            ("PlayPause", MediaPlayer::play_pause),
            ("Stop", MediaPlayer::stop),
            ("Next", MediaPlayer::next),
            ("Previous", MediaPlayer::previous),
        ];

        for (method, action) in actions {
            let bus = ScriptedBus::new();
            let calls = bus.calls();
            let player = player_with(bus);

            action(&player).unwrap();

            let calls = calls.lock().unwrap();
            assert_eq!(calls.len(), 1, "{method}");
            assert_eq!(calls[0].interface, PLAYER_INTERFACE);
            assert_eq!(calls[0].method, method);
            assert!(calls[0].args.is_empty());
        }
    }

    #[test]
    fn root_actions_use_root_interface() {
        let bus = ScriptedBus::new();
        let calls = bus.calls();
        let player = player_with(bus);

        player.raise().unwrap();
        player.quit().unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].interface, ROOT_INTERFACE);
        assert_eq!(calls[0].method, "Raise");
        assert_eq!(calls[1].method, "Quit");
    }

    #[test]
    fn void_action_returns_remote_error_unchanged() {
        let bus = ScriptedBus::new().with_reply(
            PLAYER_INTERFACE,
            "Next",
            Reply::RemoteError {
                name: "org.freedesktop.DBus.Error.NotSupported".to_string(),
                message: "End of playlist".to_string(),
            },
        );
        let player = player_with(bus);

        let error = player.next().unwrap_err();

        assert_eq!(error.to_string(), "End of playlist");
    }

    #[test]
    fn actions_with_arguments_send_typed_values() {
        let bus = ScriptedBus::new();
        let calls = bus.calls();
        let player = player_with(bus);

        player.seek(-5_000_000).unwrap();
        player.open_uri("file:///tmp/song.ogg").unwrap();
        player
            .set_position("/org/mpris/MediaPlayer2/Track/1", 42)
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].args, vec![DynamicValue::Int64(-5_000_000)]);
        assert_eq!(
            calls[1].args,
            vec![DynamicValue::from("file:///tmp/song.ogg")]
        );
        assert_eq!(
            calls[2].args,
            vec![
                DynamicValue::ObjectPath("/org/mpris/MediaPlayer2/Track/1".to_string()),
                DynamicValue::Int64(42),
            ]
        );
    }

    #[test]
    fn flag_accessor_decodes_boolean() {
        let bus =
            ScriptedBus::new().with_property(PLAYER_INTERFACE, "CanPlay", DynamicValue::Bool(true));
        let player = player_with(bus);

        assert!(player.can_play().unwrap());
    }

    #[test]
    fn flag_accessor_rejects_string() {
        let bus = ScriptedBus::new().with_property(
            PLAYER_INTERFACE,
            "CanPlay",
            DynamicValue::from("true"),
        );
        let player = player_with(bus);

        assert!(matches!(
            player.can_play(),
            Err(MprisError::KindMismatch { .. })
        ));
    }

    #[test]
    fn text_and_list_accessors() {
        let bus = ScriptedBus::new()
            .with_property(ROOT_INTERFACE, "Identity", DynamicValue::from("VLC media player"))
            .with_property(
                ROOT_INTERFACE,
                "SupportedUriSchemes",
                DynamicValue::StrList(vec!["file".to_string(), "http".to_string()]),
            )
            .with_property(PLAYER_INTERFACE, "PlaybackStatus", DynamicValue::from("Paused"))
            .with_property(PLAYER_INTERFACE, "Position", DynamicValue::Int64(12_000_000));
        let player = player_with(bus);

        assert_eq!(player.identity().unwrap(), "VLC media player");
        assert_eq!(
            player.supported_uri_schemes().unwrap(),
            vec!["file".to_string(), "http".to_string()]
        );
        assert_eq!(player.playback_status().unwrap(), "Paused");
        assert_eq!(player.playback_state().unwrap(), PlaybackState::Paused);
        assert_eq!(player.position().unwrap(), 12_000_000);
    }

    #[test]
    fn metadata_accessor_unwraps_entries() {
        let bus = ScriptedBus::new().with_property(
            PLAYER_INTERFACE,
            "Metadata",
            DynamicValue::variant_map([
                ("xesam:title", DynamicValue::from("Roygbiv")),
                ("mpris:length", DynamicValue::Int64(131_000_000)),
            ]),
        );
        let player = player_with(bus);

        let metadata = player.metadata().unwrap();

        assert_eq!(metadata.title(), "Roygbiv");
        assert_eq!(metadata.length(), 131_000_000);
        assert_eq!(metadata.disc_number(), 0);
    }

    #[test]
    fn metadata_with_wrong_signature_is_a_mismatch() {
        let bus = ScriptedBus::new().with_property(
            PLAYER_INTERFACE,
            "Metadata",
            DynamicValue::Map {
                value_signature: "s".to_string(),
                entries: HashMap::from([(
                    "xesam:title".to_string(),
                    DynamicValue::from("Roygbiv"),
                )]),
            },
        );
        let player = player_with(bus);

        assert!(matches!(
            player.metadata(),
            Err(MprisError::KindMismatch { .. })
        ));
    }

    #[test]
    fn property_writes_round_trip() {
        let bus = ScriptedBus::new()
            .with_property(PLAYER_INTERFACE, "Volume", DynamicValue::Double(1.0))
            .with_property(PLAYER_INTERFACE, "Shuffle", DynamicValue::Bool(false))
            .with_property(PLAYER_INTERFACE, "LoopStatus", DynamicValue::from("None"));
        let player = player_with(bus);

        player.set_volume(0.5).unwrap();
        player.set_shuffle(true).unwrap();
        player.set_loop_status(LoopMode::Playlist).unwrap();

        assert_eq!(player.volume().unwrap(), 0.5);
        assert!(player.shuffle().unwrap());
        assert_eq!(player.loop_mode().unwrap(), LoopMode::Playlist);
    }

    #[test]
    fn unsupported_loop_mode_is_not_sent() {
        let bus = ScriptedBus::new();
        let calls = bus.calls();
        let player = player_with(bus);

        assert!(player.set_loop_status(LoopMode::Unsupported).is_err());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_property_is_property_not_found() {
        let player = player_with(ScriptedBus::new());

        assert!(matches!(
            player.can_set_fullscreen(),
            Err(MprisError::PropertyNotFound { ref interface, .. }) if interface == ROOT_INTERFACE
        ));
    }
}
