//! Unit tests for config module
//!
//! Tests configuration defaults, parsing and file loading.

#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::{
    bus::BusKind,
    config::{ClientConfig, ConfigError, LogLevel},
};

#[test]
fn config_default() {
    let config = ClientConfig::default();

    assert_eq!(config.bus, BusKind::Session);
    assert_eq!(config.player, None);
    assert!(config.ignored_players.is_empty());
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
fn config_empty_toml() {
    let config: ClientConfig = toml::from_str("").unwrap();

    assert_eq!(config, ClientConfig::default());
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        bus = "system"
        player = "spotify"
        ignored_players = ["chromium", "firefox"]
        log_level = "debug"
    "#;

    let config: ClientConfig = toml::from_str(toml_str).unwrap();

    assert_eq!(config.bus, BusKind::System);
    assert_eq!(config.player.as_deref(), Some("spotify"));
    assert_eq!(config.ignored_players, vec!["chromium", "firefox"]);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn config_serialize_roundtrip() {
    let original = ClientConfig {
        bus: BusKind::System,
        player: Some("vlc".to_string()),
        ignored_players: vec!["kdeconnect".to_string()],
        log_level: LogLevel::Trace,
    };

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: ClientConfig = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_rejects_unknown_bus() {
    assert!(toml::from_str::<ClientConfig>(r#"bus = "starter""#).is_err());
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = ClientConfig::load_from(&temp_dir.path().join("config.toml")).unwrap();

    assert_eq!(config, ClientConfig::default());
}

#[test]
fn load_from_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "player = \"mpv\"\n").unwrap();

    let config = ClientConfig::load_from(&path).unwrap();

    assert_eq!(config.player.as_deref(), Some("mpv"));
}

#[test]
fn load_from_reports_parse_location() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "player = [").unwrap();

    match ClientConfig::load_from(&path) {
        Err(ConfigError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn discovery_uses_ignore_list() {
    let config = ClientConfig {
        ignored_players: vec!["chromium".to_string()],
        ..Default::default()
    };

    let discovery = config.discovery();

    assert!(discovery.should_ignore_player("org.mpris.MediaPlayer2.chromium.instance123"));
    assert!(!discovery.should_ignore_player("org.mpris.MediaPlayer2.vlc"));
}
