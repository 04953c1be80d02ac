use tracing::debug;

use crate::{
    bus::Connection,
    config::ClientConfig,
    core::MprisError,
    mpris::{LoopMode, MediaPlayer, utils},
};

use super::{
    CliError, CommandResult, Commands, Toggle,
    formatting::{format_dim, format_duration, format_header, format_value},
};

/// Picks the player a command applies to.
///
/// An explicitly requested player wins, then the configured default, then the
/// first player discovery finds.
///
/// # Errors
/// Returns [`MprisError::NoCandidatesFound`] (wrapped) when discovery is needed
/// and no player is running.
pub fn resolve_player(
    connection: &Connection,
    requested: Option<&str>,
    config: &ClientConfig,
) -> Result<MediaPlayer, CliError> {
    match requested.or(config.player.as_deref()) {
        Some(name) => Ok(connection.media_player(name)),
        None => Ok(config.discovery().first_candidate(connection)?),
    }
}

/// Runs `command` and returns the text to print.
///
/// # Errors
/// Returns [`CliError`] if the player cannot be resolved or the remote call
/// fails.
pub fn execute(
    command: &Commands,
    connection: &Connection,
    requested: Option<&str>,
    config: &ClientConfig,
) -> CommandResult {
    let player = || resolve_player(connection, requested, config);
    debug!(?command, "Executing command");

    match command {
        Commands::List => list(connection, config),
        Commands::Status => status(&player()?),
        Commands::Metadata => metadata(&player()?),
        Commands::Play => done(player()?.play()),
        Commands::Pause => done(player()?.pause()),
        Commands::PlayPause => done(player()?.play_pause()),
        Commands::Stop => done(player()?.stop()),
        Commands::Next => done(player()?.next()),
        Commands::Previous => done(player()?.previous()),
        Commands::Raise => done(player()?.raise()),
        Commands::Quit => done(player()?.quit()),
        Commands::Seek { offset } => done(player()?.seek(*offset)),
        Commands::Open { uri } => done(player()?.open_uri(uri)),
        Commands::Position => {
            let position = player()?.position()?;
            Ok(format!(
                "{} {}",
                format_duration(utils::from_mpris_micros(position)),
                format_dim(&format!("({position} µs)"))
            ))
        }
        Commands::Volume { value: None } => Ok(format!("{:.2}", player()?.volume()?)),
        Commands::Volume { value: Some(volume) } => {
            if !(0.0..=1.0).contains(volume) {
                return Err(CliError::InvalidArguments(format!(
                    "volume must be between 0.0 and 1.0, got {volume}"
                )));
            }
            done(player()?.set_volume(*volume))
        }
        Commands::Shuffle { state: None } => {
            let shuffle = player()?.shuffle()?;
            Ok(if shuffle { "on" } else { "off" }.to_string())
        }
        Commands::Shuffle { state: Some(state) } => {
            done(player()?.set_shuffle(*state == Toggle::On))
        }
        Commands::Loop { mode: None } => Ok(player()?.loop_mode()?.to_string()),
        Commands::Loop { mode: Some(mode) } => {
            done(player()?.set_loop_status(LoopMode::from(*mode)))
        }
    }
}

fn done(result: Result<(), MprisError>) -> CommandResult {
    result?;
    Ok(String::new())
}

fn list(connection: &Connection, config: &ClientConfig) -> CommandResult {
    let names = config.discovery().list_candidates(connection)?;

    if names.is_empty() {
        return Ok("No media players found".to_string());
    }

    let mut output = format!("Found {} media player(s):\n\n", names.len());
    for (index, name) in names.iter().enumerate() {
        let player = connection.media_player(name);
        let state = player
            .playback_status()
            .unwrap_or_else(|_| "Unknown".to_string());
        output.push_str(&format!("{:2}. {name:<45} {state:>8}\n", index + 1));
    }

    Ok(output.trim_end().to_string())
}

fn status(player: &MediaPlayer) -> CommandResult {
    let identity = player
        .identity()
        .unwrap_or_else(|_| player.service().to_string());
    let state = player.playback_state()?;
    let metadata = player.metadata()?;

    let mut output = format!(
        "{} {}\n",
        format_header(&identity),
        format_dim(player.service())
    );
    output.push_str(&format!("Status:   {state}\n"));

    let title = metadata.title();
    if !title.is_empty() {
        output.push_str(&format!("Title:    {title}\n"));
    }
    let artists = metadata.artists();
    if !artists.is_empty() {
        output.push_str(&format!("Artist:   {}\n", artists.join(", ")));
    }
    let album = metadata.album();
    if !album.is_empty() {
        output.push_str(&format!("Album:    {album}\n"));
    }

    if let Ok(position) = player.position() {
        let position = format_duration(utils::from_mpris_micros(position));
        match metadata.length_duration() {
            Some(length) => {
                output.push_str(&format!("Position: {position} / {}\n", format_duration(length)));
            }
            None => output.push_str(&format!("Position: {position}\n")),
        }
    }

    Ok(output.trim_end().to_string())
}

fn metadata(player: &MediaPlayer) -> CommandResult {
    let metadata = player.metadata()?;

    if metadata.is_empty() {
        return Ok("No metadata".to_string());
    }

    let mut keys: Vec<&str> = metadata.keys().collect();
    keys.sort_unstable();

    let lines: Vec<String> = keys
        .into_iter()
        .filter_map(|key| {
            metadata
                .get(key)
                .map(|value| format!("{key:<24} {}", format_value(value)))
        })
        .collect();

    Ok(lines.join("\n"))
}
