//! mpris2ctl - control MPRIS media players from the command line

use std::process;

use clap::Parser;
use mpris2_client::{
    bus::{BusKind, Connection},
    cli::{self, Cli, CliError, formatting::format_error},
    config::ClientConfig,
    tracing_config,
};
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let config = ClientConfig::load()?;

    if let Err(e) = tracing_config::init(config.log_level) {
        eprintln!("{}", format_error(&format!("cannot initialize logging: {e}")));
    }

    let bus = if cli.system { BusKind::System } else { config.bus };
    debug!(%bus, "Connecting");
    let connection = Connection::connect(bus)?;

    cli::execute(&cli.command, &connection, cli.player.as_deref(), &config)
}
