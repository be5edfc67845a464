//! Joymap - Flight and space-sim control binding importer
//!
//! Reads DCS World and Star Citizen binding files and prints them as a
//! normalized profile/device/input tree.

use clap::{Parser, Subcommand};
use joymap::cli::{CliError, CliResult, DcsArgs, DcsProfilesArgs, StarCitizenArgs};
use joymap::config::Config;
use joymap::constants::{APP_BINARY_NAME, APP_NAME};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Joymap - Flight and space-sim control binding importer
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Import DCS World joystick bindings
    Dcs(DcsArgs),
    /// List DCS World profiles that have joystick bindings
    DcsProfiles(DcsProfilesArgs),
    /// Import Star Citizen bindings from actionmaps.xml
    StarCitizen(StarCitizenArgs),
}

fn load_config(path: Option<&PathBuf>) -> CliResult<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load config: {e:#}"))),
        None => Ok(Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e:#}");
            Config::default()
        })),
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    debug!("{APP_NAME} v{}", env!("CARGO_PKG_VERSION"));
    let config = load_config(cli.config.as_ref())?;
    debug!("Configuration: {config:?}");

    match &cli.command {
        Commands::Dcs(args) => args.execute(&config),
        Commands::DcsProfiles(args) => args.execute(&config),
        Commands::StarCitizen(args) => args.execute(&config),
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.code.as_i32());
    }
}
