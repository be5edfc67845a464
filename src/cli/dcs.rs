//! DCS World commands: import bindings and list profiles.

use crate::adaptors::{DcsWorldParser, ProfileSource};
use crate::cli::common::{CliError, CliResult, ProfilesResponse};
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Import DCS World joystick bindings
#[derive(Debug, Clone, Args)]
pub struct DcsArgs {
    /// DCS saved games directory (defaults to `dcs.saved_games` from config)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Only import these profiles (repeatable)
    #[arg(long = "profile", value_name = "NAME")]
    pub profiles: Vec<String>,

    /// Keep the simplified "_easy" profiles
    #[arg(long)]
    pub include_easy_modes: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// List DCS World profiles that have joystick bindings
#[derive(Debug, Clone, Args)]
pub struct DcsProfilesArgs {
    /// DCS saved games directory (defaults to `dcs.saved_games` from config)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Keep the simplified "_easy" profiles
    #[arg(long)]
    pub include_easy_modes: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for profile listing
#[derive(Debug, Serialize)]
struct ProfileListResponse {
    profiles: Vec<String>,
}

fn open_parser(
    path: Option<&PathBuf>,
    include_easy_modes: bool,
    config: &Config,
) -> CliResult<DcsWorldParser> {
    let path = path
        .or(config.dcs.saved_games.as_ref())
        .ok_or_else(|| {
            CliError::validation(
                "No DCS directory given: pass --path or set dcs.saved_games in config",
            )
        })?;

    let remove_easy_modes = config.dcs.remove_easy_modes && !include_easy_modes;
    info!("Reading DCS profiles from {}", path.display());

    DcsWorldParser::new(path, remove_easy_modes).map_err(|e| CliError::io(format!("{e:#}")))
}

impl DcsArgs {
    /// Execute the dcs command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let parser = open_parser(self.path.as_ref(), self.include_easy_modes, config)?;

        if !self.profiles.is_empty() {
            let available = parser.validated_profiles();
            if let Some(unknown) = self.profiles.iter().find(|p| !available.contains(p)) {
                return Err(CliError::validation(format!(
                    "Unknown profile '{unknown}'. Available: {}",
                    available.join(", ")
                )));
            }
        }

        let mut diagnostics = Diagnostics::new();
        let collection = parser
            .process_profiles(Some(self.profiles.as_slice()), &mut diagnostics)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        info!("{}: imported {} profile(s)", parser.name(), collection.len());

        ProfilesResponse::new(collection, diagnostics).print(self.json)
    }
}

impl DcsProfilesArgs {
    /// Execute the dcs-profiles command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let parser = open_parser(self.path.as_ref(), self.include_easy_modes, config)?;
        let response = ProfileListResponse {
            profiles: parser.validated_profiles(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.profiles.is_empty() {
            println!("No profiles with joystick bindings found");
        } else {
            for profile in &response.profiles {
                println!("{profile}");
            }
        }

        Ok(())
    }
}
