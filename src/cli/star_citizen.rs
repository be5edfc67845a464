//! Star Citizen command: import bindings from `actionmaps.xml`.

use crate::adaptors::{ProfileSource, StarCitizenParser};
use crate::cli::common::{CliError, CliResult, ProfilesResponse};
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Import Star Citizen bindings from an exported action maps file
#[derive(Debug, Clone, Args)]
pub struct StarCitizenArgs {
    /// Path to actionmaps.xml (defaults to `star_citizen.action_maps` from config)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StarCitizenArgs {
    /// Execute the star-citizen command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let file = self
            .file
            .as_ref()
            .or(config.star_citizen.action_maps.as_ref())
            .ok_or_else(|| {
                CliError::validation(
                    "No action maps file given: pass --file or set star_citizen.action_maps in config",
                )
            })?;

        info!("Reading Star Citizen bindings from {}", file.display());
        let parser =
            StarCitizenParser::from_path(file).map_err(|e| CliError::io(format!("{e:#}")))?;

        let mut diagnostics = Diagnostics::new();
        let collection = parser
            .parse(&mut diagnostics)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        info!("{}: imported {} profile(s)", parser.name(), collection.len());

        ProfilesResponse::new(collection, diagnostics).print(self.json)
    }
}
