//! CLI command handlers for Joymap.
//!
//! This module provides headless, scriptable access to the binding importers
//! for automation and testing.

pub mod common;
pub mod dcs;
pub mod star_citizen;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, ProfilesResponse};
pub use dcs::{DcsArgs, DcsProfilesArgs};
pub use star_citizen::StarCitizenArgs;
