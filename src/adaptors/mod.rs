//! Game-specific binding importers.
//!
//! Each adaptor reads one game's binding files and fills a
//! [`ProfileCollection`] using the shared parsers and services.

pub mod dcs_world;
pub mod star_citizen;

use crate::diagnostics::Diagnostics;
use crate::models::ProfileCollection;
use anyhow::Result;

pub use dcs_world::DcsWorldParser;
pub use star_citizen::StarCitizenParser;

/// A source of normalized binding profiles.
pub trait ProfileSource {
    /// Display name of the game.
    fn name(&self) -> &'static str;

    /// Reads every available profile.
    ///
    /// Recoverable problems go to `diagnostics`; only structural failures
    /// are returned as errors.
    fn process(&self, diagnostics: &mut Diagnostics) -> Result<ProfileCollection>;
}
