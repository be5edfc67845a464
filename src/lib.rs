//! Joymap Library
//!
//! This library normalizes flight and space-sim control bindings into a
//! uniform model of profiles, devices and inputs. It reads DCS World
//! `*.diff.lua` tables and Star Citizen `actionmaps.xml` exports.

// Module declarations
pub mod adaptors;
pub mod cli;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod models;
pub mod parser;
pub mod services;

pub use adaptors::{DcsWorldParser, ProfileSource, StarCitizenParser};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use models::ProfileCollection;
pub use parser::parse_single_document;
