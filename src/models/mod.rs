//! Data models for normalized control bindings.
//!
//! This module contains the format-independent output of every adaptor:
//! profiles, devices, inputs and their canonical control identifiers.

pub mod control;
pub mod profile;

// Re-export all model types
pub use control::{ControlId, ModifierSet};
pub use profile::{Device, Input, Modifier, Profile, ProfileCollection};
