//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Joymap";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "joymap";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR: &str = "joymap";
