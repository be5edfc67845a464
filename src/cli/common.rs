//! Shared types for CLI command handlers.

use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::models::{ControlId, Input, ProfileCollection};
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

/// Headings of the text output, in print order.
const CONTROL_GROUPS: [&str; 4] = ["Buttons", "Axes", "Hats", "Other"];

fn control_group(id: &ControlId) -> &'static str {
    if id.is_button() {
        "Buttons"
    } else if id.is_axis() {
        "Axes"
    } else if id.is_hat() {
        "Hats"
    } else {
        "Other"
    }
}

/// Process exit status for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad arguments or missing configuration
    ValidationError = 1,
    /// Input could not be read or is structurally invalid
    IoError = 2,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Error returned by a command handler, carrying its exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    pub code: ExitCode,
    pub message: String,
}

impl CliError {
    /// I/O or structural failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Usage or validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, CliError>;

/// JSON response for commands that import bindings
#[derive(Debug, Serialize)]
pub struct ProfilesResponse {
    #[serde(flatten)]
    pub profiles: ProfileCollection,
    pub diagnostics: Vec<Diagnostic>,
}

impl ProfilesResponse {
    #[must_use]
    pub fn new(profiles: ProfileCollection, diagnostics: Diagnostics) -> Self {
        Self {
            profiles,
            diagnostics: diagnostics.into_entries(),
        }
    }

    /// Prints the response as pretty JSON or as an indented summary.
    pub fn print(&self, json: bool) -> CliResult<()> {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(self)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        print!("{}", self.render_text());
        Ok(())
    }

    /// Renders profiles with inputs grouped by control kind, then any issues.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for profile in self.profiles.profiles() {
            let _ = writeln!(out, "{}", profile.name);
            for device in profile.devices() {
                let _ = writeln!(out, "  {} [{}]", device.name, device.guid);
                for group in CONTROL_GROUPS {
                    let inputs: Vec<&Input> = device
                        .inputs()
                        .iter()
                        .filter(|input| control_group(&input.id) == group)
                        .collect();
                    if inputs.is_empty() {
                        continue;
                    }

                    let _ = writeln!(out, "    {group}:");
                    for input in inputs {
                        let _ = writeln!(out, "      {:<16} {}", input.id, input.action);
                        for modifier in &input.modifiers {
                            let held: Vec<&str> =
                                modifier.modifiers.iter().map(String::as_str).collect();
                            let _ = writeln!(
                                out,
                                "      {:<16} {} (with {})",
                                "",
                                modifier.action,
                                held.join(" + ")
                            );
                        }
                    }
                }
            }
        }

        if !self.diagnostics.is_empty() {
            out.push_str("\nIssues:\n");
            for diagnostic in &self.diagnostics {
                let prefix = match diagnostic.severity {
                    Severity::Error => "  ✗",
                    Severity::Warning => "  ⚠",
                };
                let _ = writeln!(out, "{prefix} {diagnostic}");
            }
        }

        out
    }
}
