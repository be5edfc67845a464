//! Canonical control identifiers.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Format-independent name of a physical input element.
///
/// Shapes produced by the decoders:
///
/// - `BUTTON_<n>`
/// - `AXIS_<name>`, `AXIS_R<name>`, `AXIS_SLIDER_<n>`
/// - `POV_<n>_<dir>` and `POV_<n>_<dir>_<state>`
///
/// Values are only created by [`crate::services::control_ids`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_button(&self) -> bool {
        self.0.starts_with("BUTTON_")
    }

    #[must_use]
    pub fn is_axis(&self) -> bool {
        self.0.starts_with("AXIS_")
    }

    #[must_use]
    pub fn is_hat(&self) -> bool {
        self.0.starts_with("POV_")
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl PartialEq<str> for ControlId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ControlId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Keys that must be held together for a binding to apply.
pub type ModifierSet = BTreeSet<String>;
