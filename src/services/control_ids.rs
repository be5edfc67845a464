//! Decoding of raw control identifiers into [`ControlId`]s.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::models::ControlId;
use crate::services::devices::{DeviceEntry, DeviceRegistry};
use std::fmt;
use std::rc::Rc;

/// Decodes a DCS World key such as `JOY_BTN3`, `JOY_X`, `JOY_SLIDER1` or
/// `JOY_BTN_POV1_UR`.
///
/// Unrecognized shapes are recorded as a warning and returned unchanged.
pub fn decode_diff_key(raw: &str, diagnostics: &mut Diagnostics) -> ControlId {
    let segments: Vec<&str> = raw.split('_').collect();

    match segments.as_slice() {
        [_, control] => {
            if control.starts_with("BTN") {
                ControlId::new(control.replace("BTN", "BUTTON_"))
            } else if !control.is_empty() && control.chars().all(char::is_alphabetic) {
                ControlId::new(format!("AXIS_{control}"))
            } else if let Some(slider) = control.strip_prefix("SLIDER") {
                ControlId::new(format!("AXIS_SLIDER_{slider}"))
            } else {
                ControlId::new(*control)
            }
        }
        [_, hat, position, state] => match position.chars().nth(3) {
            Some(index) => ControlId::new(format!("{}_{index}_{state}", hat.replace("BTN", "POV"))),
            None => {
                diagnostics.warning(
                    DiagnosticKind::UnknownControl,
                    format!("POV position segment too short in {raw}"),
                );
                ControlId::new(raw)
            }
        },
        _ => {
            diagnostics.warning(
                DiagnosticKind::UnknownControl,
                format!("Button format not found for {segments:?}"),
            );
            ControlId::new(raw)
        }
    }
}

/// Why a Star Citizen rebind produced no binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindSkip {
    /// Device key was never declared in an `<options>` element
    UnknownDevice(String),
    /// Input names no control (`js1_ `) or an unsupported one
    NoControl,
    /// Hat direction missing or not one of up/down/left/right
    UnknownHatDirection(String),
}

impl fmt::Display for BindSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDevice(key) => write!(f, "unknown device '{key}'"),
            Self::NoControl => write!(f, "no control"),
            Self::UnknownHatDirection(dir) => write!(f, "unknown hat direction '{dir}'"),
        }
    }
}

/// Converts a Star Citizen hat direction to its single-letter form.
#[must_use]
pub fn hat_direction(direction: &str) -> Option<&'static str> {
    match direction {
        "up" => Some("U"),
        "down" => Some("D"),
        "left" => Some("L"),
        "right" => Some("R"),
        _ => None,
    }
}

/// Decodes a Star Citizen rebind input such as `js1_button12`, `js1_hat1_up`,
/// `js2_x`, `js1_rotz` or `js1_slider1` against the registered devices.
///
/// # Errors
///
/// Returns the [`BindSkip`] reason when the input yields no binding.
pub fn decode_action_map_bind(
    raw: &str,
    registry: &DeviceRegistry,
) -> Result<(Rc<DeviceEntry>, ControlId), BindSkip> {
    let mut segments = raw.split('_');
    let device_key = segments.next().unwrap_or_default();
    let device = registry
        .lookup(device_key)
        .ok_or_else(|| BindSkip::UnknownDevice(device_key.to_string()))?;

    let control = segments.next().unwrap_or_default();
    if control.is_empty() {
        return Err(BindSkip::NoControl);
    }

    let id = if let Some(button) = control.strip_prefix("button") {
        format!("BUTTON_{button}")
    } else if let Some(hat) = control.strip_prefix("hat") {
        let direction = segments.next().unwrap_or_default();
        let dir = hat_direction(direction)
            .ok_or_else(|| BindSkip::UnknownHatDirection(direction.to_string()))?;
        format!("POV_{hat}_{dir}")
    } else if let Some(axis @ ('x' | 'y' | 'z')) = control.chars().next() {
        format!("AXIS_{axis}")
    } else if let Some(rotation) = control.strip_prefix("rot") {
        format!("AXIS_R{rotation}")
    } else if let Some(slider) = control.strip_prefix("slider") {
        format!("AXIS_SLIDER_{slider}")
    } else {
        return Err(BindSkip::NoControl);
    };

    Ok((device, ControlId::new(id)))
}
