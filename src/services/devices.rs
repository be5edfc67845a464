//! Device identity and the per-pass device registry.
//!
//! Each game names devices differently. DCS World encodes the device name and
//! GUID in the binding file name; Star Citizen refers to devices by a short key
//! (`js1`, `kb1`) declared in `<options>` elements. Both end up as a shared
//! [`DeviceEntry`] looked up through a [`DeviceRegistry`].

use std::collections::HashMap;
use std::rc::Rc;

/// Canonical device identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub guid: String,
    pub name: String,
}

/// Devices seen during a single parse pass, keyed by identity string.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    entries: HashMap<String, Rc<DeviceEntry>>,
}

impl DeviceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device under `identity`.
    ///
    /// The first registration wins: later calls with the same identity return
    /// the existing entry unchanged.
    pub fn register(&mut self, identity: &str, guid: &str, name: &str) -> Rc<DeviceEntry> {
        Rc::clone(self.entries.entry(identity.to_string()).or_insert_with(|| {
            tracing::debug!("Registered device {identity}: {name} ({guid})");
            Rc::new(DeviceEntry {
                guid: guid.to_string(),
                name: name.to_string(),
            })
        }))
    }

    #[must_use]
    pub fn lookup(&self, identity: &str) -> Option<Rc<DeviceEntry>> {
        self.entries.get(identity).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits a DCS World binding file name into `(guid, name)`.
///
/// File names look like
/// `Throttle - HOTAS Warthog {44F07A40-3920-11e7-8003-444553540000}.diff.lua`.
/// The positions are fixed: the name is everything except the last 48
/// characters and the GUID is characters `[-46, -11)`.
#[must_use]
pub fn dcs_identity_from_filename(filename: &str) -> (String, String) {
    let guid = char_slice(filename, Some(-46), Some(-11));
    let name = char_slice(filename, None, Some(-48));
    (guid.to_string(), name.to_string())
}

/// Builds the Star Citizen device key, e.g. `js1` for joystick instance 1.
#[must_use]
pub fn star_citizen_device_key(device_type: &str, instance: &str) -> String {
    let code = match device_type {
        "keyboard" => "kb",
        "joystick" => "js",
        _ => "mo",
    };
    format!("{code}{instance}")
}

/// Splits a Star Citizen product string into `(guid, name)`.
///
/// Product strings end with a braced GUID, e.g.
/// `T-16000M  {B10A044F-0000-0000-0000-504944564944}`.
#[must_use]
pub fn star_citizen_identity_from_product(product: &str) -> (String, String) {
    let guid = char_slice(product, Some(-37), Some(-2));
    let name = char_slice(product, None, Some(-38)).trim();
    (guid.to_string(), name.to_string())
}

/// Slices `s` by character positions, where negative positions count from the
/// end. Out-of-range positions are clamped and an inverted range is empty.
fn char_slice(s: &str, start: Option<isize>, end: Option<isize>) -> &str {
    let len = s.chars().count() as isize;
    let clamp = |i: isize| if i < 0 { (len + i).max(0) } else { i.min(len) };
    let start = start.map_or(0, clamp);
    let end = end.map_or(len, clamp);
    if start >= end {
        return "";
    }

    let byte_at = |index: isize| {
        s.char_indices()
            .nth(index as usize)
            .map_or(s.len(), |(offset, _)| offset)
    };
    &s[byte_at(start)..byte_at(end)]
}
