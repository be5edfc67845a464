//! Conflict resolution for Star Citizen bindings.
//!
//! A control can appear in several `<rebind>` elements. The first action seen
//! for a (device, control) pair is kept, except that actions on the bypass
//! list always replace what is there.

use crate::models::{ControlId, ProfileCollection};
use crate::services::devices::DeviceEntry;
use anyhow::Result;
use std::rc::Rc;

/// Actions allowed to replace an existing binding.
pub const BYPASS_ACTIONS: &[&str] = &["Fire 1", "Fire 2"];

/// Result of offering a binding to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Control was unbound, the action was recorded
    Recorded,
    /// Control was bound, a bypass action replaced it
    Overwritten,
    /// Control was bound, the existing action was kept
    Kept,
}

#[derive(Debug)]
struct DeviceBindings {
    device: Rc<DeviceEntry>,
    controls: Vec<(ControlId, String)>,
}

/// Accumulates resolved bindings per device, in first-seen order.
///
/// Devices are keyed by GUID, so two devices sharing a product name but with
/// different GUIDs stay separate.
#[derive(Debug, Default)]
pub struct ActionMapResolver {
    devices: Vec<DeviceBindings>,
}

impl ActionMapResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers `action` for `control` on `device`.
    pub fn offer(
        &mut self,
        device: &Rc<DeviceEntry>,
        control: ControlId,
        action: &str,
    ) -> ResolveOutcome {
        let index = match self
            .devices
            .iter()
            .position(|d| d.device.guid == device.guid)
        {
            Some(index) => index,
            None => {
                self.devices.push(DeviceBindings {
                    device: Rc::clone(device),
                    controls: Vec::new(),
                });
                self.devices.len() - 1
            }
        };
        let controls = &mut self.devices[index].controls;

        match controls.iter_mut().find(|(id, _)| *id == control) {
            None => {
                controls.push((control, action.to_string()));
                ResolveOutcome::Recorded
            }
            Some((_, existing)) if BYPASS_ACTIONS.contains(&action) => {
                *existing = action.to_string();
                ResolveOutcome::Overwritten
            }
            Some(_) => ResolveOutcome::Kept,
        }
    }

    /// Returns the action currently bound to `control` on the device with `guid`.
    #[must_use]
    pub fn action(&self, guid: &str, control: &str) -> Option<&str> {
        self.devices
            .iter()
            .find(|d| d.device.guid == guid)?
            .controls
            .iter()
            .find(|(id, _)| *id == control)
            .map(|(_, action)| action.as_str())
    }

    /// Writes every resolved binding into a new profile of `collection`.
    ///
    /// # Errors
    ///
    /// Fails if `collection` already has a profile named `profile_name`.
    pub fn into_profile(self, collection: &mut ProfileCollection, profile_name: &str) -> Result<()> {
        let profile = collection.create_profile(profile_name)?;
        for bindings in self.devices {
            let device = profile.add_device(&bindings.device.guid, &bindings.device.name);
            for (control, action) in bindings.controls {
                device.create_input(control, action);
            }
        }
        Ok(())
    }
}
