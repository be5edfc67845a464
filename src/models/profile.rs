//! Normalized binding model shared by all game adaptors.
//!
//! A [`ProfileCollection`] owns profiles, a [`Profile`] owns its devices and a
//! [`Device`] owns its inputs. Nothing is shared between profiles. All levels
//! keep insertion order so output follows the order sources were read in.

use crate::models::control::{ControlId, ModifierSet};
use anyhow::Result;
use serde::Serialize;

/// Action bound to a control while a set of modifiers is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modifier {
    pub modifiers: ModifierSet,
    pub action: String,
}

/// One physical control on a device and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Input {
    pub id: ControlId,
    /// Action for the control with no modifiers held
    pub action: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
}

impl Input {
    fn new(id: ControlId, action: String) -> Self {
        Self {
            id,
            action,
            modifiers: Vec::new(),
        }
    }

    /// Adds a modifier variant, replacing the action of an identical set.
    pub fn add_modifier(&mut self, modifiers: ModifierSet, action: impl Into<String>) {
        let action = action.into();
        if let Some(existing) = self.modifiers.iter_mut().find(|m| m.modifiers == modifiers) {
            existing.action = action;
        } else {
            self.modifiers.push(Modifier { modifiers, action });
        }
    }
}

/// A physical device referenced by a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub guid: String,
    pub name: String,
    inputs: Vec<Input>,
}

impl Device {
    fn new(guid: String, name: String) -> Self {
        Self {
            guid,
            name,
            inputs: Vec::new(),
        }
    }

    /// Binds `action` to a control, replacing the action if the control is
    /// already bound.
    pub fn create_input(&mut self, id: ControlId, action: impl Into<String>) {
        let action = action.into();
        if let Some(input) = self.inputs.iter_mut().find(|i| i.id == id) {
            input.action = action;
        } else {
            self.inputs.push(Input::new(id, action));
        }
    }

    /// Attaches a modifier-qualified action to an existing input.
    ///
    /// # Errors
    ///
    /// Fails if `create_input` was never called for `id` on this device.
    pub fn add_modifier_to_input(
        &mut self,
        id: &ControlId,
        modifiers: ModifierSet,
        action: impl Into<String>,
    ) -> Result<()> {
        let Some(input) = self.inputs.iter_mut().find(|i| &i.id == id) else {
            anyhow::bail!(
                "Cannot add modifier to input {id} on device '{}': input does not exist",
                self.name
            );
        };
        input.add_modifier(modifiers, action);
        Ok(())
    }

    #[must_use]
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// Finds an input by its canonical id string.
    #[must_use]
    pub fn input(&self, id: &str) -> Option<&Input> {
        self.inputs.iter().find(|i| i.id == id)
    }
}

/// One complete control scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    devices: Vec<Device>,
}

impl Profile {
    fn new(name: String) -> Self {
        Self {
            name,
            devices: Vec::new(),
        }
    }

    /// Returns the device with `guid`, adding it first if needed.
    ///
    /// The name given on first addition is kept.
    pub fn add_device(&mut self, guid: &str, name: &str) -> &mut Device {
        let index = match self.devices.iter().position(|d| d.guid == guid) {
            Some(index) => index,
            None => {
                self.devices
                    .push(Device::new(guid.to_string(), name.to_string()));
                self.devices.len() - 1
            }
        };
        &mut self.devices[index]
    }

    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    #[must_use]
    pub fn device(&self, guid: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.guid == guid)
    }

    /// Finds a device by its display name.
    #[must_use]
    pub fn device_by_name(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }
}

/// All profiles produced by one parse pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProfileCollection {
    profiles: Vec<Profile>,
}

impl ProfileCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty profile.
    ///
    /// # Errors
    ///
    /// Fails if a profile with the same name already exists.
    pub fn create_profile(&mut self, name: &str) -> Result<&mut Profile> {
        if self.profiles.iter().any(|p| p.name == name) {
            anyhow::bail!("Profile '{name}' already exists");
        }
        self.profiles.push(Profile::new(name.to_string()));
        let index = self.profiles.len() - 1;
        Ok(&mut self.profiles[index])
    }

    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    #[must_use]
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ControlId {
        ControlId::new(s)
    }

    fn set(items: &[&str]) -> ModifierSet {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_create_profile_rejects_duplicates() {
        let mut collection = ProfileCollection::new();
        collection.create_profile("F-16C_50").unwrap();
        assert!(collection.create_profile("F-16C_50").is_err());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_add_device_is_idempotent() {
        let mut collection = ProfileCollection::new();
        let profile = collection.create_profile("A-10C").unwrap();
        profile.add_device("GUID-1", "Joystick - HOTAS Warthog");
        profile
            .add_device("GUID-1", "Other Name")
            .create_input(id("BUTTON_1"), "Trigger");
        profile.add_device("GUID-2", "Throttle - HOTAS Warthog");

        assert_eq!(profile.devices().len(), 2);
        let stick = profile.device("GUID-1").unwrap();
        assert_eq!(stick.name, "Joystick - HOTAS Warthog");
        assert_eq!(stick.inputs().len(), 1);
    }

    #[test]
    fn test_create_input_replaces_action() {
        let mut collection = ProfileCollection::new();
        let device = collection
            .create_profile("p")
            .unwrap()
            .add_device("g", "Stick");
        device.create_input(id("BUTTON_2"), "Gear Up");
        device.create_input(id("BUTTON_2"), "Gear Down");

        assert_eq!(device.inputs().len(), 1);
        assert_eq!(device.input("BUTTON_2").unwrap().action, "Gear Down");
    }

    #[test]
    fn test_add_modifier_to_existing_input() {
        let mut collection = ProfileCollection::new();
        let device = collection
            .create_profile("p")
            .unwrap()
            .add_device("g", "Stick");
        device.create_input(id("BUTTON_3"), "Flaps");
        device
            .add_modifier_to_input(&id("BUTTON_3"), set(&["JOY_BTN5"]), "Flaps Up")
            .unwrap();
        device
            .add_modifier_to_input(&id("BUTTON_3"), set(&["JOY_BTN6", "JOY_BTN5"]), "Airbrake")
            .unwrap();
        device
            .add_modifier_to_input(&id("BUTTON_3"), set(&["JOY_BTN5"]), "Flaps Down")
            .unwrap();

        let input = device.input("BUTTON_3").unwrap();
        assert_eq!(input.modifiers.len(), 2);
        assert_eq!(input.modifiers[0].action, "Flaps Down");
        assert_eq!(input.modifiers[1].modifiers, set(&["JOY_BTN5", "JOY_BTN6"]));
    }

    #[test]
    fn test_add_modifier_without_input_fails() {
        let mut collection = ProfileCollection::new();
        let device = collection
            .create_profile("p")
            .unwrap()
            .add_device("g", "Stick");
        let result = device.add_modifier_to_input(&id("BUTTON_9"), set(&["LAlt"]), "x");
        assert!(result.is_err());
        assert!(device.inputs().is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let mut collection = ProfileCollection::new();
        collection
            .create_profile("Default")
            .unwrap()
            .add_device("g", "Stick")
            .create_input(id("AXIS_X"), "Roll");

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["profiles"][0]["name"], "Default");
        assert_eq!(json["profiles"][0]["devices"][0]["inputs"][0]["id"], "AXIS_X");
        assert!(json["profiles"][0]["devices"][0]["inputs"][0]
            .get("modifiers")
            .is_none());
    }
}
