//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const STICK_FILE: &str =
    "Joystick - HOTAS Warthog {CCE5D6B0-3920-11e7-8001-444553540000}.diff.lua";
pub const STICK_GUID: &str = "CCE5D6B0-3920-11e7-8001-44455354000";
pub const STICK_NAME: &str = "Joystick - HOTAS Warthog";

pub const THROTTLE_FILE: &str =
    "Throttle - HOTAS Warthog {44F07A40-3920-11e7-8003-444553540000}.diff.lua";
pub const THROTTLE_NAME: &str = "Throttle - HOTAS Warthog";

pub const PEDALS_FILE: &str =
    "MFG Crosswind V2 {BD3A7A10-3C8E-11eb-8003-444553540000}.diff.lua";
pub const PEDALS_NAME: &str = "MFG Crosswind V2";

/// Stick bindings with an axis, a hat, a button and a modified button.
pub const STICK_DIFF: &str = r#"local diff = {
	["axisDiffs"] = {
		["a2001cdnil"] = {
			["added"] = {
				[1] = {
					["key"] = "JOY_Y",
				},
			},
			["name"] = "Pitch",
		},
	},
	["keyDiffs"] = {
		["d3001pnilu3001cd11vd1vpnilvunil"] = {
			["added"] = {
				[1] = {
					["key"] = "JOY_BTN2",
				},
				[2] = {
					["key"] = "JOY_BTN2",
					["reformers"] = {
						[1] = "JOY_BTN5",
					},
				},
			},
			["name"] = "Weapon Release",
		},
		["d350pnilu351cd22vd1vpnilvu0"] = {
			["added"] = {
				[1] = {
					["key"] = "JOY_BTN_POV1_U",
				},
			},
			["name"] = "TMS Up",
		},
	},
}
return diff"#;

/// Throttle file that the tokenizer accepts but the grammar rejects.
pub const BROKEN_DIFF: &str = r#"local diff = {
	["keyDiffs"] = {
		["d3014pnilu3014cd15vd1vpnilvunil"] = {
			["name"] = "Speed Brake" "Extend",
		},
	},
}
return diff"#;

/// Pedal rudder axis with a slider-style key.
pub const PEDALS_DIFF: &str = r#"local diff = {
	["axisDiffs"] = {
		["a2003cdnil"] = {
			["added"] = {
				[1] = {
					["key"] = "JOY_RZ",
				},
			},
			["name"] = "Rudder",
		},
		["a2004cdnil"] = {
			["added"] = {
				[1] = {
					["key"] = "JOY_SLIDER1",
				},
			},
			["name"] = "Wheel Brake Left",
		},
	},
}
return diff"#;

/// Creates `Config/Input/<profile>/joystick/<file>` trees in a temp directory.
///
/// A profile with no files still gets an empty `joystick` directory.
pub fn create_dcs_tree(profiles: &[(&str, &[(&str, &str)])]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (profile, files) in profiles {
        let joystick = input_dir(temp_dir.path()).join(profile).join("joystick");
        fs::create_dir_all(&joystick).expect("Failed to create joystick dir");
        for (name, content) in *files {
            fs::write(joystick.join(name), content).expect("Failed to write diff file");
        }
    }
    temp_dir
}

/// Returns `<root>/Config/Input`.
pub fn input_dir(root: &Path) -> PathBuf {
    root.join("Config").join("Input")
}

pub const ACTION_MAPS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ActionMaps version="1" optionsVersion="2" rebindVersion="2" profileName="default">
  <CustomisationUIHeader label="default" description="" image="">
    <devices>
      <keyboard instance="1"/>
      <joystick instance="1"/>
      <joystick instance="2"/>
    </devices>
  </CustomisationUIHeader>
  <options type="keyboard" instance="1" Product="Keyboard  {6F1D2B61-D5A0-11CF-BFC7-444553540000}"/>
  <options type="joystick" instance="1" Product="Throttle  {B10A044F-0000-0000-0000-504944564944}"/>
  <options type="joystick" instance="2" Product="Stick  {0402044F-0000-0000-0000-504944564944}"/>
  <modifiers/>
  <actionmap name="spaceship_movement">
    <action name="v_strafe_up">
      <rebind input="js1_button12"/>
    </action>
    <action name="v_ifcs_toggle_vector_decoupling">
      <rebind input="js1_hat1_up"/>
      <rebind input="js2_hat1_diagonal"/>
    </action>
    <action name="v_pitch">
      <rebind input="js2_y"/>
    </action>
    <action name="v_strafe_longitudinal">
      <rebind input="js1_slider1"/>
    </action>
  </actionmap>
  <actionmap name="spaceship_weapons">
    <action name="v_attack1_group1">
      <rebind input="js2_button1"/>
    </action>
    <action name="v_target_lock_selected">
      <rebind input="js2_button1"/>
      <rebind input="js3_button1"/>
    </action>
    <action name="v_attack1_group2">
      <rebind input="js1_button12"/>
    </action>
  </actionmap>
</ActionMaps>
"#;

pub const THROTTLE_GUID: &str = "B10A044F-0000-0000-0000-50494456494";

/// Writes `content` to `<temp>/<name>` and returns the path with its temp dir.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write file");
    (path, temp_dir)
}
