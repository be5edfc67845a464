//! DCS World binding import.
//!
//! DCS keeps one directory per aircraft under `Saved Games/DCS/Config/Input`.
//! Each aircraft has a `joystick` directory with one `*.diff.lua` file per
//! device, holding a Lua table of changes against the default bindings:
//!
//! ```lua
//! local diff = {
//!     ["keyDiffs"] = {
//!         ["d3001pnilu3001cd11vd1vpnilvunil"] = {
//!             ["added"] = {
//!                 [1] = {
//!                     ["key"] = "JOY_BTN3",
//!                     ["reformers"] = { [1] = "JOY_BTN5" },
//!                 },
//!             },
//!             ["name"] = "Weapon Release",
//!         },
//!     },
//! }
//! return diff
//! ```

use crate::adaptors::ProfileSource;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::models::{Device, ModifierSet, ProfileCollection};
use crate::parser::{parse_single_document, ConfigNode, ConfigValue};
use crate::services::control_ids::decode_diff_key;
use crate::services::devices::{dcs_identity_from_filename, DeviceRegistry};
use crate::services::filesystem::{FileSystem, OsFileSystem};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Profiles containing this marker are the simplified "easy" control schemes.
pub const EASY_MODES: &str = "_easy";

const CONFIG_DIR: &str = "Config";
const INPUT_DIR: &str = "Input";
const JOYSTICK_DIR: &str = "joystick";

const DIFF_PREFIX: &str = "local diff = ";
const DIFF_SUFFIX: &str = "return diff";

/// Diff tables that carry bindings.
pub const DIFF_SECTIONS: [&str; 2] = ["keyDiffs", "axisDiffs"];

/// Reads DCS World bindings from a saved-games directory.
#[derive(Debug)]
pub struct DcsWorldParser<F: FileSystem = OsFileSystem> {
    path: PathBuf,
    fs: F,
    remove_easy_modes: bool,
    valid_profiles: Vec<String>,
}

impl DcsWorldParser<OsFileSystem> {
    /// Opens a DCS saved-games directory (e.g. `Saved Games/DCS.openbeta`).
    ///
    /// # Errors
    ///
    /// Fails if `Config/Input` is missing or contains no entries.
    pub fn new(path: impl Into<PathBuf>, remove_easy_modes: bool) -> Result<Self> {
        Self::with_file_system(path, OsFileSystem, remove_easy_modes)
    }
}

impl<F: FileSystem> DcsWorldParser<F> {
    /// Opens a DCS saved-games directory through `fs`.
    ///
    /// # Errors
    ///
    /// Fails if `Config/Input` is missing or contains no entries.
    pub fn with_file_system(path: impl Into<PathBuf>, fs: F, remove_easy_modes: bool) -> Result<Self> {
        let path = path.into();
        let base_directory = validate_base_directory(&path, &fs)?;

        if base_directory.is_empty() {
            anyhow::bail!("DCS: No profiles exist in Input directory!");
        }

        let input_dir = path.join(CONFIG_DIR).join(INPUT_DIR);
        let valid_profiles = base_directory
            .into_iter()
            .filter(|item| {
                let valid = is_valid_profile(&input_dir.join(item), &fs);
                if !valid {
                    info!("DCS: Profile {item} has no joystick directory files");
                }
                valid
            })
            .collect();

        Ok(Self {
            path,
            fs,
            remove_easy_modes,
            valid_profiles,
        })
    }

    /// Profiles with a `joystick` directory, without easy modes when enabled.
    #[must_use]
    pub fn validated_profiles(&self) -> Vec<String> {
        self.valid_profiles
            .iter()
            .filter(|p| !(self.remove_easy_modes && p.contains(EASY_MODES)))
            .cloned()
            .collect()
    }

    fn joystick_dir(&self, profile: &str) -> PathBuf {
        self.path
            .join(CONFIG_DIR)
            .join(INPUT_DIR)
            .join(profile)
            .join(JOYSTICK_DIR)
    }

    /// Parses the given profiles, or every validated profile when `profiles`
    /// is `None` or empty.
    ///
    /// Files that fail to parse are recorded in `diagnostics` and contribute
    /// no bindings; the other files of the profile are still read.
    ///
    /// # Errors
    ///
    /// Fails if a profile directory cannot be listed, a listed file can no
    /// longer be read, or a profile name is given twice.
    pub fn process_profiles(
        &self,
        profiles: Option<&[String]>,
        diagnostics: &mut Diagnostics,
    ) -> Result<ProfileCollection> {
        let to_process = match profiles {
            Some(list) if !list.is_empty() => list.to_vec(),
            _ => self.validated_profiles(),
        };

        let mut collection = ProfileCollection::new();

        if to_process.is_empty() {
            diagnostics.warning(
                DiagnosticKind::NoProfiles,
                "No profiles were found, so nothing to process.",
            );
            return Ok(collection);
        }

        let mut registry = DeviceRegistry::new();

        for profile_name in &to_process {
            let profile = collection.create_profile(profile_name)?;
            let joystick_dir = self.joystick_dir(profile_name);
            let items = self.fs.list_dir(&joystick_dir).with_context(|| {
                format!("DCS: Failed to list {}", joystick_dir.display())
            })?;

            for item in items {
                let (guid, name) = dcs_identity_from_filename(&item);
                let entry = registry.register(&guid, &guid, &name);
                let device = profile.add_device(&entry.guid, &entry.name);

                let file_path = joystick_dir.join(&item);
                if self.fs.is_dir(&file_path) {
                    info!("Skipping {item} as folder");
                    continue;
                }

                debug!("Obtaining file data for {item}");
                let text = self.fs.read_to_string(&file_path).with_context(|| {
                    format!(
                        "DCS: File {item} no longer found - it has been moved/deleted from directory"
                    )
                })?;

                diagnostics.set_source(Some(format!("{profile_name}/{item}")));
                if let Ok(config) = parse_single_document(&strip_diff_wrapper(&text), diagnostics)
                {
                    assign_to_inputs(&config, device, diagnostics);
                } else {
                    warn!("Skipping {item}: file could not be parsed");
                }
                diagnostics.set_source(None);
            }
        }

        Ok(collection)
    }
}

impl<F: FileSystem> ProfileSource for DcsWorldParser<F> {
    fn name(&self) -> &'static str {
        "DCS World"
    }

    fn process(&self, diagnostics: &mut Diagnostics) -> Result<ProfileCollection> {
        self.process_profiles(None, diagnostics)
    }
}

/// Lists `Config/Input`, failing if the expected layout is absent.
fn validate_base_directory(path: &Path, fs: &impl FileSystem) -> Result<Vec<String>> {
    let top = fs
        .list_dir(path)
        .with_context(|| format!("DCS: Failed to read directory {}", path.display()))?;

    if !top.iter().any(|entry| entry == CONFIG_DIR) {
        anyhow::bail!("DCS: No Config Folder found in DCS Folder.");
    }

    fs.list_dir(&path.join(CONFIG_DIR).join(INPUT_DIR))
        .context("DCS: No input directory found")
}

fn is_valid_profile(path: &Path, fs: &impl FileSystem) -> bool {
    fs.is_dir(path)
        && fs
            .list_dir(path)
            .is_ok_and(|entries| entries.iter().any(|e| e == JOYSTICK_DIR))
}

/// Removes the `local diff = ` / `return diff` wrapper around the table.
#[must_use]
pub fn strip_diff_wrapper(text: &str) -> String {
    text.replace(DIFF_PREFIX, "").replace(DIFF_SUFFIX, "")
}

/// Adds every binding found in the diff sections of `config` to `device`.
pub fn assign_to_inputs(config: &ConfigNode, device: &mut Device, diagnostics: &mut Diagnostics) {
    for section in DIFF_SECTIONS {
        let Some(value) = config.get(section) else {
            continue;
        };
        let Some(entries) = value.as_table() else {
            diagnostics.warning(
                DiagnosticKind::MalformedEntry,
                format!("{section} is not a table"),
            );
            continue;
        };

        for data in entries.values() {
            let Some(data) = data.as_table() else {
                diagnostics.warning(
                    DiagnosticKind::MalformedEntry,
                    format!("{section} entry is not a table"),
                );
                continue;
            };
            let Some(operation) = data.get("name").and_then(ConfigValue::as_str) else {
                diagnostics.warning(
                    DiagnosticKind::MalformedEntry,
                    format!("{section} entry has no name"),
                );
                continue;
            };

            match data.get("added") {
                Some(ConfigValue::Table(added)) => {
                    assign_added(added, operation, device, diagnostics);
                }
                Some(other) if other.is_truthy() => diagnostics.warning(
                    DiagnosticKind::MalformedEntry,
                    format!("'added' of {operation} is not a table"),
                ),
                _ => {}
            }
        }
    }
}

fn assign_added(
    added: &ConfigNode,
    operation: &str,
    device: &mut Device,
    diagnostics: &mut Diagnostics,
) {
    for binding in added.values() {
        let Some(key) = binding
            .as_table()
            .and_then(|b| b.get("key"))
            .and_then(ConfigValue::as_str)
        else {
            diagnostics.warning(
                DiagnosticKind::MalformedEntry,
                format!("Binding of {operation} has no key"),
            );
            continue;
        };

        let id = decode_diff_key(key, diagnostics);
        device.create_input(id.clone(), operation);

        let Some(reformers) = binding.as_table().and_then(|b| b.table("reformers")) else {
            continue;
        };
        let modifiers: ModifierSet = reformers
            .values()
            .filter_map(ConfigValue::as_str)
            .map(str::to_string)
            .collect();
        if modifiers.is_empty() {
            continue;
        }

        if let Err(err) = device.add_modifier_to_input(&id, modifiers, operation) {
            diagnostics.error(DiagnosticKind::MissingInput, err.to_string());
        }
    }
}
