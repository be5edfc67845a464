//! Star Citizen binding import from an exported `actionmaps.xml`.

use crate::adaptors::ProfileSource;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::models::ProfileCollection;
use crate::parser::action_maps::{parse_action_maps, ActionMapsDocument};
use crate::services::action_names::canonical_action_name;
use crate::services::bindings::ActionMapResolver;
use crate::services::control_ids::{decode_action_map_bind, BindSkip};
use crate::services::devices::{
    star_citizen_device_key, star_citizen_identity_from_product, DeviceRegistry,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Name of the single profile produced from an action-maps document.
pub const DEFAULT_PROFILE: &str = "Default";

/// Reads bindings from a Star Citizen action-maps document.
#[derive(Debug, Clone)]
pub struct StarCitizenParser {
    document: ActionMapsDocument,
}

impl StarCitizenParser {
    /// Loads and validates an `.xml` export.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, is not an `.xml` file, or is not a valid
    /// Star Citizen action-maps document.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        if path.extension().is_none_or(|ext| ext != "xml") {
            anyhow::bail!("File must be an XML file: {}", path.display());
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_xml(&data).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Parses and validates an action-maps document held in memory.
    ///
    /// # Errors
    ///
    /// Fails on malformed XML or when the document lacks the `ActionMaps`,
    /// `options` or `actionmap` elements.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let document = parse_action_maps(xml).context("File is not a valid Star Citizen XML")?;
        document.validate()?;
        Ok(Self { document })
    }

    #[must_use]
    pub fn document(&self) -> &ActionMapsDocument {
        &self.document
    }

    /// Resolves every rebind into a single [`DEFAULT_PROFILE`] profile.
    ///
    /// Rebinds for unknown devices or unsupported controls are skipped;
    /// unknown hat directions are additionally recorded as warnings.
    ///
    /// # Errors
    ///
    /// Only fails if the output profile cannot be created.
    pub fn parse(&self, diagnostics: &mut Diagnostics) -> Result<ProfileCollection> {
        let mut registry = DeviceRegistry::new();
        for option in &self.document.options {
            let key = star_citizen_device_key(&option.device_type, &option.instance);
            let (guid, name) = star_citizen_identity_from_product(&option.product);
            registry.register(&key, &guid, &name);
        }

        let mut resolver = ActionMapResolver::new();
        for action_map in &self.document.action_maps {
            debug!("Bind category: {}", canonical_action_name(&action_map.name));

            for action in &action_map.actions {
                let name = canonical_action_name(&action.name);
                for input in &action.rebinds {
                    match decode_action_map_bind(input, &registry) {
                        Ok((device, control)) => {
                            let outcome = resolver.offer(&device, control, &name);
                            debug!("{input} -> {name} on {}: {outcome:?}", device.name);
                        }
                        Err(BindSkip::UnknownHatDirection(direction)) => diagnostics.warning(
                            DiagnosticKind::UnknownHatDirection,
                            format!("{input}: hat direction '{direction}' is not up/down/left/right"),
                        ),
                        Err(skip) => debug!("Skipping {input}: {skip}"),
                    }
                }
            }
        }

        let mut collection = ProfileCollection::new();
        resolver.into_profile(&mut collection, DEFAULT_PROFILE)?;
        Ok(collection)
    }
}

impl ProfileSource for StarCitizenParser {
    fn name(&self) -> &'static str {
        "Star Citizen"
    }

    fn process(&self, diagnostics: &mut Diagnostics) -> Result<ProfileCollection> {
        self.parse(diagnostics)
    }
}
