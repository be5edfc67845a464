//! Star Citizen `actionmaps.xml` reader.
//!
//! Walks the XML event stream once and keeps only what binding extraction
//! needs: the `<options>` device declarations and the
//! `<actionmap>/<action>/<rebind>` hierarchy.

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Device declaration from an `<options>` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceOption {
    /// `keyboard`, `joystick`, `gamepad`, ...
    pub device_type: String,
    pub instance: String,
    /// Product string, e.g. `"T-16000M  {B10A044F-0000-0000-0000-504944564944}"`
    pub product: String,
}

/// One `<action>` with the inputs of its `<rebind>` children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Action {
    pub name: String,
    pub rebinds: Vec<String>,
}

/// One `<actionmap>` category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionMap {
    pub name: String,
    pub actions: Vec<Action>,
}

/// The parts of an action-maps document used for binding extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionMapsDocument {
    pub options: Vec<DeviceOption>,
    pub action_maps: Vec<ActionMap>,
    /// Number of `<ActionMaps>` elements seen
    pub roots: usize,
}

impl ActionMapsDocument {
    /// Checks that this looks like a Star Citizen export: exactly one
    /// `<ActionMaps>` root, at least one `<options>` and one `<actionmap>`.
    pub fn validate(&self) -> Result<()> {
        if self.roots != 1 {
            anyhow::bail!(
                "File is not a valid Star Citizen XML: expected one ActionMaps element, found {}",
                self.roots
            );
        }
        if self.options.is_empty() {
            anyhow::bail!("File is not a valid Star Citizen XML: no device options found");
        }
        if self.action_maps.is_empty() {
            anyhow::bail!("File is not a valid Star Citizen XML: no actionmap elements found");
        }
        Ok(())
    }
}

/// Parses an action-maps document.
///
/// # Errors
///
/// Returns an error for malformed XML or unreadable attributes. Structural
/// validation is separate, see [`ActionMapsDocument::validate`].
pub fn parse_action_maps(xml: &str) -> Result<ActionMapsDocument> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut document = ActionMapsDocument::default();
    let mut in_action_map = false;
    let mut in_action = false;

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("XML parse error at byte {}", reader.buffer_position()))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                match e.name().as_ref() {
                    b"ActionMaps" => document.roots += 1,
                    b"options" => document.options.push(DeviceOption {
                        device_type: attribute(e, b"type")?.unwrap_or_default(),
                        instance: attribute(e, b"instance")?.unwrap_or_default(),
                        product: attribute(e, b"Product")?.unwrap_or_default(),
                    }),
                    b"actionmap" => {
                        document.action_maps.push(ActionMap {
                            name: attribute(e, b"name")?.unwrap_or_default(),
                            actions: Vec::new(),
                        });
                        in_action_map = !is_empty;
                        in_action = false;
                    }
                    b"action" if in_action_map => {
                        if let Some(map) = document.action_maps.last_mut() {
                            map.actions.push(Action {
                                name: attribute(e, b"name")?.unwrap_or_default(),
                                rebinds: Vec::new(),
                            });
                        }
                        in_action = !is_empty;
                    }
                    b"rebind" if in_action => {
                        let input = attribute(e, b"input")?.unwrap_or_default();
                        if let Some(action) = document
                            .action_maps
                            .last_mut()
                            .and_then(|map| map.actions.last_mut())
                        {
                            action.rebinds.push(input);
                        }
                    }
                    _ => {}
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"actionmap" => {
                    in_action_map = false;
                    in_action = false;
                }
                b"action" => in_action = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(document)
}

/// Reads an attribute value, unescaping XML entities.
fn attribute(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.context("Malformed XML attribute")?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .context("Failed to unescape XML attribute")?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
