//! Service layer for binding normalization.
//!
//! This module contains the pieces shared by the game adaptors: control id
//! decoding, device identity, action name rewriting, conflict resolution and
//! file system access.

pub mod action_names;
pub mod bindings;
pub mod control_ids;
pub mod devices;
pub mod filesystem;

// Re-export commonly used types and functions
pub use action_names::canonical_action_name;
pub use bindings::{ActionMapResolver, ResolveOutcome, BYPASS_ACTIONS};
pub use control_ids::{decode_action_map_bind, decode_diff_key, BindSkip};
pub use devices::{DeviceEntry, DeviceRegistry};
pub use filesystem::{FileSystem, MemoryFileSystem, OsFileSystem};
