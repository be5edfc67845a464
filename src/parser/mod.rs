//! Parsing for the supported binding file formats.
//!
//! DCS World stores per-device bindings as Lua "diff" tables, handled by a
//! dedicated tokenizer and recursive-descent grammar. Star Citizen exports a
//! single XML action-maps document, read with an event-based XML walker.

pub mod action_maps;
pub mod diff_lexer;
pub mod diff_table;

use std::fmt;

// Re-export commonly used functions
pub use action_maps::{parse_action_maps, ActionMapsDocument};
pub use diff_table::{parse_single_document, ConfigKey, ConfigNode, ConfigValue, MAX_DEPTH};

/// Failure to read a diff table document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token appeared where the grammar expected something else
    UnexpectedToken {
        found: String,
        expected: &'static str,
        offset: usize,
    },
    /// Input ended in the middle of a table
    UnexpectedEnd { expected: &'static str },
    /// A numeric literal could not be represented
    InvalidNumber { lexeme: String, offset: usize },
    /// Tables nested deeper than the parser accepts
    TooDeep { limit: usize, offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found,
                expected,
                offset,
            } => write!(
                f,
                "Syntax error at offset {offset}: expected {expected}, found {found}"
            ),
            Self::UnexpectedEnd { expected } => {
                write!(f, "Syntax error: unexpected end of input, expected {expected}")
            }
            Self::InvalidNumber { lexeme, offset } => {
                write!(f, "Invalid number '{lexeme}' at offset {offset}")
            }
            Self::TooDeep { limit, offset } => {
                write!(f, "Tables nested deeper than {limit} levels at offset {offset}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
