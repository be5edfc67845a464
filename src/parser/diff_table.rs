//! Recursive-descent grammar for DCS World diff tables.
//!
//! ```text
//! table   := '{' entries '}'
//! entries := entry | entry ',' | entry ',' entries
//! entry   := key '=' value
//! key     := '[' INTEGER ']' | '[' STRING ']'
//! value   := STRING | BOOL | FLOAT | INTEGER | table
//! ```
//!
//! A document is exactly one table. Later entries overwrite earlier ones with
//! the same key at the same level. Nesting is limited to [`MAX_DEPTH`] tables.

use super::diff_lexer::{tokenize, Token, TokenKind};
use super::ParseError;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use std::collections::BTreeMap;

/// Deepest table nesting accepted; real diff files use about five levels.
pub const MAX_DEPTH: usize = 128;

/// Key of a table entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    Int(i64),
    Str(String),
}

impl From<&str> for ConfigKey {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for ConfigKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Value of a table entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Table(ConfigNode),
}

impl ConfigValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&ConfigNode> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Lua-style truthiness: everything except `false` counts as present.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}

/// One parsed table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigNode {
    entries: BTreeMap<ConfigKey, ConfigValue>,
}

impl ConfigNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<ConfigKey>, value: ConfigValue) {
        self.entries.insert(key.into(), value);
    }

    #[must_use]
    pub fn get(&self, key: impl Into<ConfigKey>) -> Option<&ConfigValue> {
        self.entries.get(&key.into())
    }

    /// Returns the nested table stored under `key`, if any.
    #[must_use]
    pub fn table(&self, key: impl Into<ConfigKey>) -> Option<&ConfigNode> {
        self.get(key).and_then(ConfigValue::as_table)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConfigKey, &ConfigValue)> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &ConfigValue> {
        self.entries.values()
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

/// Parses one diff document into a [`ConfigNode`].
///
/// Any syntax error rejects the whole document; it is also recorded in
/// `diagnostics`.
///
/// # Errors
///
/// Returns the first [`ParseError`] met while tokenizing or building the tree.
pub fn parse_single_document(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Result<ConfigNode, ParseError> {
    let result = tokenize(text, diagnostics).and_then(|tokens| {
        let mut parser = TableParser::new(&tokens);
        let table = parser.table()?;
        parser.expect_end()?;
        Ok(table)
    });

    if let Err(err) = &result {
        diagnostics.error(DiagnosticKind::SyntaxError, err.to_string());
    }

    result
}

struct TableParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> TableParser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a Token, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), ParseError> {
        let token = self.next(expected)?;
        if &token.kind == kind {
            Ok(())
        } else {
            Err(unexpected(token, expected))
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(unexpected(token, "end of input")),
        }
    }

    fn table(&mut self) -> Result<ConfigNode, ParseError> {
        self.expect(&TokenKind::LBrace, "'{'")?;
        if self.depth == MAX_DEPTH {
            let offset = self.tokens[self.pos - 1].offset;
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                offset,
            });
        }
        self.depth += 1;
        let node = self.entries();
        self.depth -= 1;
        node
    }

    fn entries(&mut self) -> Result<ConfigNode, ParseError> {
        let mut node = ConfigNode::new();

        loop {
            let (key, value) = self.entry()?;
            node.insert(key, value);

            let token = self.next("',' or '}'")?;
            match token.kind {
                TokenKind::RBrace => return Ok(node),
                TokenKind::Comma => {
                    if matches!(self.peek().map(|t| &t.kind), Some(TokenKind::RBrace)) {
                        self.pos += 1;
                        return Ok(node);
                    }
                }
                _ => return Err(unexpected(token, "',' or '}'")),
            }
        }
    }

    fn entry(&mut self) -> Result<(ConfigKey, ConfigValue), ParseError> {
        let key = self.key()?;
        self.expect(&TokenKind::Equals, "'='")?;
        let value = self.value()?;
        Ok((key, value))
    }

    fn key(&mut self) -> Result<ConfigKey, ParseError> {
        self.expect(&TokenKind::LBracket, "'['")?;
        let token = self.next("integer or string key")?;
        let key = match &token.kind {
            TokenKind::Int(i) => ConfigKey::Int(*i),
            TokenKind::Str(s) => ConfigKey::Str(s.clone()),
            _ => return Err(unexpected(token, "integer or string key")),
        };
        self.expect(&TokenKind::RBracket, "']'")?;
        Ok(key)
    }

    fn value(&mut self) -> Result<ConfigValue, ParseError> {
        let token = self.peek().ok_or(ParseError::UnexpectedEnd { expected: "value" })?;
        let value = match &token.kind {
            TokenKind::LBrace => return self.table().map(ConfigValue::Table),
            TokenKind::Str(s) => ConfigValue::Str(s.clone()),
            TokenKind::Int(i) => ConfigValue::Int(*i),
            TokenKind::Float(f) => ConfigValue::Float(*f),
            TokenKind::True => ConfigValue::Bool(true),
            TokenKind::False => ConfigValue::Bool(false),
            _ => return Err(unexpected(token, "value")),
        };
        self.pos += 1;
        Ok(value)
    }
}

fn unexpected(token: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.describe(),
        expected,
        offset: token.offset,
    }
}
