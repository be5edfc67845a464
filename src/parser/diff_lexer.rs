//! Tokenizer for DCS World `*.diff.lua` tables.
//!
//! The input is the table literal only: the `local diff = ` prefix and the
//! `return diff` suffix are removed before tokenizing.

use super::ParseError;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use regex::Regex;
use std::sync::LazyLock;

static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+\.[0-9]+").expect("valid float pattern"));
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("valid integer pattern"));
static STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"[\w/()\-:+,&.'<>\s]+""#).expect("valid string pattern")
});

/// Token kinds with their typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Equals,
    Str(String),
    Int(i64),
    Float(f64),
    True,
    False,
}

impl TokenKind {
    /// Short human-readable description used in syntax errors.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::LBrace => "'{'".to_string(),
            Self::RBrace => "'}'".to_string(),
            Self::LBracket => "'['".to_string(),
            Self::RBracket => "']'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Equals => "'='".to_string(),
            Self::Str(s) => format!("string \"{s}\""),
            Self::Int(i) => format!("integer {i}"),
            Self::Float(f) => format!("float {f}"),
            Self::True => "true".to_string(),
            Self::False => "false".to_string(),
        }
    }
}

/// A single lexed token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token, quotes included for strings
    pub lexeme: String,
    /// Byte offset of the token in the input
    pub offset: usize,
}

/// Splits `input` into tokens.
///
/// Illegal characters are recorded in `diagnostics` and skipped one at a time.
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumber`] when a numeric literal does not
/// fit in an `i64`.
pub fn tokenize(input: &str, diagnostics: &mut Diagnostics) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let Some(ch) = rest.chars().next() else {
            break;
        };

        if matches!(ch, ' ' | '\t' | '\n' | '\r') {
            pos += 1;
            continue;
        }

        let (kind, len) = if let Some(m) = FLOAT.find(rest) {
            let value = m
                .as_str()
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber {
                    lexeme: m.as_str().to_string(),
                    offset: pos,
                })?;
            (TokenKind::Float(value), m.end())
        } else if let Some(m) = INTEGER.find(rest) {
            let value = m
                .as_str()
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidNumber {
                    lexeme: m.as_str().to_string(),
                    offset: pos,
                })?;
            (TokenKind::Int(value), m.end())
        } else if let Some(m) = STRING.find(rest) {
            let text = m.as_str();
            (TokenKind::Str(text[1..text.len() - 1].to_string()), m.end())
        } else if rest.starts_with("true") {
            (TokenKind::True, 4)
        } else if rest.starts_with("false") {
            (TokenKind::False, 5)
        } else {
            let kind = match ch {
                '{' => Some(TokenKind::LBrace),
                '}' => Some(TokenKind::RBrace),
                '[' => Some(TokenKind::LBracket),
                ']' => Some(TokenKind::RBracket),
                ',' => Some(TokenKind::Comma),
                '=' => Some(TokenKind::Equals),
                _ => None,
            };
            match kind {
                Some(kind) => (kind, 1),
                None => {
                    diagnostics.error(
                        DiagnosticKind::IllegalCharacter,
                        format!("Illegal character '{ch}' at offset {pos}"),
                    );
                    pos += ch.len_utf8();
                    continue;
                }
            }
        };

        tokens.push(Token {
            kind,
            lexeme: rest[..len].to_string(),
            offset: pos,
        });
        pos += len;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut diagnostics = Diagnostics::new();
        tokenize(input, &mut diagnostics)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_structural_tokens() {
        assert_eq!(
            kinds("{ [ ] , = }"),
            vec![
                TokenKind::LBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Equals,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn test_float_wins_over_integer() {
        assert_eq!(kinds("12.5"), vec![TokenKind::Float(12.5)]);
        assert_eq!(kinds("-0.25"), vec![TokenKind::Float(-0.25)]);
        assert_eq!(kinds("+1.0"), vec![TokenKind::Float(1.0)]);
        assert_eq!(kinds("42"), vec![TokenKind::Int(42)]);
    }

    #[test]
    fn test_strings_strip_quotes() {
        assert_eq!(
            kinds(r#""Weapon Release (Bombs) - A/G""#),
            vec![TokenKind::Str("Weapon Release (Bombs) - A/G".to_string())]
        );
        assert_eq!(
            kinds(r#""JOY_BTN1""#),
            vec![TokenKind::Str("JOY_BTN1".to_string())]
        );
    }

    #[test]
    fn test_booleans() {
        assert_eq!(kinds("true false"), vec![TokenKind::True, TokenKind::False]);
    }

    #[test]
    fn test_illegal_character_is_skipped() {
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize("{ % }", &mut diagnostics).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(diagnostics.of_kind(DiagnosticKind::IllegalCharacter).count(), 1);
    }

    #[test]
    fn test_negative_integer_sign_is_illegal() {
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize("-5", &mut diagnostics).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Int(5));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_multibyte_illegal_character() {
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize("§1", &mut diagnostics).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Int(1));
        assert_eq!(tokens[0].offset, '§'.len_utf8());
    }

    #[test]
    fn test_integer_overflow_fails() {
        let mut diagnostics = Diagnostics::new();
        let result = tokenize("99999999999999999999999", &mut diagnostics);
        assert!(matches!(result, Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn test_lexeme_and_offset() {
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize(r#"[ "key" ]"#, &mut diagnostics).unwrap();
        assert_eq!(tokens[1].lexeme, "\"key\"");
        assert_eq!(tokens[1].offset, 2);
    }
}
