//! Recoverable problems found while parsing binding files.
//!
//! Parsers never abort a whole run for a bad character, an unknown control or a
//! single broken file. Instead they record a [`Diagnostic`] here and carry on,
//! so callers (and tests) can inspect exactly what was skipped and why.
//! Every entry is also forwarded to `tracing`.

use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Something was skipped or passed through, output is still usable
    Warning,
    /// A file or binding could not be read at all
    Error,
}

/// Category of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Tokenizer met a character no rule accepts
    IllegalCharacter,
    /// Grammar mismatch, the whole file was rejected
    SyntaxError,
    /// Control identifier had an unrecognized shape
    UnknownControl,
    /// Hat direction was not one of up/down/left/right
    UnknownHatDirection,
    /// A diff entry lacked a required field or had the wrong type
    MalformedEntry,
    /// Modifier attached to an input that was never created
    MissingInput,
    /// Nothing to process
    NoProfiles,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IllegalCharacter => "illegal character",
            Self::SyntaxError => "syntax error",
            Self::UnknownControl => "unknown control",
            Self::UnknownHatDirection => "unknown hat direction",
            Self::MalformedEntry => "malformed entry",
            Self::MissingInput => "missing input",
            Self::NoProfiles => "no profiles",
        };
        write!(f, "{name}")
    }
}

/// A single recorded problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    /// File (or other unit) being processed when the problem was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "[{source}] {}: {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// Collects diagnostics for one parse pass.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    source: Option<String>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source attached to subsequently recorded entries.
    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    /// Records a warning.
    pub fn warning(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(source = self.source.as_deref(), "{kind}: {message}");
        self.push(Severity::Warning, kind, message);
    }

    /// Records an error.
    pub fn error(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(source = self.source.as_deref(), "{kind}: {message}");
        self.push(Severity::Error, kind, message);
    }

    fn push(&mut self, severity: Severity, kind: DiagnosticKind, message: String) {
        self.entries.push(Diagnostic {
            severity,
            kind,
            message,
            source: self.source.clone(),
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Iterates over entries of the given kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consumes the sink, returning the recorded entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
