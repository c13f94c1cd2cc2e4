//! Structured diagnostics returned alongside ingested records

use serde::Serialize;
use std::fmt;

use crate::error::{SourceError, TokenError, ValueError};

/// Granularity at which a failure was isolated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The whole source could not be read; the pass yields no records
    SourceUnavailable,
    /// A required field is missing or unusable; the row is dropped
    RowMalformed,
    /// One sub-activity token is unusable; only that token is dropped
    TokenMalformed,
}

impl ErrorKind {
    /// Machine-readable name, as serialized
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::SourceUnavailable => "source-unavailable",
            ErrorKind::RowMalformed => "row-malformed",
            ErrorKind::TokenMalformed => "token-malformed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::SourceUnavailable => "source unavailable",
            ErrorKind::RowMalformed => "row malformed",
            ErrorKind::TokenMalformed => "token malformed",
        };
        f.write_str(s)
    }
}

/// Cause category, for grouping diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cause {
    Unreadable,
    MissingField,
    NotNumeric,
    ValueOutOfDomain,
    BadShape,
}

impl Cause {
    /// Machine-readable name, as serialized
    pub fn as_str(self) -> &'static str {
        match self {
            Cause::Unreadable => "unreadable",
            Cause::MissingField => "missing-field",
            Cause::NotNumeric => "not-numeric",
            Cause::ValueOutOfDomain => "value-out-of-domain",
            Cause::BadShape => "bad-shape",
        }
    }
}

impl From<&ValueError> for Cause {
    fn from(err: &ValueError) -> Self {
        match err {
            ValueError::Empty => Cause::MissingField,
            ValueError::NotNumeric { .. } => Cause::NotNumeric,
            ValueError::OutOfDomain { .. } => Cause::ValueOutOfDomain,
        }
    }
}

impl From<&TokenError> for Cause {
    fn from(err: &TokenError) -> Self {
        match err {
            TokenError::Value { source, .. } => Cause::from(source),
            TokenError::MissingSeparator | TokenError::EmptyName | TokenError::UnmatchedPipe => {
                Cause::BadShape
            }
        }
    }
}

/// A recovered failure, with enough identity to find the offending input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub cause: Cause,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub detail: String,
}

impl ParseError {
    pub fn source_unavailable(err: &SourceError) -> Self {
        Self {
            kind: ErrorKind::SourceUnavailable,
            cause: Cause::Unreadable,
            row: None,
            line: None,
            name: None,
            field: None,
            token: None,
            detail: err.to_string(),
        }
    }

    pub fn row(row: usize, line: usize, name: Option<&str>, field: &str, cause: Cause, detail: String) -> Self {
        Self {
            kind: ErrorKind::RowMalformed,
            cause,
            row: Some(row),
            line: Some(line),
            name: name.map(str::to_string),
            field: Some(field.to_string()),
            token: None,
            detail,
        }
    }

    /// A row cut short by a quoted cell that runs to the end of the source
    pub fn unclosed_quote(row: usize, line: usize, name: Option<&str>) -> Self {
        Self {
            kind: ErrorKind::RowMalformed,
            cause: Cause::BadShape,
            row: Some(row),
            line: Some(line),
            name: name.map(str::to_string),
            field: None,
            token: None,
            detail: "quoted cell is never closed".to_string(),
        }
    }

    pub fn token(row: usize, line: usize, name: &str, field: &str, token: &str, err: &TokenError) -> Self {
        Self {
            kind: ErrorKind::TokenMalformed,
            cause: Cause::from(err),
            row: Some(row),
            line: Some(line),
            name: Some(name.to_string()),
            field: Some(field.to_string()),
            token: Some(token.trim().to_string()),
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(row) = self.row {
            write!(f, " at row {row}")?;
        }
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        if let Some(field) = &self.field {
            write!(f, ", field {field}")?;
        }
        if let Some(token) = &self.token {
            write!(f, ", token \"{token}\"")?;
        }
        write!(f, ": {}", self.detail)
    }
}

impl std::error::Error for ParseError {}
