//! Structured error types shared across the hierarchy crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`HierError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (field names, tags, values).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the hierarchy engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum HierError {
    /// Non-physical input or a spectrum no hierarchy can describe.
    #[error("invalid spectrum: {0}")]
    InvalidSpectrum(ErrorInfo),
    /// A hierarchy tag that is unknown or missing from a table.
    #[error("unsupported hierarchy: {0}")]
    UnsupportedHierarchy(ErrorInfo),
    /// Non-finite output of a numerical routine.
    #[error("numerical singularity: {0}")]
    NumericalSingularity(ErrorInfo),
    /// Malformed expansion table content.
    #[error("table error: {0}")]
    Table(ErrorInfo),
    /// Invalid calculation options.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl HierError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HierError::InvalidSpectrum(info)
            | HierError::UnsupportedHierarchy(info)
            | HierError::NumericalSingularity(info)
            | HierError::Table(info)
            | HierError::Config(info)
            | HierError::Serde(info) => info,
        }
    }

    /// Returns true when the error marks a non-physical spectrum.
    pub fn is_invalid_spectrum(&self) -> bool {
        matches!(self, HierError::InvalidSpectrum(_))
    }
}
