//! Decode error taxonomy.

use serde_json::Value;
use thiserror::Error;

use crate::kind::JsonKind;

/// Every way a decode can fail.
///
/// Paths are the dot-joined keys from the document root to the failing field,
/// e.g. `person.name.first`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("missing key `{0}`")]
    MissingKey(String),
    #[error("wrong type at `{key}`: expected {expected}, found {actual}")]
    WrongType {
        key: String,
        expected: &'static str,
        actual: JsonKind,
    },
    #[error("invalid URL at `{key}`: {string_value:?}")]
    InvalidUrl { key: String, string_value: String },
    #[error("invalid date at `{key}`: {string_value:?} does not match {format}")]
    InvalidDate {
        key: String,
        string_value: String,
        format: String,
    },
    #[error("top-level JSON value is not an object (found {})", JsonKind::of(.0))]
    InvalidJson(Value),
}

impl DecodeError {
    /// The resolved path of the failing field, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::MissingKey(key)
            | DecodeError::WrongType { key, .. }
            | DecodeError::InvalidUrl { key, .. }
            | DecodeError::InvalidDate { key, .. } => Some(key.as_str()),
            DecodeError::InvalidJson(_) => None,
        }
    }

    pub fn is_missing_key(&self) -> bool {
        matches!(self, DecodeError::MissingKey(_))
    }
}

/// Failure of the bytes-to-instance entry points.
///
/// Syntax errors come from the raw parser and are kept apart from
/// [`DecodeError`].
#[derive(Debug, Error)]
pub enum FromBytesError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
