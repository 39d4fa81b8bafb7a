//! Error types for spellindex
//!
//! Provides a unified error type for all operations.
//!
//! Filter rejections are not errors; see [`crate::classifier::Rejection`].

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Unified error type for spellindex operations
#[derive(Debug, Error)]
pub enum ExtractError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Line {line}: expected at least {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: field {field} is not a number: {value:?}")]
    InvalidNumber {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("Line {line}: effect slot {slot} has a non-numeric value: {value:?}")]
    InvalidSlot {
        line: usize,
        slot: usize,
        value: String,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration / Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),
}

impl ExtractError {
    /// Whether this error came from decoding an input line
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ExtractError::FieldCount { .. }
                | ExtractError::InvalidNumber { .. }
                | ExtractError::InvalidSlot { .. }
        )
    }
}
