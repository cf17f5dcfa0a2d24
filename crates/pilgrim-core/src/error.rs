//! Error types for the Pilgrim Guide core.

use thiserror::Error;

/// A shared error type for the Pilgrim Guide crates.
///
/// Almost nothing in the core can fail: unknown ids are no-ops, empty input
/// is ignored, and the matcher always has a fallback. The variants below
/// cover the one genuinely fallible boundary (ingesting an externally
/// supplied dataset) plus lookups that callers may want typed.
#[derive(Error, Debug, Clone)]
pub enum PilgrimError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PilgrimError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<serde_json::Error> for PilgrimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PilgrimError>`.
pub type Result<T> = std::result::Result<T, PilgrimError>;
