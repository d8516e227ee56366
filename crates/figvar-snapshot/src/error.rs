//! Error types for snapshot decoding.

use thiserror::Error;

/// Errors that can occur when decoding a snapshot payload.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload is not valid JSON or does not match the record shapes.
    #[error("malformed snapshot payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload is valid JSON but carries neither a `meta` envelope nor
    /// the bare `variables`/`variableCollections` maps.
    #[error("payload has neither a `meta` envelope nor a variables map")]
    MissingPayload,
}

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;
