//! Error types for variable resolution.

use thiserror::Error;

/// Errors that can occur when looking up or resolving variables.
#[derive(Debug, Error)]
pub enum Error {
    /// No collection in the snapshot carries this display name (or, for
    /// internal lookups, this id).
    #[error("collection '{0}' not found")]
    CollectionNotFound(String),

    /// No variable in the snapshot carries this display name.
    #[error("variable '{0}' not found")]
    VariableNotFound(String),

    /// The active mode id has no value slot in this variable.
    #[error("mode {mode_id} not found in variable '{variable}'")]
    ModeNotFound { variable: String, mode_id: String },

    /// Alias traversal revisited a variable. The path lists the variable
    /// names in the order they were walked, ending on the repeated one.
    #[error("alias cycle detected: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// An alias slot points at a variable id with no record in the snapshot.
    #[error("variable '{from}' aliases unknown variable id '{id}'")]
    UnresolvedAlias { from: String, id: String },

    /// A kind-narrowed accessor met a value of a different kind.
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A subscriber rejected a mode change. Subscribers registered after the
    /// failing one were not notified; the mode itself stays set.
    #[error("mode change rejected: {0}")]
    Subscriber(#[from] SubscriberError),

    /// The snapshot payload could not be decoded.
    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] figvar_snapshot::SnapshotError),
}

/// Error returned by a mode-change subscriber.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SubscriberError {
    /// Human-readable error message
    pub message: String,
    /// The underlying error source, if any
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl SubscriberError {
    /// Creates a subscriber error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Sets the source error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        self.source = Some(source.into());
        self
    }
}

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;
