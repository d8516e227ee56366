//! The immutable snapshot: every variable and collection of one export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError};
use crate::records::{CollectionRecord, VariableRecord};

/// Everything the design tool exported for one file: variables and the
/// collections that group them, both keyed by id.
///
/// A snapshot is never mutated after decoding; the resolution layer treats it
/// as a read-only dataset for the lifetime of a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub variables: HashMap<String, VariableRecord>,
    #[serde(default, rename = "variableCollections")]
    pub collections: HashMap<String, CollectionRecord>,
}

/// The HTTP envelope the local-variables endpoint wraps its payload in.
#[derive(Deserialize)]
struct Envelope {
    meta: Snapshot,
}

impl Snapshot {
    /// Decodes a snapshot from JSON text.
    ///
    /// Accepts either the bare two-map object or the endpoint's envelope
    /// (`{ "status": ..., "error": ..., "meta": { ... } }`).
    pub fn from_json(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Decodes a snapshot from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if value.get("meta").is_some() {
            let envelope: Envelope = serde_json::from_value(value)?;
            return Ok(envelope.meta);
        }
        if value.get("variables").is_some() || value.get("variableCollections").is_some() {
            return Ok(serde_json::from_value(value)?);
        }
        Err(SnapshotError::MissingPayload)
    }

    /// Looks up a collection record by id.
    pub fn collection(&self, id: &str) -> Option<&CollectionRecord> {
        self.collections.get(id)
    }

    /// Looks up a variable record by id.
    pub fn variable(&self, id: &str) -> Option<&VariableRecord> {
        self.variables.get(id)
    }

    /// Finds a collection record by display name.
    ///
    /// The design tool only keeps names unique within their scope, so one
    /// payload can carry the same name twice. Ties go to the lexicographically
    /// smallest id, independent of map iteration order.
    pub fn collection_named(&self, name: &str) -> Option<&CollectionRecord> {
        self.collections
            .values()
            .filter(|c| c.name == name)
            .min_by(|a, b| a.id.cmp(&b.id))
    }

    /// Finds a variable record by display name. Ties go to the
    /// lexicographically smallest id, as in
    /// [`collection_named`](Self::collection_named).
    pub fn variable_named(&self, name: &str) -> Option<&VariableRecord> {
        self.variables
            .values()
            .filter(|v| v.name == name)
            .min_by(|a, b| a.id.cmp(&b.id))
    }

    /// Number of collections in the snapshot.
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    /// Number of variables in the snapshot.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if the snapshot holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.collections.is_empty()
    }
}
