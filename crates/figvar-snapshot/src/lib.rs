//! Data model for snapshots of a design file's local variables.
//!
//! A snapshot is the JSON a design tool exports for one file: a map of
//! variables, a map of the collections that group them, and for every
//! variable one value slot per mode of its collection. Slots hold either a
//! kind-typed literal (boolean, string, float, color) or an alias pointing at
//! another variable.
//!
//! This crate only models and decodes that payload. Resolving values through
//! modes and alias chains is the job of the `figvar` crate; fetching the
//! payload from the network is outside both.
//!
//! # Quick Start
//!
//! ```rust
//! use figvar_snapshot::Snapshot;
//!
//! let data = r#"{
//!     "variableCollections": {
//!         "VariableCollectionId:1:100": {
//!             "id": "VariableCollectionId:1:100",
//!             "name": "theme",
//!             "defaultModeId": "1:0",
//!             "modes": [
//!                 { "modeId": "1:0", "name": "Light" },
//!                 { "modeId": "1:1", "name": "Dark" }
//!             ],
//!             "variableIds": ["VariableID:2:10"]
//!         }
//!     },
//!     "variables": {
//!         "VariableID:2:10": {
//!             "id": "VariableID:2:10",
//!             "name": "brand-name",
//!             "variableCollectionId": "VariableCollectionId:1:100",
//!             "resolvedType": "STRING",
//!             "valuesByMode": { "1:0": "FigMayo", "1:1": "Other" }
//!         }
//!     }
//! }"#;
//!
//! let snapshot = Snapshot::from_json(data).unwrap();
//! let theme = snapshot.collection_named("theme").unwrap();
//! assert_eq!(theme.modes.len(), 2);
//! assert_eq!(snapshot.variable_count(), 1);
//! ```
//!
//! [`Snapshot::from_json`] also accepts the HTTP envelope the endpoint
//! returns (`{ "status": ..., "error": ..., "meta": { ... } }`), so a fetched
//! response body can be handed over without unwrapping it first.

mod error;
mod records;
mod snapshot;

pub use error::{Result, SnapshotError};
pub use records::{
    AliasRef, AliasTag, CollectionRecord, ModeRecord, Rgba, ValueSlot, VariableKind,
    VariableRecord,
};
pub use snapshot::Snapshot;
