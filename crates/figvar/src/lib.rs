//! Runtime resolution for a design file's local variables.
//!
//! A snapshot (see `figvar-snapshot`) groups named, typed variables into
//! collections, and every collection declares a set of mutually exclusive
//! modes ("Light"/"Dark", "Cozy"/"Compact"). figvar answers one question:
//! *given the modes selected right now, what is the concrete value of this
//! variable?* It handles:
//!
//! - Identity-stable handles: looking the same variable or collection up
//!   twice yields interchangeable handles sharing one identity and one mode
//!   state
//! - Per-collection mode selection with a default-mode fallback
//! - Alias chains, where a value slot points at another variable that
//!   resolves under its *own* collection's current mode, possibly several
//!   hops deep, with cycle detection instead of unbounded recursion
//! - Kind-aware reads and CSS-ready formatting (`px`, `rgba()`, hex)
//! - Subscriptions, so dependent consumers hear about mode changes
//!
//! # Quick Start
//!
//! ```rust
//! use figvar::Session;
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
//! let session = Session::from_json(data).unwrap();
//!
//! // Resolution follows the collection's default mode until one is selected.
//! let brand = session.variable("brand-name").unwrap();
//! assert_eq!(brand.string_value().unwrap(), "FigMayo");
//!
//! // Selecting a mode changes what every handle resolves to from now on.
//! session.collection("theme").unwrap().mode("Dark").unwrap();
//! assert_eq!(brand.string_value().unwrap(), "Other");
//! ```
//!
//! # Reacting to mode changes
//!
//! Collections deliver mode changes to subscribers synchronously, in
//! registration order. A subscriber can reject a change by returning an
//! error, which stops later subscribers and surfaces to the `mode()` caller;
//! the selection itself stays in place either way.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! # let data = r#"{
//! #     "variableCollections": {
//! #         "c1": {
//! #             "id": "c1", "name": "theme", "defaultModeId": "1:0",
//! #             "modes": [
//! #                 { "modeId": "1:0", "name": "Light" },
//! #                 { "modeId": "1:1", "name": "Dark" }
//! #             ],
//! #             "variableIds": []
//! #         }
//! #     },
//! #     "variables": {}
//! # }"#;
//! # let session = figvar::Session::from_json(data).unwrap();
//!
//! let theme = session.collection("theme").unwrap();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let log = Rc::clone(&seen);
//! let token = theme.subscribe(move |mode| {
//!     log.borrow_mut().push(mode.to_string());
//!     Ok(())
//! });
//!
//! theme.mode("Dark").unwrap();
//! assert_eq!(seen.borrow().as_slice(), ["Dark"]);
//!
//! theme.unsubscribe(token);
//! ```
//!
//! # Sessions, not globals
//!
//! All mutable state (selected modes, subscribers, handle identity) belongs
//! to a [`Session`]. Construct one per snapshot; clone it freely (clones
//! share the world); construct two to get two fully isolated worlds. Nothing
//! here touches process-global state, the network, or the filesystem.

mod collection;
mod error;
pub mod format;
mod registry;
mod session;
mod store;
mod value;
mod variable;

pub use collection::Collection;
pub use error::{Error, Result, SubscriberError};
pub use session::{ModeScope, Session};
pub use store::{SubscriberFn, SubscriptionId};
pub use value::Value;
pub use variable::Variable;

// The record types users meet through the public API.
pub use figvar_snapshot::{Rgba, Snapshot, VariableKind};
