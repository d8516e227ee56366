//! Sessions: one independently constructed resolution world per snapshot.

use std::fmt;
use std::rc::Rc;

use figvar_snapshot::Snapshot;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::registry::HandleRegistry;
use crate::store::ModeStore;
use crate::variable::Variable;

struct SessionInner {
    snapshot: Snapshot,
    registry: HandleRegistry,
    store: ModeStore,
}

/// A resolution world over one snapshot: the handle registry, the mode state,
/// and the subscriber lists.
///
/// Sessions are cheap to clone; clones share the same world. Two sessions
/// constructed separately never observe each other, even within one process,
/// which keeps tests and embedders isolated without any global state. The
/// whole runtime is single-threaded; a `Session` is neither `Send` nor
/// `Sync`.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    /// Creates a session over a decoded snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Session {
            inner: Rc::new(SessionInner {
                snapshot,
                registry: HandleRegistry::new(),
                store: ModeStore::new(),
            }),
        }
    }

    /// Creates a session straight from snapshot JSON (bare or enveloped).
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(Self::new(Snapshot::from_json(input)?))
    }

    /// The raw records this session resolves over.
    pub fn snapshot(&self) -> &Snapshot {
        &self.inner.snapshot
    }

    /// Looks up a collection by display name.
    pub fn collection(&self, name: &str) -> Result<Collection> {
        let record = self
            .inner
            .snapshot
            .collection_named(name)
            .ok_or_else(|| Error::CollectionNotFound(name.to_string()))?;
        let core = self.inner.registry.collection(&record.id, || record.clone());
        Ok(Collection::new(self.clone(), core))
    }

    /// Looks up a collection by display name and selects a mode on it.
    pub fn collection_with_mode(&self, name: &str, mode: &str) -> Result<Collection> {
        let collection = self.collection(name)?;
        collection.mode(mode)?;
        Ok(collection)
    }

    /// Looks up a variable by display name, across all collections.
    pub fn variable(&self, name: &str) -> Result<Variable> {
        let record = self
            .inner
            .snapshot
            .variable_named(name)
            .ok_or_else(|| Error::VariableNotFound(name.to_string()))?;
        let core = self.inner.registry.variable(&record.id, || record.clone());
        Ok(Variable::new(self.clone(), core))
    }

    /// Looks up a variable by display name and selects a mode on its owning
    /// collection.
    pub fn variable_with_mode(&self, name: &str, mode: &str) -> Result<Variable> {
        let variable = self.variable(name)?;
        variable.mode(mode)?;
        Ok(variable)
    }

    /// Returns a scope whose lookups select the given mode as they go.
    ///
    /// ```rust
    /// # let data = r#"{
    /// #     "variableCollections": {
    /// #         "c1": {
    /// #             "id": "c1", "name": "density", "defaultModeId": "5:0",
    /// #             "modes": [
    /// #                 { "modeId": "5:0", "name": "Cozy" },
    /// #                 { "modeId": "5:1", "name": "Compact" }
    /// #             ],
    /// #             "variableIds": ["v1"]
    /// #         }
    /// #     },
    /// #     "variables": {
    /// #         "v1": {
    /// #             "id": "v1", "name": "pad", "variableCollectionId": "c1",
    /// #             "resolvedType": "FLOAT",
    /// #             "valuesByMode": { "5:0": 12, "5:1": 8 }
    /// #         }
    /// #     }
    /// # }"#;
    /// # let session = figvar::Session::from_json(data).unwrap();
    /// let pad = session.mode("Compact").variable("pad").unwrap();
    /// assert_eq!(pad.float_value().unwrap(), 8.0);
    /// ```
    pub fn mode(&self, name: &str) -> ModeScope {
        ModeScope {
            session: self.clone(),
            mode: name.to_string(),
        }
    }

    pub(crate) fn store(&self) -> &ModeStore {
        &self.inner.store
    }

    pub(crate) fn collection_by_id(&self, id: &str) -> Option<Collection> {
        let record = self.inner.snapshot.collection(id)?;
        let core = self.inner.registry.collection(id, || record.clone());
        Some(Collection::new(self.clone(), core))
    }

    pub(crate) fn variable_by_id(&self, id: &str) -> Option<Variable> {
        let record = self.inner.snapshot.variable(id)?;
        let core = self.inner.registry.variable(id, || record.clone());
        Some(Variable::new(self.clone(), core))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("collections", &self.inner.snapshot.collection_count())
            .field("variables", &self.inner.snapshot.variable_count())
            .field(
                "handles",
                &(self.inner.registry.collection_count()
                    + self.inner.registry.variable_count()),
            )
            .finish()
    }
}

/// A lookup scope that pins one mode name.
///
/// Each lookup selects the pinned mode on the collection it lands on (the
/// collection itself, or a variable's owning collection), then hands the
/// handle back. The selection is a real mode change: it persists in the
/// session and notifies subscribers.
#[derive(Clone, Debug)]
pub struct ModeScope {
    session: Session,
    mode: String,
}

impl ModeScope {
    /// The pinned mode name.
    pub fn name(&self) -> &str {
        &self.mode
    }

    /// Looks up a collection and selects the pinned mode on it.
    pub fn collection(&self, name: &str) -> Result<Collection> {
        self.session.collection_with_mode(name, &self.mode)
    }

    /// Looks up a variable and selects the pinned mode on its owning
    /// collection.
    pub fn variable(&self, name: &str) -> Result<Variable> {
        self.session.variable_with_mode(name, &self.mode)
    }
}
