//! Identity registry: one shared handle core per record id.
//!
//! Handles returned from repeated lookups of the same id must be
//! interchangeable, so the registry hands out `Rc`-shared cores, constructing
//! each core exactly once per session. Cores are never evicted; a session
//! holds at most one core per record for its whole lifetime.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use figvar_snapshot::{CollectionRecord, VariableRecord};

/// Shared state behind every [`crate::Collection`] handle with the same id.
pub(crate) struct CollectionCore {
    /// Session-unique identity counter, assigned on first access.
    pub(crate) uid: u64,
    pub(crate) record: CollectionRecord,
}

/// Shared state behind every [`crate::Variable`] handle with the same id.
pub(crate) struct VariableCore {
    pub(crate) uid: u64,
    pub(crate) record: VariableRecord,
}

pub(crate) struct HandleRegistry {
    collections: RefCell<HashMap<String, Rc<CollectionCore>>>,
    variables: RefCell<HashMap<String, Rc<VariableCore>>>,
    next_uid: Cell<u64>,
}

impl HandleRegistry {
    pub(crate) fn new() -> Self {
        HandleRegistry {
            collections: RefCell::new(HashMap::new()),
            variables: RefCell::new(HashMap::new()),
            next_uid: Cell::new(0),
        }
    }

    /// Returns the core for a collection id, constructing it from `record` on
    /// first access.
    pub(crate) fn collection(
        &self,
        id: &str,
        record: impl FnOnce() -> CollectionRecord,
    ) -> Rc<CollectionCore> {
        if let Some(core) = self.collections.borrow().get(id) {
            return Rc::clone(core);
        }
        let core = Rc::new(CollectionCore {
            uid: self.allocate_uid(),
            record: record(),
        });
        self.collections
            .borrow_mut()
            .insert(id.to_string(), Rc::clone(&core));
        core
    }

    /// Returns the core for a variable id, constructing it from `record` on
    /// first access.
    pub(crate) fn variable(
        &self,
        id: &str,
        record: impl FnOnce() -> VariableRecord,
    ) -> Rc<VariableCore> {
        if let Some(core) = self.variables.borrow().get(id) {
            return Rc::clone(core);
        }
        let core = Rc::new(VariableCore {
            uid: self.allocate_uid(),
            record: record(),
        });
        self.variables
            .borrow_mut()
            .insert(id.to_string(), Rc::clone(&core));
        core
    }

    pub(crate) fn collection_count(&self) -> usize {
        self.collections.borrow().len()
    }

    pub(crate) fn variable_count(&self) -> usize {
        self.variables.borrow().len()
    }

    fn allocate_uid(&self) -> u64 {
        let uid = self.next_uid.get();
        self.next_uid.set(uid + 1);
        uid
    }
}
