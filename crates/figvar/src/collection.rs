//! Collection handles: mode selection, member lookup, subscriptions.

use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result, SubscriberError};
use crate::registry::CollectionCore;
use crate::session::Session;
use crate::store::SubscriptionId;
use crate::variable::Variable;

/// An identity-stable handle for one collection of variables.
///
/// Every lookup of the same collection id within a session yields a handle
/// backed by the same shared core, so mode state selected through one handle
/// is visible through all of them. Cloning a handle is cheap and preserves
/// identity.
#[derive(Clone)]
pub struct Collection {
    session: Session,
    core: Rc<CollectionCore>,
}

impl Collection {
    pub(crate) fn new(session: Session, core: Rc<CollectionCore>) -> Self {
        Collection { session, core }
    }

    /// The collection's id in the snapshot.
    pub fn id(&self) -> &str {
        &self.core.record.id
    }

    /// The collection's display name.
    pub fn name(&self) -> &str {
        &self.core.record.name
    }

    /// Session-unique identity counter. Two handles for the same collection
    /// always report the same uid.
    pub fn uid(&self) -> u64 {
        self.core.uid
    }

    /// The mode id resolution falls back to when nothing is selected.
    pub fn default_mode_id(&self) -> &str {
        &self.core.record.default_mode_id
    }

    /// Declared mode names, in declaration order.
    pub fn mode_names(&self) -> Vec<&str> {
        self.core
            .record
            .modes
            .iter()
            .map(|m| m.name.as_str())
            .collect()
    }

    /// The currently selected mode name, if one has been selected. This is
    /// the raw selection; an undeclared name is reported as-is even though
    /// resolution falls back to the default mode.
    pub fn active_mode(&self) -> Option<String> {
        self.session.store().active(self.id())
    }

    /// The mode id members resolve through right now: the selected mode's id,
    /// or the default mode id when nothing (or an undeclared name) is
    /// selected.
    pub fn mode_id(&self) -> &str {
        self.session.store().mode_id_for(&self.core.record)
    }

    /// Selects a mode by name and notifies this collection's subscribers.
    ///
    /// Returns `&self` so selection chains into a lookup. Selecting a name
    /// the collection does not declare is not an error; members simply keep
    /// resolving through the default mode.
    ///
    /// The selection is recorded before subscribers run. If one of them
    /// returns an error, later subscribers are skipped, the error surfaces
    /// here, and the new mode stays selected.
    pub fn mode(&self, name: &str) -> Result<&Self> {
        let store = self.session.store();
        store.set(self.id(), name);
        store.notify(self.id(), name)?;
        Ok(self)
    }

    /// Looks up a member variable by display name.
    pub fn variable(&self, name: &str) -> Result<Variable> {
        let snapshot = self.session.snapshot();
        for id in &self.core.record.variable_ids {
            if let Some(record) = snapshot.variable(id) {
                if record.name == name {
                    return self
                        .session
                        .variable_by_id(id)
                        .ok_or_else(|| Error::VariableNotFound(name.to_string()));
                }
            }
        }
        Err(Error::VariableNotFound(name.to_string()))
    }

    /// All member variables, in declaration order. Declared ids without a
    /// backing record are skipped.
    pub fn variables(&self) -> Vec<Variable> {
        self.core
            .record
            .variable_ids
            .iter()
            .filter_map(|id| self.session.variable_by_id(id))
            .collect()
    }

    /// Registers a subscriber invoked on every [`mode`](Self::mode) call for
    /// this collection, in registration order, with the new mode name.
    ///
    /// Returns a token for [`unsubscribe`](Self::unsubscribe). Subscribers
    /// may read modes, resolve variables, or (un)subscribe from inside the
    /// callback.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) -> std::result::Result<(), SubscriberError> + 'static,
    {
        self.session.store().subscribe(self.id(), Rc::new(callback))
    }

    /// Removes a subscription. Returns true if the token was still
    /// registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.session.store().unsubscribe(id)
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Collection {}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("uid", &self.uid())
            .finish()
    }
}
