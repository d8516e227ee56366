//! Per-collection mode state and mode-change subscriptions.
//!
//! The store keys everything by collection id. A selected mode is a display
//! *name* ("Dark"), not a mode id; mapping a name to the collection's mode id
//! happens at read time through [`ModeStore::mode_id_for`], which falls back
//! to the collection's default mode when nothing is selected or the selected
//! name is not declared. Selecting an undeclared name is deliberately not an
//! error.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use figvar_snapshot::CollectionRecord;

use crate::error::SubscriberError;

/// Type alias for mode-change subscriber functions.
///
/// A subscriber receives the newly selected mode name and may reject the
/// change by returning an error, which surfaces to the `mode()` caller.
pub type SubscriberFn = Rc<dyn Fn(&str) -> Result<(), SubscriberError>>;

/// Token identifying one subscription, returned by `subscribe` and consumed
/// by `unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Session-owned mutable state: selected modes plus subscriber lists.
pub(crate) struct ModeStore {
    selected: RefCell<HashMap<String, String>>,
    subscribers: RefCell<HashMap<String, Vec<(SubscriptionId, SubscriberFn)>>>,
    next_token: Cell<u64>,
}

impl ModeStore {
    pub(crate) fn new() -> Self {
        ModeStore {
            selected: RefCell::new(HashMap::new()),
            subscribers: RefCell::new(HashMap::new()),
            next_token: Cell::new(0),
        }
    }

    /// The mode name currently selected for a collection, if any.
    pub(crate) fn active(&self, collection_id: &str) -> Option<String> {
        self.selected.borrow().get(collection_id).cloned()
    }

    /// Records a mode selection, overwriting any previous one. No validation
    /// against the collection's declared modes happens here.
    pub(crate) fn set(&self, collection_id: &str, mode: &str) {
        self.selected
            .borrow_mut()
            .insert(collection_id.to_string(), mode.to_string());
    }

    /// Maps the selection for `record`'s collection to a declared mode id,
    /// falling back to the default mode when nothing is selected or the
    /// selected name matches no declared mode.
    pub(crate) fn mode_id_for<'a>(&self, record: &'a CollectionRecord) -> &'a str {
        let selected = self.selected.borrow();
        match selected.get(record.id.as_str()) {
            Some(name) => record
                .modes
                .iter()
                .find(|m| m.name == *name)
                .map(|m| m.mode_id.as_str())
                .unwrap_or(record.default_mode_id.as_str()),
            None => record.default_mode_id.as_str(),
        }
    }

    /// Registers a subscriber for a collection's mode changes.
    pub(crate) fn subscribe(&self, collection_id: &str, callback: SubscriberFn) -> SubscriptionId {
        let token = SubscriptionId(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.subscribers
            .borrow_mut()
            .entry(collection_id.to_string())
            .or_default()
            .push((token, callback));
        token
    }

    /// Removes a subscription. Returns true if it was still registered.
    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        for list in subscribers.values_mut() {
            if let Some(pos) = list.iter().position(|(token, _)| *token == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Invokes a collection's subscribers in registration order, stopping at
    /// the first error.
    ///
    /// Callbacks are cloned out before running, so a subscriber may read
    /// state, resolve variables, or (un)subscribe without tripping a borrow.
    /// A subscriber added during notification is not invoked until the next
    /// mode change.
    pub(crate) fn notify(
        &self,
        collection_id: &str,
        mode: &str,
    ) -> Result<(), SubscriberError> {
        let callbacks: Vec<SubscriberFn> = match self.subscribers.borrow().get(collection_id) {
            Some(list) => list.iter().map(|(_, f)| Rc::clone(f)).collect(),
            None => return Ok(()),
        };
        for callback in callbacks {
            callback(mode)?;
        }
        Ok(())
    }

    pub(crate) fn subscriber_count(&self, collection_id: &str) -> usize {
        self.subscribers
            .borrow()
            .get(collection_id)
            .map_or(0, Vec::len)
    }
}

impl fmt::Debug for ModeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeStore")
            .field("selected_count", &self.selected.borrow().len())
            .field(
                "subscriber_count",
                &self
                    .subscribers
                    .borrow()
                    .values()
                    .map(Vec::len)
                    .sum::<usize>(),
            )
            .finish()
    }
}
