//! Listener registry
//!
//! Listeners are zero-argument callbacks notified after every dispatch. They
//! receive no payload and re-query [`Store::get_state`](crate::Store::get_state)
//! to react.
//!
//! Each call to `subscribe` creates one subscription with its own identity, and
//! the returned [`Unsubscribe`] handle removes exactly that subscription.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A registered listener callback
pub type Listener = Rc<dyn Fn()>;

/// Listeners captured for one notification pass
pub(crate) type ListenerSnapshot = SmallVec<[Listener; 4]>;

/// Identity of one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered collection of listeners, in subscription order
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl ListenerRegistry {
    pub(crate) fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Removes a subscription; removing an absent one is a no-op
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copies the current listeners so they can be called without holding the registry
    pub(crate) fn snapshot(&self) -> ListenerSnapshot {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Dropping the handle does *not* unsubscribe; call
/// [`unsubscribe`](Unsubscribe::unsubscribe) explicitly.
pub struct Unsubscribe {
    registry: Weak<RefCell<ListenerRegistry>>,
    id: ListenerId,
    store: String,
}

impl Unsubscribe {
    pub(crate) fn new(registry: &Rc<RefCell<ListenerRegistry>>, id: ListenerId, store: &str) -> Self {
        Self {
            registry: Rc::downgrade(registry),
            id,
            store: store.to_string(),
        }
    }

    /// The identity of the subscription this handle removes
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Name of the store the subscription belongs to
    #[must_use]
    pub fn store_name(&self) -> &str {
        &self.store
    }

    /// Removes the subscription from the store
    ///
    /// Safe to call any number of times, from inside a listener, or after the
    /// store has been dropped; every call after the first is a no-op.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        let removed = registry.borrow_mut().remove(self.id);
        if removed {
            tracing::debug!(store = %self.store, listener = ?self.id, "Listener unsubscribed");
            #[allow(clippy::cast_precision_loss)]
            metrics::gauge!("store.listeners", "store" => self.store.clone())
                .set(registry.borrow().len() as f64);
        }
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("store", &self.store)
            .field("id", &self.id)
            .finish()
    }
}
