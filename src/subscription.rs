use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

new_key_type! {
    pub(crate) struct SubscriberKey;
}

/// Callbacks registered on an observer or resolver.
///
/// Emission works from a snapshot so callbacks may subscribe or unsubscribe
/// while being notified. A callback removed during a pass is skipped for the
/// rest of that pass.
pub(crate) struct Subscribers<F: ?Sized> {
    slots: RefCell<SlotMap<SubscriberKey, Rc<F>>>,
}

impl<F: ?Sized> Default for Subscribers<F> {
    fn default() -> Self {
        Self {
            slots: RefCell::new(SlotMap::with_key()),
        }
    }
}

impl<F: ?Sized> Subscribers<F> {
    pub(crate) fn insert(&self, callback: Rc<F>) -> SubscriberKey {
        self.slots.borrow_mut().insert(callback)
    }

    pub(crate) fn remove(&self, key: SubscriberKey) -> bool {
        self.slots.borrow_mut().remove(key).is_some()
    }

    pub(crate) fn clear(&self) {
        self.slots.borrow_mut().clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Calls `f` for every callback still registered when its turn comes.
    pub(crate) fn for_each(&self, mut f: impl FnMut(&F)) {
        let snapshot: SmallVec<[(SubscriberKey, Rc<F>); 4]> = self
            .slots
            .borrow()
            .iter()
            .map(|(key, callback)| (key, callback.clone()))
            .collect();

        for (key, callback) in snapshot {
            if self.slots.borrow().contains_key(key) {
                f(&callback);
            }
        }
    }
}

/// Handle returned by `subscribe`-style registrations.
///
/// [`unsubscribe`](Subscription::unsubscribe) removes the registration
/// synchronously and is a no-op when called again. Dropping a plain
/// subscription keeps the callback registered; call
/// [`scoped`](Subscription::scoped) to tie the registration to the handle's
/// lifetime instead.
#[must_use = "dropping a Subscription leaves the callback registered; call `unsubscribe` or `scoped`"]
pub struct Subscription {
    release: Cell<Option<Box<dyn FnOnce()>>>,
    scoped: bool,
}

impl Subscription {
    pub(crate) fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Cell::new(Some(Box::new(release))),
            scoped: false,
        }
    }

    /// Unsubscribes when this handle is dropped.
    pub fn scoped(mut self) -> Self {
        self.scoped = true;
        self
    }

    pub fn unsubscribe(&self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Whether [`unsubscribe`](Subscription::unsubscribe) has already run.
    pub fn is_released(&self) -> bool {
        let release = self.release.take();
        let released = release.is_none();
        self.release.set(release);
        released
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.scoped {
            self.unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("released", &self.is_released())
            .field("scoped", &self.scoped)
            .finish()
    }
}
