//! Store - Observable Mutable State
//!
//! One [`Store`] per UI domain holds the current state, merges partial
//! updates into it and broadcasts every change to its listeners.
//!
//! ```text
//! update(delta) → merge into state → snapshot listeners → call each, in order
//! ```
//!
//! # Invariants
//!
//! 1. After `update(delta)` returns, every field present in `delta` holds the
//!    delta's value; every other field is unchanged.
//! 2. Listeners are invoked synchronously, in registration order, once per
//!    `update`.
//! 3. The broadcast iterates a snapshot taken after the merge: listeners
//!    subscribed mid-broadcast first fire on the next `update`.
//! 4. A nested `update` issued by a listener completes its own broadcast
//!    before the outer broadcast moves on.
//! 5. No listener observes a half-merged state.

mod binder;
mod delta;
mod fields;

pub use binder::{Connected, Mounted, Rerender, connect};
pub(crate) use delta::state_delta;
pub use fields::Fields;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// A state type that can absorb a partial update.
pub trait Merge {
    /// Partial update: the subset of fields to overwrite.
    type Delta;

    /// Shallow merge: each field present in `delta` replaces the current value.
    fn merge(&mut self, delta: Self::Delta);
}

// ==================== Listener ====================

/// A zero-argument change callback with a stable identity.
///
/// Clones share identity with the original. Two listeners built separately
/// are never equal, even when they wrap the same function.
#[derive(Clone)]
pub struct Listener {
    callback: Rc<dyn Fn()>,
}

impl Listener {
    /// Wrap a callback
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invoke the callback
    pub fn call(&self) {
        (self.callback)()
    }

    /// Identity comparison
    pub fn same_as(&self, other: &Listener) -> bool {
        // Compare data addresses only; vtable pointers are not unique.
        std::ptr::eq(
            Rc::as_ptr(&self.callback) as *const (),
            Rc::as_ptr(&other.callback) as *const (),
        )
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&(Rc::as_ptr(&self.callback) as *const ()))
            .finish()
    }
}

// ==================== Store ====================

struct Inner<S> {
    name: &'static str,
    state: RefCell<S>,
    listeners: RefCell<Vec<Listener>>,
}

/// Shared handle to one store instance.
///
/// Cloning the handle does not clone the state: every clone reads and
/// updates the same instance. Pass clones to whatever needs the store.
pub struct Store<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Merge> Store<S> {
    /// Create a store holding `initial`
    pub fn new(name: &'static str, initial: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                name,
                state: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Store name, used in logs
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Merge `delta` into the state, then notify every listener.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a [`Store::with`] closure on the same
    /// store.
    pub fn update(&self, delta: S::Delta) {
        self.inner.state.borrow_mut().merge(delta);

        let snapshot: Vec<Listener> = self.inner.listeners.borrow().clone();
        debug!(
            store = self.inner.name,
            listeners = snapshot.len(),
            "Broadcasting state update"
        );

        for listener in &snapshot {
            listener.call();
        }
    }

    /// Register a listener. Duplicates are kept.
    pub fn subscribe(&self, listener: &Listener) {
        let mut listeners = self.inner.listeners.borrow_mut();
        listeners.push(listener.clone());
        trace!(store = self.inner.name, count = listeners.len(), "Listener subscribed");
    }

    /// Remove every registration of `listener`. No-op if absent.
    pub fn unsubscribe(&self, listener: &Listener) {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|l| !l.same_as(listener));
        trace!(
            store = self.inner.name,
            removed = before - listeners.len(),
            count = listeners.len(),
            "Listener unsubscribed"
        );
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Read the current state.
    ///
    /// # Panics
    ///
    /// Panics if `f` calls [`Store::update`] on this store.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.inner.state.borrow().clone()
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.inner.name)
            .field("state", &self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Listener) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = Rc::clone(&log);
            move |tag: &'static str| {
                let log = Rc::clone(&log);
                Listener::new(move || log.borrow_mut().push(tag))
            }
        };
        (log, make)
    }

    #[test]
    fn update_merges_shallowly() {
        let store = Store::new("test", Fields::new());
        store.update(Fields::new().with("a", 1).with("b", 2));
        assert_eq!(store.with(|s| s.get("a").cloned()), Some(json!(1)));
        assert_eq!(store.with(|s| s.get("b").cloned()), Some(json!(2)));

        store.update(Fields::new().with("b", 3));
        assert_eq!(store.snapshot(), Fields::new().with("a", 1).with("b", 3));
    }

    #[test]
    fn listeners_fire_once_in_order() {
        let store = Store::new("test", Fields::new());
        let (log, make) = recorder();
        let f = make("f");
        let g = make("g");
        store.subscribe(&f);
        store.subscribe(&g);

        store.update(Fields::new().with("x", 1));
        assert_eq!(*log.borrow(), vec!["f", "g"]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let store = Store::new("test", Fields::new());
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let f = Listener::new(move || c.set(c.get() + 1));

        store.subscribe(&f);
        store.unsubscribe(&f);
        store.update(Fields::new().with("x", 1));
        assert_eq!(calls.get(), 0);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn unsubscribe_unknown_listener_is_noop() {
        let store = Store::new("test", Fields::new());
        let kept = Listener::new(|| {});
        store.subscribe(&kept);

        store.unsubscribe(&Listener::new(|| {}));
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn duplicates_are_kept_and_removed_together() {
        let store = Store::new("test", Fields::new());
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let f = Listener::new(move || c.set(c.get() + 1));

        store.subscribe(&f);
        store.subscribe(&f);
        store.update(Fields::new());
        assert_eq!(calls.get(), 2);

        store.unsubscribe(&f);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn listener_identity() {
        let a = Listener::new(|| {});
        let b = Listener::new(|| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn subscribe_during_broadcast_waits_for_next_update() {
        let store = Store::new("test", Fields::new());
        let late_calls = Rc::new(Cell::new(0));

        let late = {
            let c = Rc::clone(&late_calls);
            Listener::new(move || c.set(c.get() + 1))
        };
        let adder = {
            let store = store.clone();
            let late = late.clone();
            let added = Cell::new(false);
            Listener::new(move || {
                if !added.replace(true) {
                    store.subscribe(&late);
                }
            })
        };
        store.subscribe(&adder);

        store.update(Fields::new().with("x", 1));
        assert_eq!(late_calls.get(), 0);
        assert_eq!(store.listener_count(), 2);

        store.update(Fields::new().with("x", 2));
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn reentrant_update_completes_before_outer_broadcast_resumes() {
        let store = Store::new("test", Fields::new());
        let (log, make) = recorder();

        let l1 = {
            let store = store.clone();
            let log = Rc::clone(&log);
            Listener::new(move || {
                log.borrow_mut().push("l1");
                let nested = store.with(|s| s.get("nested").is_some());
                if !nested {
                    store.update(Fields::new().with("nested", true));
                }
            })
        };
        let l2 = make("l2");
        store.subscribe(&l1);
        store.subscribe(&l2);

        store.update(Fields::new().with("x", 1));
        // outer l1 → nested l1, nested l2 → outer l2
        assert_eq!(*log.borrow(), vec!["l1", "l1", "l2", "l2"]);
    }

    #[test]
    fn listener_sees_fully_merged_state() {
        let store = Store::new("test", Fields::new());
        let seen = Rc::new(RefCell::new(None));
        let l = {
            let store = store.clone();
            let seen = Rc::clone(&seen);
            Listener::new(move || *seen.borrow_mut() = Some(store.snapshot()))
        };
        store.subscribe(&l);

        store.update(Fields::new().with("a", 1).with("b", "two"));
        assert_eq!(
            *seen.borrow(),
            Some(Fields::new().with("a", 1).with("b", "two"))
        );
    }

    #[test]
    fn unsubscribe_during_broadcast_still_finishes_snapshot() {
        let store = Store::new("test", Fields::new());
        let (log, make) = recorder();
        let l2 = make("l2");
        let l1 = {
            let store = store.clone();
            let l2 = l2.clone();
            let log = Rc::clone(&log);
            Listener::new(move || {
                log.borrow_mut().push("l1");
                store.unsubscribe(&l2);
            })
        };
        store.subscribe(&l1);
        store.subscribe(&l2);

        store.update(Fields::new());
        assert_eq!(*log.borrow(), vec!["l1", "l2"]);

        store.update(Fields::new());
        assert_eq!(*log.borrow(), vec!["l1", "l2", "l1"]);
    }

    #[test]
    fn clones_share_one_instance() {
        let store = Store::new("test", Fields::new());
        let other = store.clone();
        other.update(Fields::new().with("k", "v"));
        assert_eq!(store.with(|s| s.get("k").cloned()), Some(json!("v")));
    }
}
