//! Binder - Store Subscriptions Tied to a Unit's Lifecycle
//!
//! Wraps a renderable unit so that it listens to one store exactly while it
//! is mounted.
//!
//! ```text
//! connect(unit, &store) ──mount()──▶ Mounted ──unmount()/drop──▶ Connected
//!        (inactive)                  (active)                    (inactive)
//! ```
//!
//! Each mount creates one fresh [`Listener`]; unmounting (or dropping the
//! [`Mounted`] handle) removes that same listener. A unit that is not mounted
//! is never in the store's listener list.

use std::fmt;
use std::rc::Rc;

use super::{Listener, Merge, Store};

/// Rendering-layer hook for a unit that can redraw itself.
///
/// Called with no payload: the unit re-reads whatever store fields it needs.
pub trait Rerender {
    fn rerender(&self);
}

/// Wrap `unit` for binding to `store`. The result starts unmounted.
pub fn connect<U, S>(unit: U, store: &Store<S>) -> Connected<U, S>
where
    U: Rerender + 'static,
    S: Merge,
{
    Connected {
        unit: Rc::new(unit),
        store: store.clone(),
    }
}

/// A bound unit in the inactive state
pub struct Connected<U, S> {
    unit: Rc<U>,
    store: Store<S>,
}

impl<U, S> Connected<U, S>
where
    U: Rerender + 'static,
    S: Merge,
{
    /// The wrapped unit
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Activate: subscribe a new listener that re-renders the unit
    pub fn mount(self) -> Mounted<U, S> {
        let weak = Rc::downgrade(&self.unit);
        let listener = Listener::new(move || {
            if let Some(unit) = weak.upgrade() {
                unit.rerender();
            }
        });
        self.store.subscribe(&listener);

        Mounted {
            unit: self.unit,
            store: self.store,
            listener,
        }
    }
}

impl<U, S> fmt::Debug for Connected<U, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connected")
            .field("store", &self.store.inner.name)
            .finish()
    }
}

/// A bound unit in the active state.
///
/// Holds the unit's one listener registration until unmounted or dropped.
pub struct Mounted<U, S: Merge> {
    unit: Rc<U>,
    store: Store<S>,
    listener: Listener,
}

impl<U, S> Mounted<U, S>
where
    U: Rerender + 'static,
    S: Merge,
{
    /// The wrapped unit
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// The listener registered for this mount
    pub fn listener(&self) -> &Listener {
        &self.listener
    }

    /// Deactivate. Mounting the result again registers a new listener.
    pub fn unmount(self) -> Connected<U, S> {
        Connected {
            unit: Rc::clone(&self.unit),
            store: self.store.clone(),
        }
        // `self` drops here and unsubscribes
    }
}

impl<U, S: Merge> Drop for Mounted<U, S> {
    fn drop(&mut self) {
        self.store.unsubscribe(&self.listener);
    }
}

impl<U, S: Merge> fmt::Debug for Mounted<U, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mounted")
            .field("store", &self.store.name())
            .field("listener", &self.listener)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Fields;
    use std::cell::{Cell, RefCell};

    /// Renders the `title` field into a string on every notification.
    struct TitleView {
        store: Store<Fields>,
        text: RefCell<String>,
        renders: Cell<usize>,
    }

    impl TitleView {
        fn new(store: &Store<Fields>) -> Self {
            Self {
                store: store.clone(),
                text: RefCell::new(String::new()),
                renders: Cell::new(0),
            }
        }
    }

    impl Rerender for TitleView {
        fn rerender(&self) {
            let title = self.store.with(|s| {
                s.get("title")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string()
            });
            *self.text.borrow_mut() = title;
            self.renders.set(self.renders.get() + 1);
        }
    }

    #[test]
    fn mounted_unit_rerenders_from_store() {
        let store = Store::new("ui", Fields::new());
        let view = connect(TitleView::new(&store), &store).mount();

        store.update(Fields::new().with("title", "Mocks"));
        assert_eq!(view.unit().renders.get(), 1);
        assert_eq!(*view.unit().text.borrow(), "Mocks");
    }

    #[test]
    fn connected_unit_is_not_subscribed() {
        let store = Store::new("ui", Fields::new());
        let view = connect(TitleView::new(&store), &store);

        store.update(Fields::new().with("title", "x"));
        assert_eq!(store.listener_count(), 0);
        assert_eq!(view.unit().renders.get(), 0);
    }

    #[test]
    fn mount_then_unmount_restores_listener_count() {
        let store = Store::new("ui", Fields::new());
        let other = connect(TitleView::new(&store), &store).mount();
        let before = store.listener_count();

        let view = connect(TitleView::new(&store), &store).mount();
        assert_eq!(store.listener_count(), before + 1);

        let view = view.unmount();
        assert_eq!(store.listener_count(), before);

        store.update(Fields::new().with("title", "after"));
        assert_eq!(view.unit().renders.get(), 0);
        assert_eq!(other.unit().renders.get(), 1);
    }

    #[test]
    fn dropping_mounted_unsubscribes() {
        let store = Store::new("ui", Fields::new());
        {
            let _view = connect(TitleView::new(&store), &store).mount();
            assert_eq!(store.listener_count(), 1);
        }
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn remount_uses_new_listener_identity() {
        let store = Store::new("ui", Fields::new());
        let mounted = connect(TitleView::new(&store), &store).mount();
        let first = mounted.listener().clone();

        let mounted = mounted.unmount().mount();
        assert_ne!(&first, mounted.listener());
        assert_eq!(store.listener_count(), 1);

        // Stale identity no longer matches anything.
        store.unsubscribe(&first);
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn unit_that_stays_mounted_keeps_one_registration() {
        let store = Store::new("ui", Fields::new());
        let view = connect(TitleView::new(&store), &store).mount();
        for i in 0..3 {
            store.update(Fields::new().with("n", i));
        }
        assert_eq!(store.listener_count(), 1);
        assert_eq!(view.unit().renders.get(), 3);
    }
}
