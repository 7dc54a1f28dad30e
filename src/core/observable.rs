//! Synchronous observer registry.
//!
//! [`Subject`] holds the latest value of some piece of shared state and pushes
//! every new value to its listeners, in registration order, before `next`
//! returns. A new listener receives the current value as soon as it subscribes.
//! The repository publishes collection snapshots through one, the view
//! coordinator publishes view states through another.
//!
//! Everything here is single-threaded (`Rc` + `RefCell`).

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
    next_id: Cell<u64>,
}

pub struct Subject<T> {
    registry: Rc<Registry<T>>,
}

impl<T: Clone + 'static> Subject<T> {
    pub fn new(initial: T) -> Self {
        Self {
            registry: Rc::new(Registry {
                value: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Latest published value
    pub fn value(&self) -> T {
        self.registry.value.borrow().clone()
    }

    /// Run `f` against the latest value without cloning it
    pub fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.registry.value.borrow())
    }

    /// Register `listener` and deliver the current value to it right away.
    ///
    /// The listener stays registered for as long as the returned
    /// [`Subscription`] is alive.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
    where
        F: FnMut(&T) + 'static,
    {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);

        let listener: Listener<T> = Rc::new(RefCell::new(listener));
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Rc::clone(&listener)));

        let current = self.value();
        deliver(id, &listener, &current);

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Store `value` and deliver it to every registered listener
    pub fn next(&self, value: T) {
        *self.registry.value.borrow_mut() = value.clone();

        // Listeners may subscribe or unsubscribe while we deliver
        let listeners: Vec<(u64, Listener<T>)> = self.registry.listeners.borrow().clone();
        for (id, listener) in &listeners {
            deliver(*id, listener, &value);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

impl<T: Clone + Default + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

fn deliver<T>(id: u64, listener: &Listener<T>, value: &T) {
    match listener.try_borrow_mut() {
        Ok(mut callback) => (&mut *callback)(value),
        Err(_) => {
            log::warn!("Skipping re-entrant delivery to listener #{id}");
        }
    }
}

/// Handle returned by [`Subject::subscribe`]. Dropping it unregisters the listener.
pub struct Subscription<T> {
    id: u64,
    registry: Weak<Registry<T>>,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {
        // Drop does the work
    }

    /// True while both the subject and this listener are alive
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .listeners
                .borrow()
                .iter()
                .any(|(id, _)| *id == self.id)
        })
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut listeners) = registry.listeners.try_borrow_mut() {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
