//! Values that notify subscribers when they change.
//!
//! [`Observable`] is a reference-identity model. Cloning an `Observable`
//! yields another handle to the same value, so a view and any number of its
//! descendants can hold the same model. Every [`Observable::set`] or
//! [`Observable::update`] synchronously runs each live subscriber before
//! returning.
//!
//! ```rust
//! use hoist::observable::Observable;
//!
//! let count = Observable::new(0u32);
//! let seen = Observable::new(Vec::<u32>::new());
//! let _sub = count.subscribe({
//!     let seen = seen.clone();
//!     move |n| seen.update(|v| v.push(*n))
//! });
//! count.update(|n| *n += 1);
//! count.set(5);
//! assert_eq!(vec![1, 5], seen.get());
//! ```
use std::sync::Arc;

use crate::sync::{Shared, WeakShared};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listeners<T> {
    next_id: usize,
    entries: Vec<(usize, Listener<T>)>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: vec![],
        }
    }
}

/// Wraps a value `T` and a list of change listeners.
pub struct Observable<T> {
    value: Shared<T>,
    listeners: Shared<Listeners<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(&format!("Observable<{}>", std::any::type_name::<T>()))
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Shared::new(value),
            listeners: Default::default(),
        }
    }

    /// Apply a function to the current value.
    pub fn visit<X>(&self, f: impl FnOnce(&T) -> X) -> X {
        self.value.visit(f)
    }

    /// Returns `true` if both handles refer to the same model.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.value.ptr_eq(&other.value)
    }

    /// The number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.get().entries.len()
    }

    /// Register a listener that runs after each change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or [`Subscription::unsubscribe`]d.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription
    where
        T: 'static,
    {
        let id = {
            let mut listeners = self.listeners.get_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, Arc::new(f)));
            id
        };
        log::trace!(
            "subscribed listener {id} to Observable<{}>",
            std::any::type_name::<T>()
        );
        let weak: WeakShared<Listeners<T>> = self.listeners.downgrade();
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(listeners) = weak.upgrade() {
                    listeners.get_mut().entries.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }
}

impl<T: Clone> Observable<T> {
    /// A clone of the current value.
    pub fn get(&self) -> T {
        self.value.visit(T::clone)
    }

    /// Replace the value and notify every listener.
    ///
    /// Returns the previous value.
    pub fn set(&self, value: T) -> T {
        let previous = self.value.set(value);
        self.notify();
        previous
    }

    /// Mutate the value in place and notify every listener.
    pub fn update<X>(&self, f: impl FnOnce(&mut T) -> X) -> X {
        let x = f(&mut *self.value.get_mut());
        self.notify();
        x
    }

    fn notify(&self) {
        // Listeners may read or write this model, so no lock is held while
        // they run. Each listener sees the value as it is when it is called,
        // and listeners unsubscribed by an earlier listener are skipped.
        let listeners = self.listeners.visit(|l| {
            l.entries
                .iter()
                .map(|(id, f)| (*id, f.clone()))
                .collect::<Vec<_>>()
        });
        log::trace!(
            "notifying {} listeners of Observable<{}>",
            listeners.len(),
            std::any::type_name::<T>()
        );
        for (id, listener) in listeners {
            if !self.is_subscribed(id) {
                continue;
            }
            let current = self.get();
            listener(&current);
        }
    }

    fn is_subscribed(&self, id: usize) -> bool {
        self.listeners
            .visit(|l| l.entries.iter().any(|(lid, _)| *lid == id))
    }
}

/// Keeps a listener registered with an [`Observable`].
///
/// Dropping the subscription unregisters the listener.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Unregister the listener now.
    pub fn unsubscribe(mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }

    /// Keep the listener registered for as long as the observable lives.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}
