//! Synchronization primitives.

use std::{
    ops::{Deref, DerefMut},
    sync::{Arc, PoisonError, RwLock, Weak},
};

/// A "shared" value.
///
/// Equivalent to `Arc<RwLock<T>>`. Clones share the same inner `T`.
#[derive(Default)]
pub struct Shared<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Shared<T> {
    /// Create a new shared `T`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Get a reference to the inner `T`.
    pub fn get(&self) -> impl Deref<Target = T> + '_ {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a mutable reference to the inner `T`.
    pub fn get_mut(&self) -> impl DerefMut<Target = T> + '_ {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the inner `T`.
    ///
    /// Returns the previous value.
    pub fn set(&self, value: T) -> T {
        let mut guard = self.get_mut();
        std::mem::replace(guard.deref_mut(), value)
    }

    /// Apply a function to the inner `T`, returning its result.
    pub fn visit<X>(&self, f: impl FnOnce(&T) -> X) -> X {
        f(self.get().deref())
    }

    /// Returns `true` if both values point to the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Create a non-owning handle to the inner `T`.
    pub fn downgrade(&self) -> WeakShared<T> {
        WeakShared {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// A non-owning handle to a [`Shared`] value.
pub struct WeakShared<T> {
    inner: Weak<RwLock<T>>,
}

impl<T> Clone for WeakShared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> WeakShared<T> {
    /// Attempt to recover the [`Shared`] value, if it is still alive.
    pub fn upgrade(&self) -> Option<Shared<T>> {
        self.inner.upgrade().map(|inner| Shared { inner })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_returns_previous() {
        let shared = Shared::new(1u32);
        let clone = shared.clone();
        assert_eq!(clone.set(2), 1);
        assert_eq!(*shared.get(), 2);
        assert!(shared.ptr_eq(&clone));
        assert!(!shared.ptr_eq(&Shared::new(2)));
    }

    #[test]
    fn weak_does_not_keep_alive() {
        let shared = Shared::new("hello".to_string());
        let weak = shared.downgrade();
        assert_eq!(
            weak.upgrade().map(|s| s.visit(String::clone)),
            Some("hello".to_string())
        );
        drop(shared);
        assert!(weak.upgrade().is_none());
    }
}
