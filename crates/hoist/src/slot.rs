//! Scoped state slots.
//!
//! A [`StateSlot`] is owned by a view and holds state whose identity must
//! survive that view being rendered again. It is built from a producer that
//! runs at most once, the first time the slot is read.
use std::ops::Deref;

use once_cell::sync::Lazy;

pub struct StateSlot<T, P = fn() -> T> {
    cell: Lazy<T, P>,
}

impl<T, P: FnOnce() -> T> StateSlot<T, P> {
    pub fn new(producer: P) -> Self {
        Self {
            cell: Lazy::new(producer),
        }
    }

    /// Returns the slot's value, running the producer first if needed.
    pub fn get(&self) -> &T {
        if Lazy::get(&self.cell).is_none() {
            log::trace!("initializing slot of {}", std::any::type_name::<T>());
        }
        Lazy::force(&self.cell)
    }

    pub fn is_initialized(&self) -> bool {
        Lazy::get(&self.cell).is_some()
    }
}

impl<T, P: FnOnce() -> T> Deref for StateSlot<T, P> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sync::Shared;

    #[test]
    fn producer_runs_once() {
        let runs = Shared::new(0u32);
        let slot = StateSlot::new({
            let runs = runs.clone();
            move || {
                *runs.get_mut() += 1;
                vec![1, 2, 3]
            }
        });
        assert!(!slot.is_initialized());
        assert_eq!(0, *runs.get());

        assert_eq!(&vec![1, 2, 3], slot.get());
        assert_eq!(3, slot.len());
        assert!(slot.is_initialized());
        assert_eq!(1, *runs.get());
    }
}
