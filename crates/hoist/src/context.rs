//! Ambient values scoped to a subtree of views.
//!
//! A [`Context`] is passed down the view construction call chain. A view
//! that wants its descendants to see a value pushes it with
//! [`Context::provide`] (or [`Context::with_value`]), and any descendant can
//! look it up by type without the intermediate views threading it through
//! their parameters.
//!
//! Values are kept on a stack. Lookups search from the top, so a value
//! pushed for an inner subtree shadows an outer value of the same type until
//! the inner [`ContextGuard`] is dropped.
use std::{
    any::{Any, TypeId},
    sync::Arc,
};

use snafu::OptionExt;

use crate::{
    error::{MissingContextSnafu, Result},
    sync::Shared,
};

struct Frame {
    id: usize,
    key: TypeId,
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

#[derive(Default)]
struct Frames {
    next_id: usize,
    stack: Vec<Frame>,
}

/// A type-keyed stack of ambient values.
///
/// Clones share the same stack.
#[derive(Clone, Default)]
pub struct Context {
    frames: Shared<Frames>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.frames.visit(|frames| {
            frames
                .stack
                .iter()
                .map(|frame| frame.type_name)
                .collect::<Vec<_>>()
        });
        f.debug_struct("Context").field("stack", &names).finish()
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `value` for every lookup made until the returned guard is dropped.
    #[must_use = "dropping the guard immediately removes the value"]
    pub fn provide<T: Any + Send + Sync>(&self, value: T) -> ContextGuard {
        let type_name = std::any::type_name::<T>();
        let mut frames = self.frames.get_mut();
        let id = frames.next_id;
        frames.next_id += 1;
        frames.stack.push(Frame {
            id,
            key: TypeId::of::<T>(),
            type_name,
            value: Arc::new(value),
        });
        log::trace!("pushed context frame {id} '{type_name}'");
        ContextGuard {
            id,
            frames: self.frames.clone(),
        }
    }

    /// Run `f` with `value` pushed, popping it afterwards.
    pub fn with_value<T: Any + Send + Sync, X>(
        &self,
        value: T,
        f: impl FnOnce(&Context) -> X,
    ) -> X {
        let _guard = self.provide(value);
        f(self)
    }

    /// Look up the innermost value of type `T`.
    pub fn get<T: Any + Clone>(&self) -> Option<T> {
        let key = TypeId::of::<T>();
        self.frames.visit(|frames| {
            frames
                .stack
                .iter()
                .rev()
                .find(|frame| frame.key == key)
                .and_then(|frame| frame.value.downcast_ref::<T>())
                .cloned()
        })
    }

    /// Look up the innermost value of type `T`, failing if there is none.
    pub fn require<T: Any + Clone>(&self) -> Result<T> {
        self.get::<T>().context(MissingContextSnafu {
            type_name: std::any::type_name::<T>(),
        })
    }

    /// Returns `true` if a value of type `T` is in scope.
    pub fn contains<T: Any>(&self) -> bool {
        let key = TypeId::of::<T>();
        self.frames
            .visit(|frames| frames.stack.iter().any(|frame| frame.key == key))
    }

    /// The number of values currently pushed.
    pub fn depth(&self) -> usize {
        self.frames.get().stack.len()
    }
}

/// Removes a value pushed with [`Context::provide`] when dropped.
pub struct ContextGuard {
    id: usize,
    frames: Shared<Frames>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let mut frames = self.frames.get_mut();
        if let Some(index) = frames.stack.iter().rposition(|frame| frame.id == self.id) {
            let frame = frames.stack.remove(index);
            log::trace!("popped context frame {} '{}'", frame.id, frame.type_name);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    #[derive(Clone, Debug, PartialEq)]
    struct Theme(&'static str);

    #[test]
    fn inner_value_shadows_outer() {
        let cx = Context::new();
        assert_eq!(None, cx.get::<Theme>());

        let _outer = cx.provide(Theme("light"));
        assert_eq!(Some(Theme("light")), cx.get());
        {
            let _inner = cx.provide(Theme("dark"));
            let _other = cx.provide(7u32);
            assert_eq!(Some(Theme("dark")), cx.get());
            assert_eq!(Some(7u32), cx.get());
            assert_eq!(3, cx.depth());
        }
        assert_eq!(Some(Theme("light")), cx.get());
        assert!(!cx.contains::<u32>());
        assert_eq!(1, cx.depth());
    }

    #[test]
    fn with_value_restores_on_return() {
        let cx = Context::new();
        let seen = cx.with_value(Theme("dark"), |cx| {
            cx.with_value(Theme("contrast"), |cx| cx.get::<Theme>())
        });
        assert_eq!(Some(Theme("contrast")), seen);
        assert_eq!(0, cx.depth());
    }

    #[test]
    fn guards_dropped_out_of_order() {
        let cx = Context::new();
        let outer = cx.provide(Theme("light"));
        let inner = cx.provide(Theme("dark"));
        drop(outer);
        assert_eq!(Some(Theme("dark")), cx.get());
        drop(inner);
        assert_eq!(None, cx.get::<Theme>());
    }

    #[test]
    fn require_reports_type() {
        let cx = Context::new();
        let err = cx.require::<Theme>().unwrap_err();
        assert!(matches!(err, Error::MissingContext { .. }));
        assert!(err.to_string().contains("Theme"));
    }
}
