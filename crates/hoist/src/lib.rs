//! Scoped state for cross-platform views.
//!
//! ## Impetus
//!
//! A view often owns a little piece of state, like the number of times a
//! button has been clicked, that must outlive any single rendering of that
//! view. Sometimes that state is a value that gets swapped wholesale on every
//! change. Other times it is a model with a stable identity that many
//! descendant views read and write.
//!
//! `hoist` provides the handful of pieces needed to express both:
//!
//! * [`StateSlot`](slot::StateSlot) - a view-owned slot that is filled exactly
//!   once, no matter how many times the view renders.
//! * [`Observable`](observable::Observable) - a reference-identity model that
//!   synchronously notifies its subscribers on every change.
//! * [`Context`](context::Context) - a type-keyed stack of ambient values, for
//!   handing a model to a whole subtree without threading it through every
//!   intermediate view.
//! * [`ViewModelWrapper`](wrapper::ViewModelWrapper) - puts the three together,
//!   hoisting a caller-built model into scoped state and exposing it to its
//!   content through the context.
//!
//! ## Views
//!
//! Views are written against the [`View`](view::View) trait family so that the
//! same view can be built on more than one platform. [`ssr::Ssr`] is a
//! headless platform that renders to HTML strings.
//!
//! Everything here is synchronous. A change is fully propagated by the time
//! the call that made it returns.

pub mod context;
pub mod error;
pub mod observable;
pub mod slot;
pub mod ssr;
pub mod str;
pub mod sync;
pub mod view;
pub mod wrapper;

pub use crate::str::Str;

pub mod prelude {
    pub use crate::{
        Str,
        context::{Context, ContextGuard},
        observable::{Observable, Subscription},
        slot::StateSlot,
        sync::Shared,
        view::*,
        wrapper::ViewModelWrapper,
    };
}
