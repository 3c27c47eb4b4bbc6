//! The counter feature.
//!
//! The count can be owned two ways:
//!
//! * by reference - [`CounterViewModel`] is a long-lived model with a stable
//!   identity, incremented in place. [`CounterView`] finds it in the
//!   [`Context`] and re-renders whenever it changes.
//! * by value - [`CounterState`] wraps an immutable [`Counter`] snapshot.
//!   Each increment builds a new snapshot and replaces the old one wholesale.
//!   [`CounterValueView`] only ever sees copies handed to it by its owner.
use hoist::{error::Result, prelude::*};
use serde::Serialize;

pub const COUNTER_ID: &str = "counter";
pub const INCREMENT_ID: &str = "increment";

pub(crate) fn count_label(count: u64) -> String {
    format!("Count is: {count}")
}

/// Reference-ownership counter model.
///
/// Clones are handles to the same count. Like [`Counter`], the count is a
/// `u64`.
#[derive(Clone, Debug, Default)]
pub struct CounterViewModel {
    count: Observable<u64>,
}

impl CounterViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count.get()
    }

    pub fn increment_counter(&self) {
        let count = self.count.update(|n| {
            *n += 1;
            *n
        });
        log::debug!("counter model incremented to {count}");
    }

    /// Run `f` with the new count after every increment.
    pub fn subscribe(&self, f: impl Fn(u64) + Send + Sync + 'static) -> Subscription {
        self.count.subscribe(move |n| f(*n))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.count.ptr_eq(&other.count)
    }
}

/// An immutable snapshot of the count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub count: u64,
}

/// The increment transition, `n -> n + 1`.
///
/// Counts are `u64`; one increment per user activation cannot reach the bound.
pub fn increment(current: Counter) -> Counter {
    Counter {
        count: current.count + 1,
    }
}

/// Value-ownership counter state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CounterState {
    /// Not yet holding a count. No transition leads out of this state.
    Uninitialized,
    Ready(Counter),
}

impl Default for CounterState {
    fn default() -> Self {
        CounterState::Ready(Counter::default())
    }
}

impl CounterState {
    pub fn label(&self) -> String {
        match self {
            CounterState::Uninitialized => "Count is: -".to_string(),
            CounterState::Ready(counter) => count_label(counter.count),
        }
    }

    pub fn count(&self) -> Option<u64> {
        match self {
            CounterState::Uninitialized => None,
            CounterState::Ready(counter) => Some(counter.count),
        }
    }
}

fn counter_markup<V: View>(label: String) -> (V::Element, V::Text, V::Element) {
    let wrapper = element::<V>("div");
    wrapper.set_property("id", COUNTER_ID);
    let (heading, count_text) = element_with_text::<V>("h2", label);
    wrapper.append_child(&heading);
    let (button, _) = element_with_text::<V>("button", "Increment Counter");
    button.set_property("id", INCREMENT_ID);
    button.set_style("cursor", "pointer");
    wrapper.append_child(&button);
    (wrapper, count_text, button)
}

/// Displays a [`CounterViewModel`] found in the context.
pub struct CounterView<V: View> {
    pub wrapper: V::Element,
    pub count_text: V::Text,
    model: CounterViewModel,
    _subscription: Subscription,
}

impl<V: View> CounterView<V> {
    pub fn new(cx: &Context) -> Result<Self> {
        let model = cx.require::<CounterViewModel>()?;
        let (wrapper, count_text, button) = counter_markup::<V>(count_label(model.count()));
        button.listen("click").on_event({
            let model = model.clone();
            move || model.increment_counter()
        });
        let subscription = model.subscribe({
            let count_text = count_text.clone();
            move |count| count_text.set_text(count_label(count))
        });
        Ok(Self {
            wrapper,
            count_text,
            model,
            _subscription: subscription,
        })
    }

    /// The model this view is reading.
    pub fn model(&self) -> &CounterViewModel {
        &self.model
    }
}

/// Displays a copy of a [`CounterState`].
///
/// The view never changes the state itself. Its owner listens to
/// [`CounterValueView::increment`] and hands back a new copy with
/// [`CounterValueView::show`].
pub struct CounterValueView<V: View> {
    pub wrapper: V::Element,
    pub count_text: V::Text,
    pub increment: V::EventListener,
}

impl<V: View> Clone for CounterValueView<V> {
    fn clone(&self) -> Self {
        Self {
            wrapper: self.wrapper.clone(),
            count_text: self.count_text.clone(),
            increment: self.increment.clone(),
        }
    }
}

impl<V: View> CounterValueView<V> {
    pub fn new(state: CounterState) -> Self {
        let (wrapper, count_text, button) = counter_markup::<V>(state.label());
        let increment = button.listen("click");
        Self {
            wrapper,
            count_text,
            increment,
        }
    }

    pub fn show(&self, state: CounterState) {
        self.count_text.set_text(state.label());
    }
}
