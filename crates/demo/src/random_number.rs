//! The random number feature, and the view that also hosts the counter.
use std::ops::Range;

use hoist::{error::Result, prelude::*};
use rand::{Rng, rngs::StdRng};
use serde::Serialize;

use crate::{
    config::{DemoConfig, Strategy},
    counter::{CounterState, CounterValueView, CounterView, CounterViewModel, increment},
};

pub const RANDOM_NUMBER_ID: &str = "random-number";
pub const RANDOMIZE_ID: &str = "randomize";

/// Draws are taken from this range. It must never be empty.
pub const RANGE: Range<u32> = 0..1000;

/// An integer in [`RANGE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RandomNumber(u32);

impl RandomNumber {
    pub fn value(self) -> u32 {
        self.0
    }

    /// Replace the number with a uniform draw from [`RANGE`].
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.0 = rng.gen_range(RANGE);
        log::debug!("randomized to {}", self.0);
    }

    pub fn label(self) -> String {
        format!("Random number is: {}", self.0)
    }
}

type CounterContent<V> = fn(&Context) -> Result<CounterView<V>>;

/// The counter hosted by [`RandomNumberView`], owned one of two ways.
pub enum CounterHost<V: View> {
    Wrapped {
        wrapper: ViewModelWrapper<CounterViewModel, CounterContent<V>>,
        view: CounterView<V>,
    },
    Value {
        state: Observable<CounterState>,
        view: CounterValueView<V>,
        _subscription: Subscription,
    },
}

impl<V: View> CounterHost<V> {
    fn new(strategy: Strategy, cx: &Context) -> Result<Self> {
        match strategy {
            Strategy::Wrapped => {
                let wrapper = ViewModelWrapper::new(
                    CounterView::<V>::new as CounterContent<V>,
                    CounterViewModel::new as fn() -> CounterViewModel,
                );
                let view = wrapper.render(cx)?;
                Ok(CounterHost::Wrapped { wrapper, view })
            }
            Strategy::Value => {
                let state = Observable::new(CounterState::default());
                let view = CounterValueView::<V>::new(state.get());
                view.increment.on_event({
                    let state = state.clone();
                    move || {
                        state.update(|current| match *current {
                            CounterState::Ready(counter) => {
                                *current = CounterState::Ready(increment(counter));
                                log::debug!("counter state is now {current:?}");
                            }
                            CounterState::Uninitialized => {
                                log::warn!("ignoring increment of an uninitialized counter");
                            }
                        });
                    }
                });
                let subscription = state.subscribe({
                    let view = view.clone();
                    move |current| view.show(*current)
                });
                Ok(CounterHost::Value {
                    state,
                    view,
                    _subscription: subscription,
                })
            }
        }
    }

    pub fn wrapper(&self) -> &V::Element {
        match self {
            CounterHost::Wrapped { view, .. } => &view.wrapper,
            CounterHost::Value { view, .. } => &view.wrapper,
        }
    }

    /// The current count, if the counter holds one.
    pub fn count(&self) -> Option<u64> {
        match self {
            CounterHost::Wrapped { wrapper, .. } => Some(wrapper.model().count()),
            CounterHost::Value { state, .. } => state.visit(CounterState::count),
        }
    }
}

/// Shows a random number with a button to re-draw it, followed by the
/// counter.
pub struct RandomNumberView<V: View> {
    pub wrapper: V::Element,
    pub random_text: V::Text,
    pub counter: CounterHost<V>,
    random_number: Observable<RandomNumber>,
    _subscription: Subscription,
}

impl<V: View> RandomNumberView<V> {
    pub fn new(config: &DemoConfig, cx: &Context) -> Result<Self> {
        Self::with_rng(config.strategy, config.rng(), cx)
    }

    pub fn with_rng(strategy: Strategy, rng: StdRng, cx: &Context) -> Result<Self> {
        let random_number = Observable::new(RandomNumber::default());
        let rng = Shared::new(rng);

        let wrapper = element::<V>("div");
        let section = element::<V>("div");
        section.set_property("id", RANDOM_NUMBER_ID);
        section.set_style("padding-bottom", "1em");
        let (heading, random_text) =
            element_with_text::<V>("h2", random_number.get().label());
        section.append_child(&heading);
        let (button, _) = element_with_text::<V>("button", "Randomize number");
        button.set_property("id", RANDOMIZE_ID);
        button.set_style("cursor", "pointer");
        button.listen("click").on_event({
            let random_number = random_number.clone();
            move || random_number.update(|n| n.randomize(&mut *rng.get_mut()))
        });
        section.append_child(&button);
        wrapper.append_child(&section);

        let subscription = random_number.subscribe({
            let random_text = random_text.clone();
            move |n| random_text.set_text(n.label())
        });

        log::debug!("hosting the counter with the '{strategy}' strategy");
        let counter = CounterHost::new(strategy, cx)?;
        wrapper.append_child(counter.wrapper());

        Ok(Self {
            wrapper,
            random_text,
            counter,
            random_number,
            _subscription: subscription,
        })
    }

    pub fn random_number(&self) -> RandomNumber {
        self.random_number.get()
    }
}
