//! The root of the demo.
use hoist::{error::Result, prelude::*, ssr::Ssr};

use crate::{
    config::DemoConfig,
    random_number::{RandomNumber, RandomNumberView},
};

pub const TITLE: &str = "Scoped State Alternatives";

/// A title above the [`RandomNumberView`].
pub struct RootView<V: View> {
    pub wrapper: V::Element,
    pub title: V::Text,
    pub random_number: RandomNumberView<V>,
}

impl<V: View> RootView<V> {
    pub fn new(config: &DemoConfig, cx: &Context) -> Result<Self> {
        let random_number = RandomNumberView::new(config, cx)?;
        Ok(Self::from_parts(random_number))
    }

    pub fn from_parts(random_number: RandomNumberView<V>) -> Self {
        let wrapper = element::<V>("main");
        wrapper.set_style("padding", "1em");
        wrapper.set_style("text-align", "center");
        let (heading, title) = element_with_text::<V>("h1", TITLE);
        wrapper.append_child(&heading);
        wrapper.append_child(&random_number.wrapper);
        Self {
            wrapper,
            title,
            random_number,
        }
    }

    pub fn count(&self) -> Option<u64> {
        self.random_number.counter.count()
    }

    pub fn random_number(&self) -> RandomNumber {
        self.random_number.random_number()
    }
}

impl RootView<Ssr> {
    /// Fire a click on the element with the given id.
    ///
    /// Returns `false` if there is no such element, or nothing listens for
    /// its clicks.
    pub fn click(&self, id: &str) -> bool {
        match self
            .wrapper
            .find_by_id(id)
            .and_then(|el| el.listener("click"))
        {
            Some(listener) => {
                log::trace!("clicking '{id}'");
                listener.fire();
                true
            }
            None => false,
        }
    }

    pub fn html_string(&self) -> String {
        self.wrapper.html_string()
    }
}
