//! Hoisting a caller-built model into scoped state.
//!
//! [`ViewModelWrapper`] takes a content-producing function and a
//! model-producing function. The model producer runs exactly once, when the
//! wrapper is constructed, and its result lives in the wrapper's
//! [`StateSlot`]. The content producer runs on every render. Each call to
//! [`ViewModelWrapper::render`] pushes that same model onto the [`Context`]
//! before producing the content, so anything in the content subtree can look
//! the model up by type.
use std::any::Any;

use crate::{context::Context, slot::StateSlot};

pub struct ViewModelWrapper<M, F, P = fn() -> M> {
    model: StateSlot<M, P>,
    content: F,
}

impl<M, F, P> ViewModelWrapper<M, F, P>
where
    M: Any + Clone + Send + Sync,
    P: FnOnce() -> M,
{
    pub fn new(content: F, model: P) -> Self {
        let model = StateSlot::new(model);
        model.get();
        Self { model, content }
    }

    /// The hoisted model.
    pub fn model(&self) -> &M {
        self.model.get()
    }

    /// Produce the content with the model in scope.
    pub fn render<C>(&self, cx: &Context) -> C
    where
        F: Fn(&Context) -> C,
    {
        log::trace!(
            "rendering content with {} in scope",
            std::any::type_name::<M>()
        );
        cx.with_value(self.model().clone(), |cx| (self.content)(cx))
    }
}

#[cfg(test)]
mod test {
    use crate::{error::Result, observable::Observable, sync::Shared};

    use super::*;

    #[derive(Clone)]
    struct Model {
        count: Observable<u32>,
    }

    #[test]
    fn producer_runs_once_across_renders() {
        let produced = Shared::new(0u32);
        let wrapper = ViewModelWrapper::new(
            |cx: &Context| cx.require::<Model>(),
            {
                let produced = produced.clone();
                move || {
                    *produced.get_mut() += 1;
                    Model {
                        count: Observable::new(0),
                    }
                }
            },
        );
        let cx = Context::new();
        let first: Result<Model> = wrapper.render(&cx);
        let second: Result<Model> = wrapper.render(&cx);
        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(first.count.ptr_eq(&second.count));
        assert!(first.count.ptr_eq(&wrapper.model().count));
        assert_eq!(1, *produced.get());
        assert_eq!(0, cx.depth());
    }

    #[test]
    fn descendants_share_mutations() {
        let wrapper = ViewModelWrapper::new(
            |cx: &Context| {
                let reader = cx.require::<Model>()?;
                let writer = cx.require::<Model>()?;
                Ok::<_, crate::error::Error>((reader, writer))
            },
            || Model {
                count: Observable::new(0),
            },
        );
        let (reader, writer) = wrapper.render(&Context::new()).unwrap();
        writer.count.update(|n| *n += 1);
        assert_eq!(1, reader.count.get());
        wrapper.model().count.update(|n| *n += 1);
        assert_eq!(2, writer.count.get());
    }

    #[test]
    fn nested_wrappers_shadow() {
        let inner = ViewModelWrapper::new(
            |cx: &Context| cx.get::<Model>(),
            || Model {
                count: Observable::new(10),
            },
        );
        let outer = ViewModelWrapper::new(
            |cx: &Context| (cx.get::<Model>(), inner.render(cx), cx.get::<Model>()),
            || Model {
                count: Observable::new(0),
            },
        );
        let (before, nested, after) = outer.render(&Context::new());
        assert_eq!(Some(0), before.map(|m| m.count.get()));
        assert_eq!(Some(10), nested.map(|m| m.count.get()));
        assert_eq!(Some(0), after.map(|m| m.count.get()));
    }
}
