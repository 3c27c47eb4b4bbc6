//! Server-side rendered views.
//!
//! [`Ssr`] is a headless [`View`] platform. Its nodes live in memory and can
//! be written out as an HTML string at any time, which makes it the platform
//! of choice for tests and for front ends that draw the tree themselves.
use std::sync::Arc;

use crate::{Str, sync::Shared, view::*};

pub mod prelude {
    pub use super::{Ssr, SsrElement, SsrEventListener, SsrNode, SsrText};
    pub use crate::prelude::*;
}

#[derive(Clone)]
pub struct SsrText {
    pub text: Shared<Str>,
}

impl PartialEq for SsrText {
    fn eq(&self, other: &Self) -> bool {
        self.text.ptr_eq(&other.text)
    }
}

impl ViewText for SsrText {
    fn new(text: impl Into<Str>) -> Self {
        SsrText {
            text: Shared::new(text.into()),
        }
    }

    fn set_text(&self, text: impl Into<Str>) {
        self.text.set(text.into());
    }

    fn get_text(&self) -> Str {
        self.text.visit(Str::clone)
    }
}

impl ViewChild<Ssr> for SsrText {
    fn as_node(&self) -> SsrNode {
        SsrNode::Text(self.clone())
    }
}

type Handler = Arc<dyn Fn() + Send + Sync>;

/// A named event on an [`SsrElement`].
///
/// Events are produced by calling [`SsrEventListener::fire`].
#[derive(Clone)]
pub struct SsrEventListener {
    pub name: Str,
    handlers: Shared<Vec<Handler>>,
}

impl PartialEq for SsrEventListener {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.handlers.ptr_eq(&other.handlers)
    }
}

impl ViewEventListener for SsrEventListener {
    fn on_event(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.handlers.get_mut().push(Arc::new(handler));
    }
}

impl SsrEventListener {
    pub fn new(name: impl Into<Str>) -> Self {
        SsrEventListener {
            name: name.into(),
            handlers: Default::default(),
        }
    }

    /// Fire an event occurence, running every handler before returning.
    pub fn fire(&self) {
        // Handlers may register more handlers, so don't hold the lock.
        let handlers = self.handlers.visit(Vec::clone);
        log::trace!("firing '{}' to {} handlers", self.name, handlers.len());
        for handler in handlers {
            handler();
        }
    }
}

#[derive(Clone)]
pub struct SsrElement {
    pub name: Str,
    pub attributes: Shared<Vec<(Str, Option<Str>)>>,
    pub styles: Shared<Vec<(Str, Str)>>,
    pub events: Shared<Vec<SsrEventListener>>,
    pub children: Shared<Vec<SsrNode>>,
}

impl PartialEq for SsrElement {
    fn eq(&self, other: &Self) -> bool {
        self.children.ptr_eq(&other.children)
    }
}

impl ViewParent<Ssr> for SsrElement {
    fn new(name: impl Into<Str>) -> Self {
        Self {
            name: name.into(),
            attributes: Default::default(),
            styles: Default::default(),
            events: Default::default(),
            children: Default::default(),
        }
    }

    fn append_child(&self, child: &impl ViewChild<Ssr>) {
        self.children.get_mut().push(child.as_node());
    }
}

impl ViewChild<Ssr> for SsrElement {
    fn as_node(&self) -> SsrNode {
        SsrNode::Element(self.clone())
    }
}

impl ViewProperties for SsrElement {
    fn set_property(&self, key: impl Into<Str>, value: impl Into<Str>) {
        let mut attributes = self.attributes.get_mut();
        let (k, v) = (key.into(), value.into());
        for (k_prev, v_prev) in attributes.iter_mut() {
            if k_prev == &k {
                *v_prev = Some(v);
                return;
            }
        }
        attributes.push((k, Some(v)));
    }

    fn get_property(&self, key: impl AsRef<str>) -> Option<Str> {
        self.attributes
            .get()
            .iter()
            .find(|(pkey, _)| pkey.as_str() == key.as_ref())
            .and_then(|(_, pval)| pval.clone())
    }

    fn set_style(&self, key: impl Into<Str>, value: impl Into<Str>) {
        let mut styles = self.styles.get_mut();
        let (key, value) = (key.into(), value.into());
        for (pkey, pval) in styles.iter_mut() {
            if pkey == &key {
                *pval = value;
                return;
            }
        }
        styles.push((key, value));
    }
}

impl ViewEventTarget<Ssr> for SsrElement {
    fn listen(&self, event_name: impl Into<Str>) -> SsrEventListener {
        let name = event_name.into();
        let mut events = self.events.get_mut();
        if let Some(existing) = events.iter().find(|ev| ev.name == name) {
            return existing.clone();
        }
        let listener = SsrEventListener::new(name);
        events.push(listener.clone());
        listener
    }
}

impl SsrElement {
    /// Returns the listener for `event_name`, if anything is listening.
    pub fn listener(&self, event_name: impl AsRef<str>) -> Option<SsrEventListener> {
        self.events
            .get()
            .iter()
            .find(|ev| ev.name.as_str() == event_name.as_ref())
            .cloned()
    }

    /// Depth-first search for the element with the given `id` attribute,
    /// including this element.
    pub fn find_by_id(&self, id: impl AsRef<str>) -> Option<SsrElement> {
        let id = id.as_ref();
        if self.get_property("id").is_some_and(|v| v.as_str() == id) {
            return Some(self.clone());
        }
        self.children.get().iter().find_map(|child| match child {
            SsrNode::Element(el) => el.find_by_id(id),
            SsrNode::Text(_) => None,
        })
    }

    /// All text under this element, one entry per text node, in document order.
    pub fn text_nodes(&self) -> Vec<Str> {
        let mut texts = vec![];
        for child in self.children.get().iter() {
            match child {
                SsrNode::Element(el) => texts.extend(el.text_nodes()),
                SsrNode::Text(text) => texts.push(text.get_text()),
            }
        }
        texts
    }

    pub fn html_string(&self) -> String {
        // Only "void" elements may be written as <tag /> when empty, writing
        // other elements that way confuses HTML parsers.
        fn tag_is_voidable(tag: &str) -> bool {
            matches!(
                tag,
                "area"
                    | "base"
                    | "br"
                    | "col"
                    | "hr"
                    | "img"
                    | "input"
                    | "link"
                    | "meta"
                    | "param"
                    | "command"
                    | "keygen"
                    | "source"
            )
        }
        let name = &self.name;
        let styles = self.styles.get();
        let mut attributes = self.attributes.visit(Vec::clone);
        let children = self.children.get();

        if !styles.is_empty() {
            let styles = styles
                .iter()
                .map(|(k, v)| format!("{}: {};", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            match attributes.iter_mut().find(|(key, _)| key == "style") {
                Some((_, value)) => {
                    let spaced = match value.take() {
                        Some(prev) => format!("{prev} {styles}"),
                        None => styles,
                    };
                    *value = Some(spaced.into());
                }
                None => attributes.push(("style".into(), Some(styles.into()))),
            }
        }

        let atts = attributes
            .iter()
            .map(|(key, may_val)| match may_val {
                Some(val) => format!(r#"{}="{}""#, key, val),
                None => key.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let open = if atts.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", name, atts)
        };

        if children.is_empty() {
            if tag_is_voidable(name) {
                format!("<{} />", open)
            } else {
                format!("<{}></{}>", open, name)
            }
        } else {
            let kids = children
                .iter()
                .map(|kid| match kid {
                    SsrNode::Element(el) => el.html_string(),
                    SsrNode::Text(text) => text.get_text().to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("<{}>{}</{}>", open, kids, name)
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum SsrNode {
    Element(SsrElement),
    Text(SsrText),
}

impl From<SsrText> for SsrNode {
    fn from(value: SsrText) -> Self {
        SsrNode::Text(value)
    }
}

impl From<SsrElement> for SsrNode {
    fn from(value: SsrElement) -> Self {
        SsrNode::Element(value)
    }
}

#[derive(Clone)]
pub struct Ssr;

impl View for Ssr {
    type Element = SsrElement;
    type Text = SsrText;
    type Node = SsrNode;
    type EventListener = SsrEventListener;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn html_string_sanity() {
        let div = element::<Ssr>("div");
        div.set_property("id", "root");
        div.set_style("padding", "1em");
        let (p, text) = element_with_text::<Ssr>("p", "hello");
        div.append_child(&p);
        div.append_child(&element::<Ssr>("br"));
        assert_eq!(
            r#"<div id="root" style="padding: 1em;"><p>hello</p> <br /></div>"#,
            div.html_string()
        );

        text.set_text("goodbye");
        assert_eq!(
            r#"<div id="root" style="padding: 1em;"><p>goodbye</p> <br /></div>"#,
            div.html_string()
        );
        assert_eq!(vec![Str::from("goodbye")], div.text_nodes());
    }

    #[test]
    fn fire_runs_handlers_in_order() {
        let button = element::<Ssr>("button");
        button.set_property("id", "go");
        let log = Shared::new(Vec::<u32>::new());
        let click = button.listen("click");
        click.on_event({
            let log = log.clone();
            move || log.get_mut().push(1)
        });
        // listening twice yields the same listener
        button.listen("click").on_event({
            let log = log.clone();
            move || log.get_mut().push(2)
        });

        let wrapper = element::<Ssr>("div");
        wrapper.append_child(&button);
        let found = wrapper.find_by_id("go").and_then(|el| el.listener("click"));
        assert!(found.is_some_and(|l| l == click));

        click.fire();
        click.fire();
        assert_eq!(vec![1, 2, 1, 2], *log.get());
        assert!(wrapper.listener("click").is_none());
    }
}
