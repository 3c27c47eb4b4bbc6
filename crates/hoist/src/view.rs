//! Traits for building cross-platform views.
use crate::Str;

/// A text node.
pub trait ViewText {
    fn new(text: impl Into<Str>) -> Self;
    fn set_text(&self, text: impl Into<Str>);
    fn get_text(&self) -> Str;
}

/// A node that can contain other nodes.
pub trait ViewParent<V: View> {
    fn new(name: impl Into<Str>) -> Self;
    fn append_child(&self, child: &impl ViewChild<V>);
}

/// Anything that can be appended to a [`ViewParent`].
pub trait ViewChild<V: View> {
    fn as_node(&self) -> V::Node;
}

/// Attributes and inline styles of an element.
pub trait ViewProperties {
    fn set_property(&self, key: impl Into<Str>, value: impl Into<Str>);
    fn get_property(&self, key: impl AsRef<str>) -> Option<Str>;
    fn set_style(&self, key: impl Into<Str>, value: impl Into<Str>);
}

/// A listener for one named event on one target.
///
/// Handlers run synchronously, in registration order, each time the
/// event occurs.
pub trait ViewEventListener {
    fn on_event(&self, handler: impl Fn() + Send + Sync + 'static);
}

/// Anything that produces events.
pub trait ViewEventTarget<V: View> {
    fn listen(&self, event_name: impl Into<Str>) -> V::EventListener;
}

/// A view platform.
///
/// Handles to nodes may be captured by event handlers and subscriptions,
/// so they must be cheap to clone and safe to send.
pub trait View: Sized + 'static {
    type Element: ViewParent<Self>
        + ViewChild<Self>
        + ViewProperties
        + ViewEventTarget<Self>
        + Clone
        + Send
        + Sync
        + 'static;
    type Text: ViewText + ViewChild<Self> + Clone + Send + Sync + 'static;
    type Node: Clone;
    type EventListener: ViewEventListener + Clone + Send + Sync + 'static;
}

/// Create an element on platform `V`.
pub fn element<V: View>(name: impl Into<Str>) -> V::Element {
    <V::Element as ViewParent<V>>::new(name)
}

/// Create a text node on platform `V`.
pub fn text<V: View>(text: impl Into<Str>) -> V::Text {
    <V::Text as ViewText>::new(text)
}

/// Create an element with a single text child, returning both.
pub fn element_with_text<V: View>(
    name: impl Into<Str>,
    content: impl Into<Str>,
) -> (V::Element, V::Text) {
    let element = element::<V>(name);
    let content = text::<V>(content);
    element.append_child(&content);
    (element, content)
}
