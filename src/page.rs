//! The slice of the browser the behaviors are allowed to touch.
//!
//! Behaviors never reach for `web_sys::window()` themselves. They are handed a
//! [`Page`], which is the real DOM in the browser and an in-memory fake in tests.

use std::future::Future;
use std::pin::Pin;

use crate::error::BehaviorError;

pub type LocalFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

pub type Handler<E> = Box<dyn FnMut(&DomEvent<E>) -> Dispatch>;

/// A handle to one element. Cloning the handle does not clone the element.
pub trait Element: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn text_content(&self) -> String;
    fn set_text_content(&self, text: &str);

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Sets an inline style property. An empty value clears it.
    fn set_style(&self, property: &str, value: &str);

    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;

    /// True when `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    fn focus(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Scroll,
    KeyDown,
    MouseDown,
    DomContentLoaded,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Scroll => "scroll",
            EventKind::KeyDown => "keydown",
            EventKind::MouseDown => "mousedown",
            EventKind::DomContentLoaded => "DOMContentLoaded",
        }
    }
}

pub enum ListenTarget<E> {
    Window,
    Document,
    Element(E),
}

/// What a handler gets to see of a dispatched event.
pub struct DomEvent<E> {
    pub target: Option<E>,
    pub key: Option<String>,
}

impl<E> DomEvent<E> {
    pub fn key_is(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

/// Handler verdict on the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Proceed,
    PreventDefault,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionOptions {
    pub threshold: f64,
    pub root_margin: String,
}

pub trait Page: 'static {
    type Element: Element;
    /// Pending callback from [`Page::set_timeout`]. Dropping it cancels the callback.
    type Timer: 'static;

    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn by_id(&self, id: &str) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;

    /// True while the document is still being parsed.
    fn is_loading(&self) -> bool;

    fn scroll_y(&self) -> f64;
    fn scroll_to_smooth(&self, top: f64);

    fn prefers_reduced_motion(&self) -> bool;

    /// Appends a `<style>` block to the document head.
    fn inject_style(&self, css: &str);

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
    fn spawn(&self, task: LocalFuture<'static, ()>);

    fn has_clipboard_api(&self) -> bool;
    fn write_clipboard(&self, text: String) -> LocalFuture<'static, Result<(), BehaviorError>>;
    /// Copies through an offscreen textarea and the `copy` editing command.
    fn legacy_copy(&self, text: &str) -> Result<(), BehaviorError>;

    /// Calls the global analytics function `function` with `event`.
    /// Returns false when no such global exists.
    fn call_analytics(&self, function: &str, event: &str) -> bool;

    fn observe_intersections(
        &self,
        targets: &[Self::Element],
        options: &IntersectionOptions,
        on_enter: Box<dyn FnMut(&Self::Element)>,
    );

    fn listen(
        &self,
        target: ListenTarget<Self::Element>,
        kind: EventKind,
        handler: Handler<Self::Element>,
    );
}
