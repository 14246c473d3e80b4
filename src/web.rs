//! [`Page`] backed by the real browser through `web-sys`.
//!
//! Listeners and observers live for the whole page, so their closures are
//! leaked with `forget()` once registered.

use gloo_timers::callback::Timeout;
use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{
    Document, HtmlDocument, HtmlElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::error::BehaviorError;
use crate::page::{
    Dispatch, DomEvent, Element, EventKind, Handler, IntersectionOptions, ListenTarget,
    LocalFuture, Page,
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(value: JsValue) -> BehaviorError {
    BehaviorError::Js(describe(&value))
}

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl Element for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            warn!("Failed to set {}: {}", name, describe(&e));
        }
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            warn!("Failed to add class {}: {}", class, describe(&e));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            warn!("Failed to remove class {}: {}", class, describe(&e));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.html() else {
            return;
        };
        let style = html.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(e) = result {
            warn!("Failed to set style {}: {}", property, describe(&e));
        }
    }

    fn offset_top(&self) -> f64 {
        self.html().map(|html| f64::from(html.offset_top())).unwrap_or(0.0)
    }

    fn offset_height(&self) -> f64 {
        self.html().map(|html| f64::from(html.offset_height())).unwrap_or(0.0)
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(other.0.as_ref()))
    }

    fn focus(&self) {
        if let Some(html) = self.html() {
            if let Err(e) = html.focus() {
                warn!("Failed to focus element: {}", describe(&e));
            }
        }
    }
}

pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self, BehaviorError> {
        let window = web_sys::window().ok_or_else(|| BehaviorError::not_found("window"))?;
        let document = window
            .document()
            .ok_or_else(|| BehaviorError::not_found("document"))?;
        Ok(Self { window, document })
    }

    fn try_inject_style(&self, css: &str) -> Result<(), BehaviorError> {
        let style = self.document.create_element("style").map_err(js_error)?;
        style.set_text_content(Some(css));
        let head = self
            .document
            .head()
            .ok_or_else(|| BehaviorError::not_found("head"))?;
        head.append_child(&style).map_err(js_error)?;
        Ok(())
    }
}

impl Page for WebPage {
    type Element = WebElement;
    type Timer = Timeout;

    fn query(&self, selector: &str) -> Option<WebElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                warn!("Invalid selector {}: {}", selector, describe(&e));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(|body| WebElement(body.into()))
    }

    fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_smooth(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn inject_style(&self, css: &str) {
        if let Err(err) = self.try_inject_style(css) {
            warn!("Failed to inject focus styles: {}", err);
        }
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }

    fn spawn(&self, task: LocalFuture<'static, ()>) {
        spawn_local(task);
    }

    fn has_clipboard_api(&self) -> bool {
        let navigator = self.window.navigator();
        let Ok(clipboard) = Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
            return false;
        };
        if clipboard.is_undefined() || clipboard.is_null() {
            return false;
        }
        Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map(|write_text| write_text.is_function())
            .unwrap_or(false)
    }

    fn write_clipboard(&self, text: String) -> LocalFuture<'static, Result<(), BehaviorError>> {
        let promise = self.window.navigator().clipboard().write_text(&text);
        Box::pin(async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| BehaviorError::Clipboard(describe(&e)))
        })
    }

    fn legacy_copy(&self, text: &str) -> Result<(), BehaviorError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| BehaviorError::not_found("body"))?;
        let textarea = self
            .document
            .create_element("textarea")
            .map_err(js_error)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| BehaviorError::Js("textarea is not an HTMLTextAreaElement".to_string()))?;
        textarea.set_value(text);
        let style = textarea.style();
        style.set_property("position", "fixed").map_err(js_error)?;
        style.set_property("left", "-999999px").map_err(js_error)?;

        body.append_child(&textarea).map_err(js_error)?;
        textarea.select();
        let copied = match self.document.dyn_ref::<HtmlDocument>() {
            Some(document) => document.exec_command("copy"),
            None => Ok(false),
        };
        if let Err(e) = body.remove_child(&textarea) {
            warn!("Failed to remove copy textarea: {}", describe(&e));
        }

        match copied {
            Ok(true) => Ok(()),
            // Some browsers report false for a copy that still went through.
            Ok(false) => {
                warn!("Copy command reported no effect");
                Ok(())
            }
            Err(e) => Err(BehaviorError::Clipboard(describe(&e))),
        }
    }

    fn call_analytics(&self, function: &str, event: &str) -> bool {
        let Ok(value) = Reflect::get(&self.window, &JsValue::from_str(function)) else {
            return false;
        };
        let Some(function) = value.dyn_ref::<Function>() else {
            return false;
        };
        if let Err(e) = function.call1(&JsValue::UNDEFINED, &JsValue::from_str(event)) {
            warn!("Analytics call for {} failed: {}", event, describe(&e));
        }
        true
    }

    fn observe_intersections(
        &self,
        targets: &[WebElement],
        options: &IntersectionOptions,
        on_enter: Box<dyn FnMut(&WebElement)>,
    ) {
        let mut on_enter = on_enter;
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(&WebElement(entry.target()));
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                for target in targets {
                    observer.observe(&target.0);
                }
                callback.forget();
            }
            Err(e) => error!("Failed to create IntersectionObserver: {}", describe(&e)),
        }
    }

    fn listen(&self, target: ListenTarget<WebElement>, kind: EventKind, handler: Handler<WebElement>) {
        let mut handler = handler;
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let dom_event = DomEvent {
                target: event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                    .map(WebElement),
                key: event.dyn_ref::<KeyboardEvent>().map(|keyboard| keyboard.key()),
            };
            if handler(&dom_event) == Dispatch::PreventDefault {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        let function: &Function = callback.as_ref().unchecked_ref();
        let result = match &target {
            ListenTarget::Window => self.window.add_event_listener_with_callback(kind.as_str(), function),
            ListenTarget::Document => self.document.add_event_listener_with_callback(kind.as_str(), function),
            ListenTarget::Element(element) => element.0.add_event_listener_with_callback(kind.as_str(), function),
        };

        match result {
            Ok(()) => callback.forget(),
            Err(e) => error!("Failed to listen for {}: {}", kind.as_str(), describe(&e)),
        }
    }
}
