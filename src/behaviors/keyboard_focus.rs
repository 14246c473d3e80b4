use std::rc::Rc;

use crate::config::BehaviorConfig;
use crate::page::{Dispatch, DomEvent, Element, EventKind, ListenTarget, Page};

/// Focus outlines that only show up for people navigating with the keyboard.
pub struct KeyboardFocus<P: Page> {
    page: Rc<P>,
    marker_class: String,
}

/// The outline rule, scoped to the marker class so mouse users never see it.
pub fn focus_outline_css(config: &BehaviorConfig) -> String {
    format!(
        "\n    .{class} *:focus {{\n        outline: 2px solid var({color});\n        outline-offset: 2px;\n    }}\n",
        class = config.keyboard_nav_class,
        color = config.focus_outline_var,
    )
}

impl<P: Page> KeyboardFocus<P> {
    pub fn new(page: Rc<P>, config: &BehaviorConfig) -> Self {
        Self {
            page,
            marker_class: config.keyboard_nav_class.clone(),
        }
    }

    pub fn on_key_down(&self, key: &str) {
        if key == "Tab" {
            if let Some(body) = self.page.body() {
                body.add_class(&self.marker_class);
            }
        }
    }

    pub fn on_mouse_down(&self) {
        if let Some(body) = self.page.body() {
            body.remove_class(&self.marker_class);
        }
    }

    pub fn install(self) {
        let page = self.page.clone();
        let this = Rc::new(self);
        {
            let this = this.clone();
            page.listen(
                ListenTarget::Document,
                EventKind::KeyDown,
                Box::new(move |event: &DomEvent<P::Element>| {
                    if let Some(key) = &event.key {
                        this.on_key_down(key);
                    }
                    Dispatch::Proceed
                }),
            );
        }
        page.listen(
            ListenTarget::Document,
            EventKind::MouseDown,
            Box::new(move |_| {
                this.on_mouse_down();
                Dispatch::Proceed
            }),
        );
    }
}
