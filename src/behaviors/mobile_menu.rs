use std::rc::Rc;

use log::debug;

use crate::config::BehaviorConfig;
use crate::page::{Dispatch, DomEvent, Element, EventKind, ListenTarget, Page};

/// The burger menu on narrow screens.
///
/// Open/closed lives in the DOM itself: the toggle's `aria-expanded` attribute
/// and the menu's active class. While open, the body stops scrolling.
pub struct MobileMenu<P: Page> {
    page: Rc<P>,
    toggle: P::Element,
    menu: P::Element,
    active_class: String,
}

impl<P: Page> MobileMenu<P> {
    /// `None` when either the toggle or the menu is missing from the page.
    pub fn find(page: Rc<P>, config: &BehaviorConfig) -> Option<Self> {
        let toggle = page.query(&config.nav_toggle_selector)?;
        let menu = page.query(&config.nav_menu_selector)?;
        Some(Self {
            page,
            toggle,
            menu,
            active_class: config.menu_active_class.clone(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class(&self.active_class)
    }

    fn set_open(&self, open: bool) {
        self.toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        if open {
            self.menu.add_class(&self.active_class);
        } else {
            self.menu.remove_class(&self.active_class);
        }
        if let Some(body) = self.page.body() {
            body.set_style("overflow", if open { "hidden" } else { "" });
        }
    }

    pub fn on_toggle_click(&self) {
        let expanded = self.toggle.attribute("aria-expanded").as_deref() == Some("true");
        debug!("Mobile menu {}", if expanded { "closing" } else { "opening" });
        self.set_open(!expanded);
    }

    pub fn on_link_click(&self) {
        self.set_open(false);
    }

    pub fn on_document_click(&self, target: Option<&P::Element>) {
        let inside = target
            .map(|target| self.toggle.contains(target) || self.menu.contains(target))
            .unwrap_or(false);
        if !inside {
            self.set_open(false);
        }
    }

    pub fn on_key_down(&self, key: &str) {
        if key == "Escape" && self.is_open() {
            self.set_open(false);
            self.toggle.focus();
        }
    }

    pub fn install(self, link_selector: &str) {
        let page = self.page.clone();
        let this = Rc::new(self);

        {
            let this = this.clone();
            let toggle = this.toggle.clone();
            page.listen(
                ListenTarget::Element(toggle),
                EventKind::Click,
                Box::new(move |_| {
                    this.on_toggle_click();
                    Dispatch::Proceed
                }),
            );
        }

        for link in page.query_all(link_selector) {
            let this = this.clone();
            page.listen(
                ListenTarget::Element(link),
                EventKind::Click,
                Box::new(move |_| {
                    this.on_link_click();
                    Dispatch::Proceed
                }),
            );
        }

        {
            let this = this.clone();
            page.listen(
                ListenTarget::Document,
                EventKind::Click,
                Box::new(move |event: &DomEvent<P::Element>| {
                    this.on_document_click(event.target.as_ref());
                    Dispatch::Proceed
                }),
            );
        }

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
}
