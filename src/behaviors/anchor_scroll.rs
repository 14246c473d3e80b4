use std::rc::Rc;

use log::debug;

use crate::config::BehaviorConfig;
use crate::page::{Dispatch, Element, EventKind, ListenTarget, Page};

/// Smooth scrolling for in-page `#fragment` links, leaving room for the fixed nav.
pub struct AnchorScroll<P: Page> {
    page: Rc<P>,
    nav_selector: String,
    offset: f64,
}

impl<P: Page> AnchorScroll<P> {
    pub fn new(page: Rc<P>, config: &BehaviorConfig) -> Self {
        Self {
            page,
            nav_selector: config.nav_selector.clone(),
            offset: config.anchor_offset,
        }
    }

    /// Where the viewport top should land to show `target` below the nav.
    pub fn scroll_position(&self, target: &P::Element) -> f64 {
        let nav_height = self
            .page
            .query(&self.nav_selector)
            .map(|nav| nav.offset_height())
            .unwrap_or(0.0);
        target.offset_top() - nav_height - self.offset
    }

    pub fn on_link_click(&self, href: &str) -> Dispatch {
        let Some(target_id) = href.strip_prefix('#') else {
            return Dispatch::Proceed;
        };
        if target_id.is_empty() {
            return Dispatch::PreventDefault;
        }

        match self.page.by_id(target_id) {
            Some(target) => {
                let top = self.scroll_position(&target);
                debug!("Scrolling to #{} at {}", target_id, top);
                self.page.scroll_to_smooth(top);
                Dispatch::PreventDefault
            }
            // Let the browser jump there on its own.
            None => Dispatch::Proceed,
        }
    }

    pub fn install(self, anchor_selector: &str) {
        let page = self.page.clone();
        let this = Rc::new(self);
        for link in page.query_all(anchor_selector) {
            let this = this.clone();
            let href_source = link.clone();
            page.listen(
                ListenTarget::Element(link),
                EventKind::Click,
                Box::new(move |_| {
                    let href = href_source.attribute("href").unwrap_or_default();
                    this.on_link_click(&href)
                }),
            );
        }
    }
}
