use std::rc::Rc;

use crate::config::BehaviorConfig;
use crate::page::{Dispatch, Element, EventKind, ListenTarget, Page};

/// Drops a shadow under the nav once the page has scrolled past the threshold.
pub struct ScrollShadow<P: Page> {
    page: Rc<P>,
    nav: P::Element,
    threshold: f64,
    shadow: String,
}

impl<P: Page> ScrollShadow<P> {
    /// `None` when the page has no nav.
    pub fn find(page: Rc<P>, config: &BehaviorConfig) -> Option<Self> {
        let nav = page.query(&config.nav_selector)?;
        Some(Self {
            page,
            nav,
            threshold: config.scroll_shadow_threshold,
            shadow: config.nav_shadow.clone(),
        })
    }

    pub fn is_scrolled(&self) -> bool {
        self.page.scroll_y() > self.threshold
    }

    pub fn on_scroll(&self) {
        if self.is_scrolled() {
            self.nav.set_style("box-shadow", &self.shadow);
        } else {
            self.nav.set_style("box-shadow", "none");
        }
    }

    pub fn install(self) {
        // Pages restored mid-scroll need the shadow before the first scroll event.
        // Unscrolled pages keep whatever the stylesheet gives the nav.
        if self.is_scrolled() {
            self.on_scroll();
        }
        let page = self.page.clone();
        let this = Rc::new(self);
        page.listen(
            ListenTarget::Window,
            EventKind::Scroll,
            Box::new(move |_| {
                this.on_scroll();
                Dispatch::Proceed
            }),
        );
    }
}
