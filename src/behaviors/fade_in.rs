use std::rc::Rc;

use log::debug;

use crate::config::BehaviorConfig;
use crate::page::{Element, IntersectionOptions, Page};

/// Content cards start hidden and slide up the first time they scroll into view.
pub struct FadeIn<P: Page> {
    page: Rc<P>,
    selector: String,
    offset_px: f64,
    duration_secs: f64,
    options: IntersectionOptions,
}

impl<P: Page> FadeIn<P> {
    pub fn new(page: Rc<P>, config: &BehaviorConfig) -> Self {
        Self {
            page,
            selector: config.animated_selector_list(),
            offset_px: config.fade_offset_px,
            duration_secs: config.fade_duration_secs,
            options: IntersectionOptions {
                threshold: config.fade_threshold,
                root_margin: config.fade_root_margin.clone(),
            },
        }
    }

    pub fn hide(&self, element: &P::Element) {
        element.set_style("opacity", "0");
        element.set_style("transform", &format!("translateY({}px)", self.offset_px));
        element.set_style(
            "transition",
            &format!(
                "opacity {secs}s ease, transform {secs}s ease",
                secs = self.duration_secs
            ),
        );
    }

    pub fn reveal(element: &P::Element) {
        element.set_style("opacity", "1");
        element.set_style("transform", "translateY(0)");
    }

    /// Hides every animated element and starts watching them. Returns how many
    /// were set up, which is zero when the visitor prefers reduced motion.
    pub fn install(self) -> usize {
        if self.page.prefers_reduced_motion() {
            debug!("Reduced motion preferred, skipping fade-in");
            return 0;
        }

        let elements = self.page.query_all(&self.selector);
        if elements.is_empty() {
            return 0;
        }
        for element in &elements {
            self.hide(element);
        }
        self.page.observe_intersections(
            &elements,
            &self.options,
            Box::new(|element: &P::Element| Self::reveal(element)),
        );
        elements.len()
    }
}
