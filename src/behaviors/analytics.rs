use std::rc::Rc;

use log::info;

use crate::config::{BehaviorConfig, TrackedEvent};
use crate::page::{Dispatch, EventKind, ListenTarget, Page};

/// Forwards clicks on call-to-action elements to the page's analytics global
/// (Plausible by default) when one is loaded.
pub struct Analytics<P: Page> {
    page: Rc<P>,
    function: String,
}

impl<P: Page> Analytics<P> {
    pub fn new(page: Rc<P>, config: &BehaviorConfig) -> Self {
        Self {
            page,
            function: config.analytics_function.clone(),
        }
    }

    /// Returns whether the event reached the analytics function.
    pub fn track(&self, event: &str) -> bool {
        let forwarded = self.page.call_analytics(&self.function, event);
        info!("Event tracked: {}", event);
        forwarded
    }

    /// Binds every tracked selector and returns the number of elements bound.
    pub fn install(self, tracked: &[TrackedEvent]) -> usize {
        let page = self.page.clone();
        let this = Rc::new(self);
        let mut bound = 0;
        for TrackedEvent { event, selector } in tracked {
            for element in page.query_all(selector) {
                let this = this.clone();
                let event = event.clone();
                page.listen(
                    ListenTarget::Element(element),
                    EventKind::Click,
                    Box::new(move |_| {
                        this.track(&event);
                        Dispatch::Proceed
                    }),
                );
                bound += 1;
            }
        }
        bound
    }
}
