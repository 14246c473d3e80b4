use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, error};

use crate::config::BehaviorConfig;
use crate::error::BehaviorError;
use crate::page::{Dispatch, Element, EventKind, ListenTarget, Page};

/// A label revert that has been scheduled but may not have run yet.
struct PendingRevert<T> {
    /// What the button said before any feedback was shown.
    original_label: String,
    settled: Rc<Cell<bool>>,
    _timer: T,
}

/// Copy buttons that put the text of the element named by `data-target`
/// on the clipboard and flash a short confirmation.
pub struct CopyButtons<P: Page> {
    page: Rc<P>,
    target_attribute: String,
    copied_label: String,
    error_label: String,
    fallback_label: String,
    copied_class: String,
    feedback_ms: u32,
    pending: RefCell<HashMap<usize, PendingRevert<P::Timer>>>,
}

impl<P: Page> CopyButtons<P> {
    pub fn new(page: Rc<P>, config: &BehaviorConfig) -> Self {
        Self {
            page,
            target_attribute: config.copy_target_attribute.clone(),
            copied_label: config.copied_label.clone(),
            error_label: config.error_label.clone(),
            fallback_label: config.fallback_label.clone(),
            copied_class: config.copied_class.clone(),
            feedback_ms: config.copy_feedback_ms,
            pending: RefCell::new(HashMap::new()),
        }
    }

    fn target_text(&self, button: &P::Element) -> Result<String, BehaviorError> {
        let target_id = button
            .attribute(&self.target_attribute)
            .ok_or_else(|| BehaviorError::MissingAttribute {
                attribute: self.target_attribute.clone(),
            })?;
        let target = self
            .page
            .by_id(&target_id)
            .ok_or_else(|| BehaviorError::not_found(target_id.as_str()))?;
        Ok(target.text_content())
    }

    async fn write(&self, text: String) -> Result<(), BehaviorError> {
        if self.page.has_clipboard_api() {
            self.page.write_clipboard(text).await
        } else {
            debug!("Clipboard API unavailable, using the copy command");
            self.page.legacy_copy(&text)
        }
    }

    /// Cancels any revert still pending for `slot` and returns the label the
    /// button showed before feedback started.
    fn take_original_label(&self, slot: usize, button: &P::Element) -> String {
        let previous = self.pending.borrow_mut().remove(&slot);
        match previous {
            Some(pending) if !pending.settled.get() => pending.original_label,
            _ => button.text_content(),
        }
    }

    fn schedule_revert(
        &self,
        slot: usize,
        button: &P::Element,
        original_label: String,
        revert_label: String,
        clear_class: bool,
    ) {
        let settled = Rc::new(Cell::new(false));
        let timer = {
            let settled = settled.clone();
            let button = button.clone();
            let copied_class = self.copied_class.clone();
            self.page.set_timeout(
                self.feedback_ms,
                Box::new(move || {
                    button.set_text_content(&revert_label);
                    if clear_class {
                        button.remove_class(&copied_class);
                    }
                    settled.set(true);
                }),
            )
        };
        self.pending.borrow_mut().insert(
            slot,
            PendingRevert {
                original_label,
                settled,
                _timer: timer,
            },
        );
    }

    /// Copies the target text for the button in `slot` and updates its label.
    ///
    /// A missing target leaves the button untouched. A failed write shows the
    /// error label, which later reverts to the plain fallback label.
    pub async fn copy(&self, slot: usize, button: &P::Element) -> Result<(), BehaviorError> {
        let text = self.target_text(button)?;
        let result = self.write(text).await;

        let original_label = self.take_original_label(slot, button);
        match result {
            Ok(()) => {
                button.set_text_content(&self.copied_label);
                button.add_class(&self.copied_class);
                self.schedule_revert(slot, button, original_label.clone(), original_label, true);
                Ok(())
            }
            Err(err) => {
                button.set_text_content(&self.error_label);
                button.remove_class(&self.copied_class);
                self.schedule_revert(slot, button, original_label, self.fallback_label.clone(), false);
                Err(err)
            }
        }
    }

    pub async fn on_click(&self, slot: usize, button: &P::Element) {
        if let Err(err) = self.copy(slot, button).await {
            error!("{}", err);
        }
    }

    pub fn install(self, button_selector: &str) {
        let page = self.page.clone();
        let this = Rc::new(self);
        for (slot, button) in page.query_all(button_selector).into_iter().enumerate() {
            let this = this.clone();
            let spawner = page.clone();
            let clicked = button.clone();
            page.listen(
                ListenTarget::Element(button),
                EventKind::Click,
                Box::new(move |_| {
                    let this = this.clone();
                    let clicked = clicked.clone();
                    spawner.spawn(Box::pin(async move {
                        this.on_click(slot, &clicked).await;
                    }));
                    Dispatch::Proceed
                }),
            );
        }
    }
}
