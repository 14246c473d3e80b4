use std::rc::Rc;

use log::info;

use crate::behaviors::{
    analytics::Analytics, anchor_scroll::AnchorScroll, copy_button::CopyButtons, fade_in::FadeIn,
    keyboard_focus::{focus_outline_css, KeyboardFocus},
    mobile_menu::MobileMenu, scroll_shadow::ScrollShadow,
};
use crate::config::BehaviorConfig;
use crate::page::{Dispatch, EventKind, ListenTarget, Page};

/// Wires every page behavior onto one [`Page`].
pub struct PageController<P: Page> {
    page: Rc<P>,
    config: BehaviorConfig,
}

impl<P: Page> PageController<P> {
    pub fn new(page: Rc<P>, config: BehaviorConfig) -> Self {
        Self { page, config }
    }

    pub fn install_styles(&self) {
        self.page.inject_style(&focus_outline_css(&self.config));
    }

    /// Binds all behaviors. Each one checks for its own markup and stays
    /// quiet when the page doesn't have it.
    pub fn install(&self) {
        let page = &self.page;
        let config = &self.config;

        AnchorScroll::new(page.clone(), config).install(&config.anchor_selector);
        CopyButtons::new(page.clone(), config).install(&config.copy_button_selector);

        if let Some(shadow) = ScrollShadow::find(page.clone(), config) {
            shadow.install();
        }

        let animated = FadeIn::new(page.clone(), config).install();

        match MobileMenu::find(page.clone(), config) {
            Some(menu) => menu.install(&config.nav_link_selector),
            None => info!("No mobile menu on this page"),
        }

        let tracked = Analytics::new(page.clone(), config).install(&config.tracked);
        KeyboardFocus::new(page.clone(), config).install();

        info!(
            "Page behaviors installed ({} animated elements, {} tracked elements)",
            animated, tracked
        );
    }

    /// Injects styles right away and installs the behaviors once the DOM is ready.
    pub fn start(self) {
        self.install_styles();
        if !self.page.is_loading() {
            self.install();
            return;
        }

        let page = self.page.clone();
        let mut pending = Some(self);
        page.listen(
            ListenTarget::Document,
            EventKind::DomContentLoaded,
            Box::new(move |_| {
                if let Some(controller) = pending.take() {
                    controller.install();
                }
                Dispatch::Proceed
            }),
        );
    }
}
