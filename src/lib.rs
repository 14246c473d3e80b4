use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod controller;
pub mod error;
pub mod page;
pub mod web;
pub mod behaviors {
    pub mod analytics;
    pub mod anchor_scroll;
    pub mod copy_button;
    pub mod fade_in;
    pub mod keyboard_focus;
    pub mod mobile_menu;
    pub mod scroll_shadow;
}


use config::BehaviorConfig;
use controller::PageController;
use error::BehaviorError;
use web::WebPage;

fn init_logging() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already set, e.g. on a second start.
    if console_log::init_with_level(config::log_level()).is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Installs the page behaviors on the current document.
pub fn run(config: BehaviorConfig) -> Result<(), BehaviorError> {
    init_logging();
    info!("Starting page behaviors");
    let page = Rc::new(WebPage::new()?);
    PageController::new(page, config).start();
    Ok(())
}

#[wasm_bindgen(js_name = startPage)]
pub fn start() -> Result<(), JsValue> {
    run(BehaviorConfig::default()).map_err(JsValue::from)
}

/// Like `startPage`, with a plain object overriding any of the default
/// selectors, thresholds or labels.
#[wasm_bindgen(js_name = startPageWithConfig)]
pub fn start_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        BehaviorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| BehaviorError::Config(e.to_string()))?
    };
    run(config).map_err(JsValue::from)
}
