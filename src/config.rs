use log::Level;
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Selectors, thresholds and labels the behaviors work with.
///
/// Every field has a default matching the stock marketing page markup, so a
/// host page only passes the fields it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub nav_selector: String,
    pub nav_toggle_selector: String,
    pub nav_menu_selector: String,
    pub nav_link_selector: String,
    pub anchor_selector: String,
    pub copy_button_selector: String,
    pub copy_target_attribute: String,
    pub animated_selectors: Vec<String>,

    /// Gap left between the fixed nav and a scrolled-to section.
    pub anchor_offset: f64,
    pub scroll_shadow_threshold: f64,
    pub nav_shadow: String,

    pub copy_feedback_ms: u32,
    pub copied_label: String,
    pub error_label: String,
    /// Label restored after a failed copy. Not the button's original label.
    pub fallback_label: String,
    pub copied_class: String,

    pub fade_offset_px: f64,
    pub fade_duration_secs: f64,
    pub fade_threshold: f64,
    pub fade_root_margin: String,

    pub menu_active_class: String,
    pub keyboard_nav_class: String,
    pub focus_outline_var: String,

    pub analytics_function: String,
    pub tracked: Vec<TrackedEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackedEvent {
    pub event: String,
    pub selector: String,
}

impl TrackedEvent {
    fn new(event: &str, selector: &str) -> Self {
        Self {
            event: event.to_string(),
            selector: selector.to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            nav_selector: ".nav".to_string(),
            nav_toggle_selector: ".nav-toggle".to_string(),
            nav_menu_selector: ".nav-links".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            copy_button_selector: ".copy-btn".to_string(),
            copy_target_attribute: "data-target".to_string(),
            animated_selectors: vec![
                ".problem-card".to_string(),
                ".feature-card".to_string(),
                ".value-prop".to_string(),
                ".workflow-step".to_string(),
            ],
            anchor_offset: 20.0,
            scroll_shadow_threshold: 50.0,
            nav_shadow: "0 4px 12px rgba(0, 0, 0, 0.3)".to_string(),
            copy_feedback_ms: 2000,
            copied_label: "Copied!".to_string(),
            error_label: "Error".to_string(),
            fallback_label: "Copy".to_string(),
            copied_class: "copied".to_string(),
            fade_offset_px: 20.0,
            fade_duration_secs: 0.6,
            fade_threshold: 0.1,
            fade_root_margin: "0px 0px -100px 0px".to_string(),
            menu_active_class: "active".to_string(),
            keyboard_nav_class: "keyboard-nav".to_string(),
            focus_outline_var: "--color-primary".to_string(),
            analytics_function: "plausible".to_string(),
            tracked: vec![
                TrackedEvent::new("install-button", "a[href=\"#install\"]"),
                TrackedEvent::new("github-button", "a[href*=\"github.com\"]"),
                TrackedEvent::new("copy-install", ".copy-btn"),
            ],
        }
    }
}

impl BehaviorConfig {
    /// The animated selectors as a single selector list, matched in document order.
    pub fn animated_selector_list(&self) -> String {
        self.animated_selectors.join(", ")
    }
}
