use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BehaviorError {
    #[error("Target element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Element is missing the {attribute} attribute")]
    MissingAttribute { attribute: String },

    #[error("Failed to copy text: {0}")]
    Clipboard(String),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl BehaviorError {
    pub fn not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }
}

impl From<BehaviorError> for JsValue {
    fn from(err: BehaviorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
