//! Error types for widget setup and host operations.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while wiring widgets to a page or driving their host.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// A required element was not found
    #[error("Missing element: {selector}")]
    MissingElement {
        /// Selector or id that was looked up
        selector: String,
    },

    /// A DOM call failed (the JS exception, stringified)
    #[error("DOM error: {0}")]
    Dom(String),

    /// Thumbnail data could not be decoded
    #[error("Invalid thumbnail data: {0}")]
    Data(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WidgetError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WidgetError> for wasm_bindgen::JsValue {
    fn from(err: WidgetError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            WidgetError::missing("#carouselGrid").to_string(),
            "Missing element: #carouselGrid"
        );
        let config_err = WidgetError::from(ConfigError::Invalid("bad".to_string()));
        assert_eq!(config_err.to_string(), "Invalid configuration: bad");
    }
}
