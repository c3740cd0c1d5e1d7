use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("an access token is required")]
    EmptyToken,
    #[error("the map is already loading")]
    AlreadyInitializing,
    #[error("the map is already loaded")]
    AlreadyReady,
    #[error("map container is not mounted")]
    MissingContainer,
    #[error("failed to load the map library: {0}")]
    LibraryLoad(String),
    #[error("failed to construct the map: {0}")]
    Construction(String),
    #[error("browser API unavailable: {0}")]
    Browser(String),
}

/// Best-effort message for a value thrown from JavaScript.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
