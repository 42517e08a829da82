use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser capabilities the site leans on.
///
/// None of these reach the user. Components log them and fall back to a
/// static appearance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("no global window")]
    MissingWindow,
    #[error("{0} element is not mounted")]
    NotMounted(&'static str),
    #[error("2d drawing context unavailable")]
    ContextUnavailable,
    #[error("IntersectionObserver is not supported")]
    ObserverUnavailable,
    #[error("clipboard is not available")]
    ClipboardUnavailable,
    #[error("carousel needs at least one item")]
    EmptyCarousel,
    #[error("invalid site config: {0}")]
    Config(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Config(err.to_string())
    }
}
