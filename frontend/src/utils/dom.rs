use crate::animations::ambient::Viewport;
use crate::error::SiteError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, window, ScrollBehavior, ScrollIntoViewOptions};

pub fn viewport() -> Result<Viewport, SiteError> {
    let window = window().ok_or(SiteError::MissingWindow)?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport { width, height })
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smooth-scrolls the element with `id` into view. Missing elements are ignored.
pub fn scroll_into_view(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn supports_intersection_observer() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Writes `text` through the async clipboard API.
pub async fn write_clipboard(text: &str) -> Result<(), SiteError> {
    let window = window().ok_or(SiteError::MissingWindow)?;
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(SiteError::ClipboardUnavailable);
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}
