use crate::error::SiteError;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// A window event listener that is removed again when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl Fn() + 'static) -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::MissingWindow)?;
        let callback = Closure::<dyn Fn()>::new(handler);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", self.event, e);
            }
        }
    }
}
