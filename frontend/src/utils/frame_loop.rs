use crate::error::SiteError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Calls `on_frame` once per display frame until dropped.
///
/// The callback receives the milliseconds elapsed since the previous frame
/// (zero on the first one). Dropping the loop cancels the pending frame and
/// releases the closure.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::MissingWindow)?;
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let pending = pending.clone();
            // Weak so the closure does not keep itself alive.
            let this = Rc::downgrade(&callback);
            let mut last: Option<f64> = None;
            Closure::<dyn FnMut(f64)>::new(move |now: f64| {
                pending.set(None);
                let elapsed = last.map(|prev| now - prev).unwrap_or(0.0);
                last = Some(now);
                on_frame(elapsed);

                let Some(cell) = this.upgrade() else {
                    return;
                };
                let guard = cell.borrow();
                if let Some(cb) = guard.as_ref() {
                    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => log::error!("Failed to schedule frame: {:?}", e),
                    }
                }
            })
        };

        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(closure);
        log::debug!("Frame loop started");
        Ok(Self { pending, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
        log::debug!("Frame loop stopped");
    }
}
