use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) -> bool {
    web_sys::window()
        .and_then(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()).ok())
        .is_some()
}

/// A `requestAnimationFrame` loop. `tick` gets the frame timestamp in
/// milliseconds and returns `false` to end the loop. Dropping the handle
/// ends it on the next frame.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let handle = slot.clone();
        let alive = running.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !alive.get() || !tick(timestamp) {
                alive.set(false);
                // Releases this closure; nothing else holds it.
                let _ = handle.borrow_mut().take();
                return;
            }
            if let Some(callback) = handle.borrow().as_ref() {
                request_frame(callback);
            }
        }) as Box<dyn FnMut(f64)>));

        let scheduled = slot.borrow().as_ref().map(request_frame).unwrap_or(false);
        if !scheduled {
            running.set(false);
            slot.borrow_mut().take();
        }

        Self { running }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.running.set(false);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
