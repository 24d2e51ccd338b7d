//! `requestAnimationFrame` loop.
//!
//! [`RafLoop`] re-registers itself every frame until stopped or dropped and
//! hands the callback the rAF timestamp in milliseconds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    closure: RefCell<Option<RafClosure>>,
    callback: RefCell<Box<dyn FnMut(f64)>>,
    running: Cell<bool>,
    raf_id: Cell<Option<i32>>,
}

pub struct RafLoop {
    inner: Rc<RafInner>,
}

fn request_frame(closure: &RafClosure) -> Option<i32> {
    let window = web::window()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| log::warn!("[raf] request failed: {:?}", e))
        .ok()
}

impl RafLoop {
    pub fn new(callback: impl FnMut(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(None),
            }),
        }
    }

    /// No-op if already running.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        // Weak so the closure stored inside `inner` does not keep it alive.
        let weak = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }
            (inner.callback.borrow_mut())(timestamp_ms);
            if inner.running.get() {
                if let Some(closure) = inner.closure.borrow().as_ref() {
                    inner.raf_id.set(request_frame(closure));
                }
            }
        }) as Box<dyn FnMut(f64)>);

        self.inner.raf_id.set(request_frame(&closure));
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Cancels the pending frame. The loop can be restarted.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        if let (Some(id), Some(window)) = (self.inner.raf_id.take(), web::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.closure.borrow_mut().take();
    }
}
