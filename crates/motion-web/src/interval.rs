use motion_core::TimerHost;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setInterval`-backed timer host. Every interval it arms calls the same
/// callback, installed once with [`set_callback`](Self::set_callback).
#[derive(Default)]
pub struct WebIntervalHost {
    callback: Option<Closure<dyn FnMut()>>,
}

impl WebIntervalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&mut self, f: impl FnMut() + 'static) {
        self.callback = Some(Closure::wrap(Box::new(f) as Box<dyn FnMut()>));
    }
}

impl TimerHost for WebIntervalHost {
    /// `None` when the browser refused the timer.
    type Handle = Option<i32>;

    fn set_interval(&mut self, period: Duration) -> Self::Handle {
        let window = web::window()?;
        let callback = self.callback.as_ref()?;
        let ms = period.as_millis().min(i32::MAX as u128) as i32;
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| log::warn!("[interval] setInterval failed: {:?}", e))
            .ok()
    }

    fn clear_interval(&mut self, handle: Self::Handle) {
        if let (Some(id), Some(window)) = (handle, web::window()) {
            window.clear_interval_with_handle(id);
        }
    }
}
