#![cfg(target_arch = "wasm32")]
use motion_core::constants::LOADER_GATE_SEC;
use motion_core::{EngineConfig, MotionEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod dom;
mod events;
mod interval;
mod listener;
mod raf;
mod render;

use interval::WebIntervalHost;
use listener::EventListener;
use raf::RafLoop;

pub(crate) type SharedEngine = Rc<RefCell<MotionEngine<WebIntervalHost>>>;

/// Everything owned for the lifetime of the page. Dropping it stops the
/// frame loop, detaches every listener and cancels the waveform timer.
struct App {
    engine: SharedEngine,
    raf: RafLoop,
    _listeners: Vec<EventListener>,
}

impl Drop for App {
    fn drop(&mut self) {
        self.raf.stop();
        if let Ok(mut eng) = self.engine.try_borrow_mut() {
            eng.stop();
        }
        log::info!("[app] torn down");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tears the engine down. Calling it again is a no-op.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    drop(app);
}

async fn sleep_ms(window: &web::Window, ms: i32) -> anyhow::Result<()> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms) {
            log::warn!("[app] setTimeout failed: {:?}", e);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let engine: SharedEngine = Rc::new(RefCell::new(MotionEngine::new(
        EngineConfig::default(),
        WebIntervalHost::new(),
    )?));

    {
        let weak = Rc::downgrade(&engine);
        engine.borrow_mut().timers_mut().set_callback(move || {
            if let Some(engine) = weak.upgrade() {
                engine.borrow_mut().on_waveform_refresh();
            }
        });
    }

    dom::measure_layout(&window, &document, &mut engine.borrow_mut());
    let listeners = events::wire(&window, &document, &engine)?;

    let painter = render::Painter::new(&document, &engine.borrow().render_state());
    let raf = {
        let engine = Rc::clone(&engine);
        RafLoop::new(move |timestamp_ms| {
            let mut eng = engine.borrow_mut();
            if eng.frame(timestamp_ms / 1000.0).is_none() {
                return;
            }
            let dirty = eng.take_dirty();
            if dirty.any() {
                painter.paint(&eng.render_state(), dirty);
            }
        })
    };

    engine.borrow_mut().start();
    raf.start();
    log::info!("[app] frame loop running");

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            engine,
            raf,
            _listeners: listeners,
        })
    });

    sleep_ms(&window, (LOADER_GATE_SEC * 1000.0) as i32).await?;
    dom::reveal_content(&document);
    log::info!("[app] loader gate passed");
    Ok(())
}
