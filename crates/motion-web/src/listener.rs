use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// DOM event listener that detaches itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Option<Handler>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure: Some(closure),
        })
    }

    /// Detaches the handler. Safe to call more than once.
    pub fn remove(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.kind, closure.as_ref().unchecked_ref());
            log::debug!("[listener] removed `{}`", self.kind);
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.remove();
    }
}
