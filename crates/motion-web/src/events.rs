use crate::dom;
use crate::listener::EventListener;
use crate::SharedEngine;
use motion_core::constants::HOVER_MARKER_ATTRIBUTE;
use motion_core::HoverTarget;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Classifies a `mouseover` target. Only the target itself is inspected,
/// not its ancestors.
pub fn hover_target(ev: &web::Event) -> HoverTarget {
    match ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
        Some(el) => HoverTarget::from_element(
            &el.tag_name(),
            el.get_attribute(HOVER_MARKER_ATTRIBUTE).as_deref(),
        ),
        None => HoverTarget::from_element("", None),
    }
}

/// Installs every global and element listener the engine needs. Dropping
/// the returned listeners detaches them.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    engine: &SharedEngine,
) -> anyhow::Result<Vec<EventListener>> {
    let mut listeners = Vec::new();

    {
        let engine = Rc::clone(engine);
        listeners.push(EventListener::new(window, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                engine
                    .borrow_mut()
                    .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
            }
        })?);
    }

    {
        let engine = Rc::clone(engine);
        listeners.push(EventListener::new(document, "mouseover", move |ev| {
            engine.borrow_mut().on_pointer_over(hover_target(&ev));
        })?);
    }

    {
        let engine = Rc::clone(engine);
        let document = document.clone();
        let win = window.clone();
        listeners.push(EventListener::new(window, "scroll", move |_| {
            let mut eng = engine.borrow_mut();
            let grid = document
                .get_element_by_id("barma-grid")
                .map(|el| dom::client_rect(&el));
            eng.set_card_grid(grid);
            eng.on_scroll(dom::scroll_y(&win));
        })?);
    }

    {
        let engine = Rc::clone(engine);
        let document = document.clone();
        let win = window.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            dom::measure_layout(&win, &document, &mut engine.borrow_mut());
        })?);
    }

    for (id, toggle) in [
        ("play-toggle", Toggle::Playing),
        ("lyrics-toggle", Toggle::Lyrics),
    ] {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("[events] missing #{id}, toggle disabled");
            continue;
        };
        let engine = Rc::clone(engine);
        listeners.push(EventListener::new(&el, "click", move |_| {
            let mut eng = engine.borrow_mut();
            let on = match toggle {
                Toggle::Playing => eng.toggle_playing(),
                Toggle::Lyrics => eng.toggle_lyrics(),
            };
            log::info!("[events] {:?} -> {}", toggle, on);
        })?);
    }

    log::info!("[events] {} listeners attached", listeners.len());
    Ok(listeners)
}

#[derive(Clone, Copy, Debug)]
enum Toggle {
    Playing,
    Lyrics,
}
