use motion_core::constants::NAV_ITEMS;
use motion_core::{MotionEngine, NavSlot, Rect, TimerHost};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Element rect in viewport px.
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

pub fn nav_item_id(section_id: &str) -> String {
    format!("nav-{section_id}")
}

/// Feeds section, nav and card-grid layout into the engine. Called at init
/// and on every resize.
pub fn measure_layout<H: TimerHost>(
    window: &web::Window,
    document: &web::Document,
    engine: &mut MotionEngine<H>,
) {
    let scroll = scroll_y(window);
    for (id, _) in NAV_ITEMS {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("[dom] missing section #{id}");
            continue;
        };
        let rect = client_rect(&el);
        if let Err(e) = engine.set_section_geometry(id, rect.y + scroll, rect.height) {
            log::warn!("[dom] {e}");
        }
    }

    let header_left = html_element(document, "site-nav")
        .map(|el| client_rect(&el).x)
        .unwrap_or(0.0);
    for (i, (id, _)) in NAV_ITEMS.iter().enumerate() {
        if let Some(el) = document.get_element_by_id(&nav_item_id(id)) {
            let rect = client_rect(&el);
            engine.set_nav_slot(
                i,
                NavSlot {
                    left: rect.x - header_left,
                    width: rect.width,
                },
            );
        }
    }

    let grid = document
        .get_element_by_id("barma-grid")
        .map(|el| client_rect(&el));
    engine.set_card_grid(grid);

    let (w, h) = viewport_size(window);
    engine.on_resize(w, h);
    engine.on_scroll(scroll);
}

/// Drops the loading class so page content becomes visible.
pub fn reveal_content(document: &web::Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1("is-loading");
    }
}
