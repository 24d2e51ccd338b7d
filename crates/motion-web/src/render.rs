//! Writes a [`RenderState`] into element styles.
//!
//! Elements are looked up once; anything missing from the page is skipped.

use crate::dom::{self, set_style};
use motion_core::constants::NAV_ITEMS;
use motion_core::{Dirty, LayerPose, Pose, RenderState, Transform};
use wasm_bindgen::JsCast;
use web_sys as web;

fn rgba(c: [f32; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (c[0] * 255.0).round(),
        (c[1] * 255.0).round(),
        (c[2] * 255.0).round(),
        c[3]
    )
}

fn paint_layer(el: &web::HtmlElement, pose: &LayerPose) {
    set_style(
        el,
        "transform",
        &format!("translate3d({:.2}px, {:.2}px, 0) scale({:.3})", pose.x, pose.y, pose.scale),
    );
    let size = format!("{:.2}px", pose.size);
    set_style(el, "width", &size);
    set_style(el, "height", &size);
    set_style(el, "opacity", &format!("{:.3}", pose.opacity));
    set_style(el, "background-color", &rgba(pose.color));
}

fn paint_pose(el: &web::HtmlElement, pose: Pose) {
    set_style(el, "opacity", &format!("{:.3}", pose.opacity));
    set_style(
        el,
        "transform",
        &format!("translate({:.2}px, {:.2}px)", pose.offset_x, pose.offset_y),
    );
}

fn paint_transform(el: &web::HtmlElement, t: &Transform) {
    let r = t.rotation;
    set_style(
        el,
        "transform",
        &format!(
            "translate3d({:.3}em, {:.3}em, {:.3}em) rotateX({:.4}rad) rotateY({:.4}rad) rotateZ({:.4}rad) scale({:.3})",
            t.position.x, -t.position.y, t.position.z, r.x, r.y, r.z, t.scale
        ),
    );
    set_style(el, "opacity", &format!("{:.3}", t.opacity));
}

struct RegionElements {
    container: Option<web::HtmlElement>,
    children: Vec<web::HtmlElement>,
}

pub struct Painter {
    disc: Option<web::HtmlElement>,
    trail: Option<web::HtmlElement>,
    header: Option<web::HtmlElement>,
    underline: Option<web::HtmlElement>,
    nav_items: Vec<Option<web::HtmlElement>>,
    regions: Vec<RegionElements>,
    vinyl: Option<web::HtmlElement>,
    disc_group: Option<web::HtmlElement>,
    particles: Option<web::HtmlElement>,
    glows: [Option<web::HtmlElement>; 2],
    orbit: Vec<web::HtmlElement>,
    bars: Vec<web::HtmlElement>,
    lyrics_panel: Option<web::HtmlElement>,
    lyric_lines: Vec<web::HtmlElement>,
    portrait: Option<web::HtmlElement>,
    backdrop: Option<web::HtmlElement>,
    scroll_hint: Option<web::HtmlElement>,
    cards: Vec<web::HtmlElement>,
    loader: Option<web::HtmlElement>,
    loader_bar: Option<web::HtmlElement>,
    loader_spinner: Option<web::HtmlElement>,
}

impl Painter {
    pub fn new(document: &web::Document, state: &RenderState) -> Self {
        let by_id = |id: &str| dom::html_element(document, id);
        let regions = state
            .regions
            .iter()
            .map(|r| RegionElements {
                container: document
                    .query_selector(&format!("[data-reveal=\"{}\"]", r.id))
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
                children: dom::html_elements(
                    document,
                    &format!("[data-reveal-child=\"{}\"]", r.id),
                ),
            })
            .collect();
        Self {
            disc: by_id("cursor-disc"),
            trail: by_id("cursor-trail"),
            header: by_id("site-header"),
            underline: by_id("nav-underline"),
            nav_items: NAV_ITEMS
                .iter()
                .map(|(id, _)| by_id(&dom::nav_item_id(id)))
                .collect(),
            regions,
            vinyl: by_id("vinyl"),
            disc_group: by_id("disc-group"),
            particles: by_id("particle-field"),
            glows: [by_id("glow-primary"), by_id("glow-secondary")],
            orbit: dom::html_elements(document, ".orbit-particle"),
            bars: dom::html_elements(document, ".waveform-bar"),
            lyrics_panel: by_id("lyrics-panel"),
            lyric_lines: dom::html_elements(document, ".lyric-line"),
            portrait: by_id("hero-portrait"),
            backdrop: by_id("hero-backdrop"),
            scroll_hint: by_id("scroll-hint"),
            cards: dom::html_elements(document, ".law-card"),
            loader: by_id("loader"),
            loader_bar: by_id("loader-bar"),
            loader_spinner: by_id("loader-spinner"),
        }
    }

    pub fn paint(&self, s: &RenderState, dirty: Dirty) {
        if dirty.cursor {
            if let Some(el) = &self.disc {
                paint_layer(el, &s.disc);
            }
            if let Some(el) = &self.trail {
                paint_layer(el, &s.trail);
            }
        }
        if dirty.header || dirty.sections {
            self.paint_header(s);
        }
        if dirty.reveals {
            for (els, pose) in self.regions.iter().zip(&s.regions) {
                if let Some(el) = &els.container {
                    paint_pose(el, pose.container);
                }
                for (el, child) in els.children.iter().zip(&pose.children) {
                    paint_pose(el, *child);
                }
            }
        }
        if dirty.music {
            self.paint_music(s);
        }
        if dirty.visuals {
            let v = &s.visuals;
            if let Some(el) = &self.vinyl {
                paint_transform(el, &v.disc_spin);
            }
            if let Some(el) = &self.disc_group {
                paint_transform(el, &v.disc_float);
            }
            if let Some(el) = &self.particles {
                paint_transform(el, &v.particle_field);
            }
            for (el, t) in self.glows.iter().zip([&v.glow_primary, &v.glow_secondary]) {
                if let Some(el) = el {
                    paint_transform(el, t);
                }
            }
        }
        if dirty.hero {
            self.paint_hero(s);
        }
        if dirty.cards {
            for (el, tilt) in self.cards.iter().zip(&s.card_tilts) {
                set_style(
                    el,
                    "transform",
                    &format!(
                        "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg)",
                        tilt.rot_x, tilt.rot_y
                    ),
                );
            }
        }
        if dirty.loader {
            self.paint_loader(s);
        }
    }

    fn paint_header(&self, s: &RenderState) {
        if let Some(el) = &self.header {
            let [r, g, b, a] = s.header_rgba;
            set_style(el, "background-color", &format!("rgba({r}, {g}, {b}, {a:.3})"));
        }
        if let Some(el) = &self.underline {
            set_style(el, "left", &format!("{:.2}px", s.nav_underline.left));
            set_style(el, "width", &format!("{:.2}px", s.nav_underline.width));
        }
        for (i, (el, (opacity, y))) in self.nav_items.iter().zip(&s.nav_items).enumerate() {
            let Some(el) = el else { continue };
            set_style(el, "opacity", &format!("{opacity:.3}"));
            set_style(el, "transform", &format!("translateY({y:.2}px)"));
            let _ = if i == s.active_section {
                el.class_list().add_1("active")
            } else {
                el.class_list().remove_1("active")
            };
        }
    }

    fn paint_music(&self, s: &RenderState) {
        for (el, h) in self.bars.iter().zip(s.waveform.iter()) {
            set_style(el, "height", &format!("{h:.2}%"));
        }
        for (el, p) in self.orbit.iter().zip(s.orbit.iter()) {
            set_style(el, "left", &format!("{:.2}%", p.position_pct.x));
            set_style(el, "top", &format!("{:.2}%", p.position_pct.y));
            set_style(el, "opacity", &format!("{:.3}", p.opacity));
            set_style(el, "transform", &format!("scale({:.3})", p.scale));
        }
        if let Some(el) = &self.lyrics_panel {
            paint_pose(el, s.lyrics_panel);
        }
        for (el, pose) in self.lyric_lines.iter().zip(&s.lyric_lines) {
            paint_pose(el, *pose);
        }
    }

    fn paint_hero(&self, s: &RenderState) {
        if let Some(el) = &self.portrait {
            let sway = s.visuals.hero_sway.rotation.y.to_degrees();
            set_style(
                el,
                "transform",
                &format!(
                    "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg)",
                    s.profile_tilt.rot_x,
                    s.profile_tilt.rot_y + sway
                ),
            );
        }
        if let Some(el) = &self.backdrop {
            set_style(
                el,
                "filter",
                &format!(
                    "blur({:.1}px) brightness({:.3})",
                    s.backdrop.blur, s.backdrop.brightness
                ),
            );
        }
        if let Some(el) = &self.scroll_hint {
            let t = &s.visuals.scroll_hint;
            set_style(el, "opacity", &format!("{:.3}", t.opacity));
            set_style(el, "transform", &format!("translateY({:.2}px)", t.position.y));
        }
    }

    fn paint_loader(&self, s: &RenderState) {
        let l = &s.loader;
        if let Some(el) = &self.loader {
            set_style(el, "opacity", &format!("{:.3}", l.opacity));
            if l.opacity <= 0.0 {
                set_style(el, "display", "none");
            }
        }
        if let Some(el) = &self.loader_bar {
            set_style(el, "width", &format!("{:.2}%", l.progress * 100.0));
        }
        if let Some(el) = &self.loader_spinner {
            set_style(el, "transform", &format!("rotate({:.2}deg)", l.spin_deg));
            set_style(el, "opacity", &format!("{:.3}", l.glow_opacity));
        }
    }
}
