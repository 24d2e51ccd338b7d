//! Scroll-driven active section tracking and the header that follows it.

use crate::constants::{
    HEADER_FADE_SCROLL_PX, HEADER_MAX_ALPHA, HEADER_RGB, NAV_ENTER_DURATION_SEC,
    NAV_ENTER_OFFSET_PX, NAV_ENTER_STAGGER_SEC, SECTION_LOOKAHEAD_PX,
};
use crate::easing::{Easing, Tween};
use crate::error::MotionError;
use crate::spring::{Spring, SpringConfig};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionDescriptor {
    pub id: String,
    pub top_offset: f32,
    pub height: f32,
}

impl SectionDescriptor {
    #[inline]
    fn contains(&self, y: f32) -> bool {
        y >= self.top_offset && y < self.top_offset + self.height
    }
}

/// Picks exactly one active section from a fixed, ordered list.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    sections: Vec<SectionDescriptor>,
    bias: f32,
    active: usize,
}

impl SectionTracker {
    /// Sections start with zero geometry; the first one is active until a
    /// layout and scroll say otherwise.
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<Self, MotionError> {
        let mut sections: Vec<SectionDescriptor> = Vec::new();
        for id in ids {
            if sections.iter().any(|s| s.id == id) {
                return Err(MotionError::DuplicateSection(id.to_owned()));
            }
            sections.push(SectionDescriptor {
                id: id.to_owned(),
                top_offset: 0.0,
                height: 0.0,
            });
        }
        if sections.is_empty() {
            return Err(MotionError::EmptySectionList);
        }
        Ok(Self {
            sections,
            bias: SECTION_LOOKAHEAD_PX,
            active: 0,
        })
    }

    /// Builds a tracker with known geometry: `(id, top, height)` triples.
    pub fn with_layout<'a>(
        layout: impl IntoIterator<Item = (&'a str, f32, f32)>,
    ) -> Result<Self, MotionError> {
        let layout: Vec<_> = layout.into_iter().collect();
        let mut tracker = Self::new(layout.iter().map(|(id, _, _)| *id))?;
        for (i, (_, top, height)) in layout.into_iter().enumerate() {
            tracker.sections[i].top_offset = top;
            tracker.sections[i].height = height;
        }
        Ok(tracker)
    }

    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Recomputed layout for one section (on resize or first layout).
    pub fn set_geometry(&mut self, id: &str, top_offset: f32, height: f32) -> Result<(), MotionError> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| MotionError::UnknownSection(id.to_owned()))?;
        section.top_offset = top_offset;
        section.height = height;
        Ok(())
    }

    /// Scroll handler. Returns the new active index if it changed.
    ///
    /// The first section (in list order) whose interval contains
    /// `scroll_offset + bias` wins; with no match the previous id is kept.
    pub fn on_scroll(&mut self, scroll_offset: f32) -> Option<usize> {
        let y = scroll_offset + self.bias;
        if !y.is_finite() {
            return None;
        }
        let found = self.sections.iter().position(|s| s.contains(y))?;
        if found == self.active {
            return None;
        }
        log::debug!(
            "[sections] active {} -> {}",
            self.sections[self.active].id,
            self.sections[found].id
        );
        self.active = found;
        Some(found)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> &str {
        &self.sections[self.active].id
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

/// Header backdrop alpha for a scroll offset: linear over the first
/// `HEADER_FADE_SCROLL_PX`, clamped.
pub fn header_backdrop_alpha(scroll_offset: f32) -> f32 {
    if !scroll_offset.is_finite() {
        return 0.0;
    }
    (scroll_offset / HEADER_FADE_SCROLL_PX).clamp(0.0, 1.0) * HEADER_MAX_ALPHA
}

/// Header backdrop as RGBA (RGB in 0..255, alpha in 0..1).
pub fn header_backdrop_rgba(scroll_offset: f32) -> [f32; 4] {
    let [r, g, b] = HEADER_RGB;
    [r, g, b, header_backdrop_alpha(scroll_offset)]
}

/// Left edge and width of one nav item in header-local px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavSlot {
    pub left: f32,
    pub width: f32,
}

/// Underline that springs under the active nav item.
#[derive(Clone, Debug)]
pub struct NavIndicator {
    slots: Vec<NavSlot>,
    /// x = left, y = width
    spring: Spring<Vec2>,
    placed: bool,
}

impl NavIndicator {
    pub fn new(item_count: usize) -> Self {
        Self {
            slots: vec![NavSlot::default(); item_count],
            spring: Spring::new(Vec2::ZERO, SpringConfig::NAV_INDICATOR),
            placed: false,
        }
    }

    pub fn set_slot(&mut self, index: usize, slot: NavSlot) {
        if let Some(s) = self.slots.get_mut(index) {
            *s = slot;
        }
    }

    /// Points the underline at `index`. The very first placement snaps.
    pub fn follow(&mut self, index: usize) {
        let Some(slot) = self.slots.get(index) else {
            return;
        };
        let target = Vec2::new(slot.left, slot.width);
        if self.placed {
            self.spring.set_target(target);
        } else {
            self.spring.snap_to(target);
            self.placed = true;
        }
    }

    pub fn step(&mut self, dt: f32) -> NavSlot {
        let v = self.spring.step(dt);
        NavSlot {
            left: v.x,
            width: v.y,
        }
    }

    pub fn current(&self) -> NavSlot {
        let v = self.spring.value();
        NavSlot {
            left: v.x,
            width: v.y,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

/// On-load entrance of the nav items: each drops in from above with a
/// small stagger.
#[derive(Clone, Debug)]
pub struct NavEntrance {
    opacity: Vec<Tween>,
    offset: Vec<Tween>,
}

impl NavEntrance {
    pub fn new(item_count: usize) -> Self {
        let tween = |from: f32, to: f32, i: usize| {
            Tween::new(from, to, NAV_ENTER_DURATION_SEC, Easing::EaseOut)
                .with_delay(NAV_ENTER_STAGGER_SEC * i as f32)
        };
        Self {
            opacity: (0..item_count).map(|i| tween(0.0, 1.0, i)).collect(),
            offset: (0..item_count)
                .map(|i| tween(NAV_ENTER_OFFSET_PX, 0.0, i))
                .collect(),
        }
    }

    pub fn step(&mut self, dt: f32) {
        for t in self.opacity.iter_mut().chain(self.offset.iter_mut()) {
            t.advance(dt);
        }
    }

    /// `(opacity, offset_y)` for item `index`.
    pub fn item(&self, index: usize) -> (f32, f32) {
        match (self.opacity.get(index), self.offset.get(index)) {
            (Some(o), Some(y)) => (o.value(), y.value()),
            _ => (1.0, 0.0),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.opacity.iter().all(Tween::is_finished)
    }
}
