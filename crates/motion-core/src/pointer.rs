//! Global pointer tracking.
//!
//! One [`PointerTracker`] per page receives raw pointer-move and pointer-over
//! events and publishes a [`PointerState`]. Coordinates are stored raw;
//! smoothing happens downstream in each consumer's springs.

use crate::signal::{Signal, Watch};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub hovering: bool,
}

/// What the pointer is currently over, as far as hover classification cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Button,
    Link,
    Other,
}

impl TargetKind {
    /// Maps a DOM tag name (any case) to a kind.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("button") {
            TargetKind::Button
        } else if tag.eq_ignore_ascii_case("a") {
            TargetKind::Link
        } else {
            TargetKind::Other
        }
    }
}

/// Minimal description of a pointer-over target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverTarget {
    pub kind: TargetKind,
    /// Element carries `data-cursor-hover="true"` (see `HOVER_MARKER_ATTRIBUTE`).
    pub marked: bool,
}

impl HoverTarget {
    pub fn from_element(tag: &str, hover_attr: Option<&str>) -> Self {
        Self {
            kind: TargetKind::from_tag(tag),
            marked: hover_attr == Some("true"),
        }
    }

    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.marked || matches!(self.kind, TargetKind::Button | TargetKind::Link)
    }
}

pub struct PointerTracker {
    state: Signal<PointerState>,
    attached: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            state: Signal::new(PointerState::default()),
            attached: false,
        }
    }

    /// Marks the global listeners as installed. Returns false if they already were.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;
        log::debug!("[pointer] attached");
        true
    }

    /// Marks the global listeners as removed. Double-detach is a no-op.
    pub fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.attached = false;
        log::debug!("[pointer] detached");
        true
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Latest event wins. Ignored while detached. Non-finite coordinates are
    /// dropped so consumers keep the last good position.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if !self.attached {
            return;
        }
        if !x.is_finite() || !y.is_finite() {
            log::debug!("[pointer] ignoring non-finite move ({x}, {y})");
            return;
        }
        self.state.update(|s| {
            s.x = x;
            s.y = y;
        });
    }

    /// Classifies the element under the pointer. Only publishes on change.
    pub fn on_pointer_over(&mut self, target: HoverTarget) {
        if !self.attached {
            return;
        }
        let hovering = target.is_interactive();
        if self.state.get().hovering != hovering {
            self.state.update(|s| s.hovering = hovering);
        }
    }

    pub fn state(&self) -> PointerState {
        self.state.get()
    }

    pub fn subscribe(&self) -> Watch<PointerState> {
        self.state.watch()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.watcher_count()
    }
}
