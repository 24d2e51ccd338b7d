//! Viewport intersection tracking for named regions.
//!
//! Callers register a region once, then feed fresh geometry on every scroll
//! or resize. The observer reports ENTER/EXIT transitions; regions registered
//! with `fire_once` latch visible after their first entry.

use crate::constants::DEFAULT_VISIBILITY_THRESHOLD;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Axis-aligned rectangle in viewport coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Visible viewport size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Fraction of `rect`'s area inside the viewport, in [0, 1].
/// Degenerate or malformed geometry yields 0.
pub fn visible_fraction(rect: Rect, viewport: Viewport) -> f32 {
    if !rect.is_well_formed() || !viewport.width.is_finite() || !viewport.height.is_finite() {
        return 0.0;
    }
    let left = rect.x.max(0.0);
    let top = rect.y.max(0.0);
    let right = (rect.x + rect.width).min(viewport.width);
    let bottom = (rect.y + rect.height).min(viewport.height);
    let w = (right - left).max(0.0);
    let h = (bottom - top).max(0.0);
    ((w * h) / (rect.width * rect.height)).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Minimum visible area fraction, clamped to [0, 1].
    pub threshold: f32,
    /// Latch visible after the first entry.
    pub fire_once: bool,
    /// Section-specific policy flag: consumers should reset transient state
    /// (e.g. playback) when this region exits. Ignored when `fire_once`.
    pub reset_on_exit: bool,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            fire_once: false,
            reset_on_exit: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityRecord {
    pub region_id: String,
    pub threshold: f32,
    pub is_visible: bool,
    pub fire_once: bool,
    pub has_fired: bool,
    pub reset_on_exit: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionHandle(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityChange {
    pub handle: RegionHandle,
    pub transition: Transition,
    pub reset_on_exit: bool,
}

pub type ChangeList = SmallVec<[VisibilityChange; 4]>;

#[derive(Default)]
pub struct VisibilityObserver {
    records: FnvHashMap<RegionHandle, VisibilityRecord>,
    next_handle: u32,
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, region_id: &str, threshold: f32, fire_once: bool) -> RegionHandle {
        self.register_with(
            region_id,
            ObserveOptions {
                threshold,
                fire_once,
                ..ObserveOptions::default()
            },
        )
    }

    pub fn register_with(&mut self, region_id: &str, options: ObserveOptions) -> RegionHandle {
        let threshold = if options.threshold.is_finite() {
            options.threshold.clamp(0.0, 1.0)
        } else {
            log::warn!(
                "[visibility] non-finite threshold for `{region_id}`, using {DEFAULT_VISIBILITY_THRESHOLD}"
            );
            DEFAULT_VISIBILITY_THRESHOLD
        };
        let handle = RegionHandle(self.next_handle);
        self.next_handle += 1;
        self.records.insert(
            handle,
            VisibilityRecord {
                region_id: region_id.to_owned(),
                threshold,
                is_visible: false,
                fire_once: options.fire_once,
                has_fired: false,
                reset_on_exit: options.reset_on_exit && !options.fire_once,
            },
        );
        log::debug!("[visibility] observing `{region_id}` threshold={threshold:.2}");
        handle
    }

    /// Stops observing. Returns false if the handle was already gone.
    pub fn unregister(&mut self, handle: RegionHandle) -> bool {
        self.records.remove(&handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, handle: RegionHandle) -> Option<&VisibilityRecord> {
        self.records.get(&handle)
    }

    /// Unknown handles read as not visible.
    pub fn is_visible(&self, handle: RegionHandle) -> bool {
        self.records.get(&handle).is_some_and(|r| r.is_visible)
    }

    pub fn region_id(&self, handle: RegionHandle) -> Option<&str> {
        self.records.get(&handle).map(|r| r.region_id.as_str())
    }

    /// Re-evaluates one region. `None` geometry (element missing from the
    /// layout) counts as fully out of view.
    pub fn evaluate(
        &mut self,
        handle: RegionHandle,
        geometry: Option<Rect>,
        viewport: Viewport,
    ) -> Option<VisibilityChange> {
        let record = self.records.get_mut(&handle)?;
        if record.fire_once && record.has_fired {
            return None;
        }
        let fraction = geometry.map_or(0.0, |r| visible_fraction(r, viewport));
        let intersecting = fraction > 0.0 && fraction >= record.threshold;
        if intersecting == record.is_visible {
            return None;
        }
        record.is_visible = intersecting;
        if intersecting && record.fire_once {
            record.has_fired = true;
        }
        let transition = if intersecting {
            Transition::Enter
        } else {
            Transition::Exit
        };
        log::debug!(
            "[visibility] `{}` {:?} (fraction={fraction:.2})",
            record.region_id,
            transition
        );
        Some(VisibilityChange {
            handle,
            transition,
            reset_on_exit: record.reset_on_exit,
        })
    }

    /// Re-evaluates every region, looking geometry up by region id.
    /// Changes are returned in handle (registration) order.
    pub fn evaluate_all(
        &mut self,
        viewport: Viewport,
        mut geometry_of: impl FnMut(&str) -> Option<Rect>,
    ) -> ChangeList {
        let mut handles: SmallVec<[RegionHandle; 16]> = self.records.keys().copied().collect();
        handles.sort_unstable();
        let mut changes = ChangeList::new();
        for handle in handles {
            let geometry = match self.records.get(&handle) {
                Some(r) if !(r.fire_once && r.has_fired) => geometry_of(&r.region_id),
                _ => continue,
            };
            if let Some(change) = self.evaluate(handle, geometry, viewport) {
                changes.push(change);
            }
        }
        changes
    }
}
