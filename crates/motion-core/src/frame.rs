//! Per-frame motion driver.
//!
//! One [`FrameDriver`] fans each display frame out to every registered
//! [`MotionVisual`]. Visuals are independent: the driver makes no promise
//! about the order in which they run within a tick, so each must depend only
//! on the [`FrameTime`] and its own state.

use crate::clock::{FrameTime, MotionClock};
use glam::Vec3;

/// Plain numeric transform consumed by whatever draws the visual.
/// Rotation is Euler XYZ in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
        opacity: 1.0,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Inputs shared by every visual for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    pub playing: bool,
}

pub trait MotionVisual {
    fn advance(&mut self, time: FrameTime, inputs: &FrameInputs) -> Transform;
}

impl<F> MotionVisual for F
where
    F: FnMut(FrameTime, &FrameInputs) -> Transform,
{
    fn advance(&mut self, time: FrameTime, inputs: &FrameInputs) -> Transform {
        self(time, inputs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(u32);

struct Slot {
    id: VisualId,
    visual: Box<dyn MotionVisual>,
    latest: Transform,
}

pub struct FrameDriver {
    clock: MotionClock,
    slots: Vec<Slot>,
    next_id: u32,
    running: bool,
    inputs: FrameInputs,
    last_frame: Option<FrameTime>,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_clock(MotionClock::new())
    }

    pub fn with_clock(clock: MotionClock) -> Self {
        Self {
            clock,
            slots: Vec::new(),
            next_id: 0,
            running: false,
            inputs: FrameInputs::default(),
            last_frame: None,
        }
    }

    /// Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.clock.rebase();
        log::debug!("[frame] driver started with {} visuals", self.slots.len());
        true
    }

    /// Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        log::debug!("[frame] driver stopped after {} frames", self.clock.frames());
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn register(&mut self, visual: impl MotionVisual + 'static) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            visual: Box::new(visual),
            latest: Transform::IDENTITY,
        });
        id
    }

    /// Returns false if `id` was not registered (or already removed).
    pub fn unregister(&mut self, id: VisualId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        self.slots.len() != before
    }

    pub fn visual_count(&self) -> usize {
        self.slots.len()
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.inputs.playing = playing;
    }

    pub fn inputs(&self) -> FrameInputs {
        self.inputs
    }

    /// Runs one frame at host time `host_sec`. Returns `None` while stopped.
    pub fn tick(&mut self, host_sec: f64) -> Option<FrameTime> {
        if !self.running {
            return None;
        }
        let time = self.clock.sample(host_sec);
        let inputs = self.inputs;
        for slot in &mut self.slots {
            slot.latest = slot.visual.advance(time, &inputs);
        }
        self.last_frame = Some(time);
        Some(time)
    }

    /// Transform produced by `id` on the most recent tick.
    pub fn transform(&self, id: VisualId) -> Option<Transform> {
        self.slots.iter().find(|s| s.id == id).map(|s| s.latest)
    }

    pub fn last_frame(&self) -> Option<FrameTime> {
        self.last_frame
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }
}
