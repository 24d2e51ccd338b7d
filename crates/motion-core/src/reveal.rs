//! Entrance animations keyed on visibility transitions.
//!
//! A [`RevealGroup`] owns a container and an ordered list of children. On
//! ENTER the container fades in, then children are released one after
//! another with a fixed stagger, each easing from an offset, transparent
//! pose to rest. On EXIT (replayable groups only) everything snaps back to
//! the hidden pose so the next entry replays from scratch.

use crate::constants::{
    CARD_DURATION_SEC, CARD_STAGGER_SEC, HERO_BEZIER, LYRIC_LINE_SEC, LYRIC_LINE_STAGGER_SEC,
    LYRIC_PANEL_OFFSET_PX, LYRIC_PANEL_SEC, REVEAL_CHILD_SEC, REVEAL_CONTAINER_SEC,
    REVEAL_OFFSET_PX, REVEAL_STAGGER_SEC,
};
use crate::easing::{lerp, Easing, Tween};
use crate::visibility::Transition;

/// Opacity plus a translation from the resting position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn hidden(offset_x: f32, offset_y: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_x,
            offset_y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Container fade duration; 0 disables the container phase.
    pub container_duration: f32,
    /// Release children only once the container has finished.
    pub children_after_container: bool,
    pub stagger: f32,
    pub child_duration: f32,
    pub child_offset_y: f32,
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::section()
    }
}

impl RevealConfig {
    /// Hero block: container first, then a cubic-bezier cascade.
    pub fn hero() -> Self {
        Self {
            easing: Easing::bezier(HERO_BEZIER),
            ..Self::section()
        }
    }

    /// Section headings: container first, ease-out cascade.
    pub fn section() -> Self {
        Self {
            container_duration: REVEAL_CONTAINER_SEC,
            children_after_container: true,
            stagger: REVEAL_STAGGER_SEC,
            child_duration: REVEAL_CHILD_SEC,
            child_offset_y: REVEAL_OFFSET_PX,
            easing: Easing::EaseOut,
        }
    }

    /// Card grids: no container phase, short per-card delay.
    pub fn cards() -> Self {
        Self {
            container_duration: 0.0,
            children_after_container: false,
            stagger: CARD_STAGGER_SEC,
            child_duration: CARD_DURATION_SEC,
            child_offset_y: REVEAL_OFFSET_PX,
            easing: Easing::EaseOut,
        }
    }

    /// Start time of child `index` relative to the reveal start.
    pub fn child_start(&self, index: usize) -> f32 {
        let base = if self.children_after_container {
            self.container_duration
        } else {
            0.0
        };
        base + self.stagger * index as f32
    }

    /// Time at which the last of `children` children comes to rest.
    pub fn total_duration(&self, children: usize) -> f32 {
        let last = if children == 0 {
            0.0
        } else {
            self.child_start(children - 1) + self.child_duration
        };
        last.max(self.container_duration)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    Hidden,
    Revealing { elapsed: f32 },
    Shown,
}

#[derive(Clone, Debug)]
pub struct RevealGroup {
    config: RevealConfig,
    children: usize,
    replayable: bool,
    phase: RevealPhase,
}

impl RevealGroup {
    /// `replayable` should mirror whether the driving region is *not*
    /// fire-once.
    pub fn new(config: RevealConfig, children: usize, replayable: bool) -> Self {
        Self {
            config,
            children,
            replayable,
            phase: RevealPhase::Hidden,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn child_count(&self) -> usize {
        self.children
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn is_replayable(&self) -> bool {
        self.replayable
    }

    /// Applies a visibility transition. Returns true if the phase changed.
    pub fn on_visibility(&mut self, transition: Transition) -> bool {
        match (transition, self.phase) {
            (Transition::Enter, RevealPhase::Hidden) => {
                self.phase = RevealPhase::Revealing { elapsed: 0.0 };
                true
            }
            (Transition::Exit, RevealPhase::Revealing { .. } | RevealPhase::Shown)
                if self.replayable =>
            {
                self.phase = RevealPhase::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Advances the reveal clock. Returns true while anything is animating.
    pub fn step(&mut self, dt: f32) -> bool {
        let RevealPhase::Revealing { elapsed } = self.phase else {
            return false;
        };
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let elapsed = elapsed + dt;
        if elapsed >= self.config.total_duration(self.children) {
            self.phase = RevealPhase::Shown;
        } else {
            self.phase = RevealPhase::Revealing { elapsed };
        }
        true
    }

    fn elapsed(&self) -> Option<f32> {
        match self.phase {
            RevealPhase::Hidden => None,
            RevealPhase::Revealing { elapsed } => Some(elapsed),
            RevealPhase::Shown => Some(f32::INFINITY),
        }
    }

    pub fn container_pose(&self) -> Pose {
        let Some(elapsed) = self.elapsed() else {
            return Pose::hidden(0.0, 0.0);
        };
        if self.config.container_duration <= 0.0 {
            return Pose::REST;
        }
        let p = (elapsed / self.config.container_duration).min(1.0);
        Pose {
            opacity: Easing::EaseOut.apply(p),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn child_pose(&self, index: usize) -> Pose {
        let hidden = Pose::hidden(0.0, self.config.child_offset_y);
        let Some(elapsed) = self.elapsed() else {
            return hidden;
        };
        let local = elapsed - self.config.child_start(index);
        if local <= 0.0 {
            return hidden;
        }
        let p = if self.config.child_duration <= 0.0 {
            1.0
        } else {
            (local / self.config.child_duration).min(1.0)
        };
        let e = self.config.easing.apply(p);
        Pose {
            opacity: e,
            offset_x: 0.0,
            offset_y: lerp(self.config.child_offset_y, 0.0, e),
        }
    }

    pub fn child_poses(&self) -> impl Iterator<Item = Pose> + '_ {
        (0..self.children).map(move |i| self.child_pose(i))
    }
}

/// Boolean-driven staggered overlay (the lyrics panel).
///
/// Showing staggers lines by `LYRIC_LINE_STAGGER_SEC`; hiding collapses all
/// lines at once. Either direction starts from the current pose, so rapid
/// toggles never jump.
#[derive(Clone, Debug)]
pub struct StaggeredToggle {
    shown: bool,
    panel_opacity: Tween,
    panel_offset: Tween,
    line_opacity: Vec<Tween>,
    line_offset: Vec<Tween>,
}

impl StaggeredToggle {
    pub fn new(lines: usize) -> Self {
        Self {
            shown: false,
            panel_opacity: Tween::settled(0.0),
            panel_offset: Tween::settled(LYRIC_PANEL_OFFSET_PX),
            line_opacity: vec![Tween::settled(0.0); lines],
            line_offset: vec![Tween::settled(REVEAL_OFFSET_PX); lines],
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Returns false when `shown` matches the current state.
    pub fn set_shown(&mut self, shown: bool) -> bool {
        if self.shown == shown {
            return false;
        }
        self.shown = shown;
        let (opacity, panel_x, line_y) = if shown {
            (1.0, 0.0, 0.0)
        } else {
            (0.0, LYRIC_PANEL_OFFSET_PX, REVEAL_OFFSET_PX)
        };
        self.panel_opacity
            .retarget_with(opacity, LYRIC_PANEL_SEC, 0.0, Easing::EaseInOut);
        self.panel_offset
            .retarget_with(panel_x, LYRIC_PANEL_SEC, 0.0, Easing::EaseInOut);
        for (i, (o, y)) in self
            .line_opacity
            .iter_mut()
            .zip(self.line_offset.iter_mut())
            .enumerate()
        {
            let delay = if shown {
                LYRIC_LINE_STAGGER_SEC * i as f32
            } else {
                0.0
            };
            o.retarget_with(opacity, LYRIC_LINE_SEC, delay, Easing::EaseOut);
            y.retarget_with(line_y, LYRIC_LINE_SEC, delay, Easing::EaseOut);
        }
        true
    }

    pub fn toggle(&mut self) -> bool {
        let next = !self.shown;
        self.set_shown(next);
        next
    }

    pub fn step(&mut self, dt: f32) {
        self.panel_opacity.advance(dt);
        self.panel_offset.advance(dt);
        for t in self.line_opacity.iter_mut().chain(self.line_offset.iter_mut()) {
            t.advance(dt);
        }
    }

    pub fn panel_pose(&self) -> Pose {
        Pose {
            opacity: self.panel_opacity.value(),
            offset_x: self.panel_offset.value(),
            offset_y: 0.0,
        }
    }

    pub fn line_pose(&self, index: usize) -> Pose {
        match (self.line_opacity.get(index), self.line_offset.get(index)) {
            (Some(o), Some(y)) => Pose {
                opacity: o.value(),
                offset_x: 0.0,
                offset_y: y.value(),
            },
            _ => Pose::hidden(0.0, REVEAL_OFFSET_PX),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_opacity.len()
    }

    pub fn is_animating(&self) -> bool {
        !(self.panel_opacity.is_finished()
            && self.panel_offset.is_finished()
            && self.line_opacity.iter().all(Tween::is_finished)
            && self.line_offset.iter().all(Tween::is_finished))
    }
}
