//! Intro loader shown before any content.

use crate::constants::{
    LOADER_FADE_SEC, LOADER_GATE_SEC, LOADER_PROGRESS_SEC, LOADER_SPIN_PERIOD_SEC,
};
use crate::easing::{keyframes, Easing, Repeat};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderFrame {
    /// Bar fill in [0, 1].
    pub progress: f32,
    /// Spinner angle in degrees.
    pub spin_deg: f32,
    pub glow_opacity: f32,
    /// Opacity of the whole loader overlay.
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LoaderSequence {
    elapsed: f32,
}

impl LoaderSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, dt: f32) -> LoaderFrame {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.frame()
    }

    /// True once the gate time has passed and content may be shown.
    pub fn is_done(&self) -> bool {
        self.elapsed >= LOADER_GATE_SEC
    }

    /// True once the overlay has also finished fading out.
    pub fn is_gone(&self) -> bool {
        self.elapsed >= LOADER_GATE_SEC + LOADER_FADE_SEC
    }

    pub fn frame(&self) -> LoaderFrame {
        let t = self.elapsed;
        let spin = (t % LOADER_SPIN_PERIOD_SEC) / LOADER_SPIN_PERIOD_SEC * 360.0;
        let fade = ((t - LOADER_GATE_SEC) / LOADER_FADE_SEC).clamp(0.0, 1.0);
        LoaderFrame {
            progress: Easing::EaseInOut.apply(t / LOADER_PROGRESS_SEC),
            spin_deg: spin,
            glow_opacity: keyframes(
                &[0.5, 0.8, 0.5],
                LOADER_SPIN_PERIOD_SEC,
                0.0,
                Repeat::Loop,
                Easing::EaseInOut,
                t,
            ),
            opacity: 1.0 - fade,
        }
    }
}
