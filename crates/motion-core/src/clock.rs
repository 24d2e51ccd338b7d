//! Monotonic elapsed-time counter shared by the frame loop.

use crate::constants::MAX_FRAME_DT_SEC;

/// Time handed to each frame callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock was created.
    pub elapsed: f32,
    /// Seconds since the previous frame (clamped).
    pub delta: f32,
    pub frame_index: u64,
}

/// Reset once at engine start, never mid-session. Host timestamps that go
/// backwards or jump by more than `MAX_FRAME_DT_SEC` advance elapsed time
/// by the clamped delta only, so visuals never leap after a stalled tab.
#[derive(Clone, Debug)]
pub struct MotionClock {
    last_host_sec: Option<f64>,
    elapsed: f64,
    frames: u64,
}

impl Default for MotionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionClock {
    pub fn new() -> Self {
        Self {
            last_host_sec: None,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Samples with an explicit host timestamp (e.g. a rAF timestamp / 1000).
    pub fn sample(&mut self, host_sec: f64) -> FrameTime {
        let delta = match self.last_host_sec {
            Some(last) if host_sec.is_finite() => {
                ((host_sec - last) as f32).clamp(0.0, MAX_FRAME_DT_SEC)
            }
            _ => 0.0,
        };
        if host_sec.is_finite() {
            // never move the reference backwards
            self.last_host_sec = Some(self.last_host_sec.map_or(host_sec, |l| l.max(host_sec)));
        }
        self.elapsed += delta as f64;
        let frame_index = self.frames;
        self.frames += 1;
        FrameTime {
            elapsed: self.elapsed as f32,
            delta,
            frame_index,
        }
    }

    /// Forgets the last host timestamp without touching elapsed time, so the
    /// next sample after a pause has a zero delta.
    pub fn rebase(&mut self) {
        self.last_host_sec = None;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
