//! Simulated audio-reactive bar visualizer.
//!
//! No audio is analysed: while playing, every refresh replaces all bars with
//! fresh random heights in [0, 100). Each displayed bar eases toward its
//! latest target over a short transition. When playback stops the data
//! freezes and the display sinks to a small floor.

use crate::constants::{
    WAVEFORM_BARS, WAVEFORM_BAR_TRANSITION_SEC, WAVEFORM_FLOOR, WAVEFORM_MAX,
    WAVEFORM_PLAYING_MIN, WAVEFORM_REFRESH_MS,
};
use crate::easing::{Easing, Tween};
use crate::timer::{IntervalSlot, TimerHost};
use rand::prelude::*;
use std::time::Duration;

pub type WaveformState = [f32; WAVEFORM_BARS];

pub fn refresh_period() -> Duration {
    Duration::from_millis(WAVEFORM_REFRESH_MS as u64)
}

pub struct Waveform {
    bars: WaveformState,
    display: [Tween; WAVEFORM_BARS],
    playing: bool,
    generation: u64,
    rng: StdRng,
}

impl Waveform {
    pub fn new(seed: u64) -> Self {
        Self {
            bars: [0.0; WAVEFORM_BARS],
            display: [Tween::settled(WAVEFORM_FLOOR); WAVEFORM_BARS],
            playing: false,
            generation: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Raw data; untouched while stopped.
    pub fn bars(&self) -> &WaveformState {
        &self.bars
    }

    /// Number of wholesale regenerations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flips the playing flag and arms or disarms the refresh timer through
    /// `slot`. Returns true if the flag changed.
    pub fn set_playing<T: TimerHost>(
        &mut self,
        playing: bool,
        slot: &mut IntervalSlot<T::Handle>,
        host: &mut T,
    ) -> bool {
        if playing == self.playing {
            return false;
        }
        self.playing = playing;
        if playing {
            slot.arm(host, refresh_period());
        } else {
            slot.disarm(host);
        }
        self.retarget_display();
        log::debug!("[waveform] playing={playing}");
        true
    }

    /// Interval callback. Ignored while stopped, so a late tick racing a
    /// stop cannot change the frozen data.
    pub fn on_refresh(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let rng = &mut self.rng;
        self.bars = std::array::from_fn(|_| rng.gen_range(0.0..WAVEFORM_MAX));
        self.generation += 1;
        self.retarget_display();
        true
    }

    fn retarget_display(&mut self) {
        for (tween, &bar) in self.display.iter_mut().zip(self.bars.iter()) {
            let target = if self.playing {
                bar.max(WAVEFORM_PLAYING_MIN)
            } else {
                WAVEFORM_FLOOR
            };
            tween.retarget_with(target, WAVEFORM_BAR_TRANSITION_SEC, 0.0, Easing::EaseOut);
        }
    }

    pub fn step(&mut self, dt: f32) {
        for tween in &mut self.display {
            tween.advance(dt);
        }
    }

    /// Rendered bar heights (same units as the data).
    pub fn display_heights(&self) -> [f32; WAVEFORM_BARS] {
        std::array::from_fn(|i| self.display[i].value())
    }
}
