//! Interval timer plumbing that guarantees at most one live timer per slot.

use std::time::Duration;

/// Something that can run a repeating timer: `setInterval` in the browser,
/// a fixed-step accumulator natively, a counter in tests.
pub trait TimerHost {
    type Handle;

    fn set_interval(&mut self, period: Duration) -> Self::Handle;
    fn clear_interval(&mut self, handle: Self::Handle);
}

/// Holds zero or one interval handle. Arming an armed slot and disarming an
/// empty one are both no-ops, so repeated toggles cannot stack timers.
#[derive(Debug)]
pub struct IntervalSlot<H> {
    handle: Option<H>,
}

impl<H> Default for IntervalSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> IntervalSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a timer unless one is already running. Returns true if started.
    pub fn arm<T: TimerHost<Handle = H>>(&mut self, host: &mut T, period: Duration) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(host.set_interval(period));
        true
    }

    /// Cancels the running timer. Returns true if one was cancelled.
    pub fn disarm<T: TimerHost<Handle = H>>(&mut self, host: &mut T) -> bool {
        match self.handle.take() {
            Some(h) => {
                host.clear_interval(h);
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

/// Fixed-period accumulator for hosts without a native interval timer.
#[derive(Clone, Copy, Debug)]
pub struct IntervalTicker {
    period: f32,
    accumulated: f32,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.as_secs_f32().max(1e-3),
            accumulated: 0.0,
        }
    }

    /// Adds `dt` seconds and returns how many periods elapsed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulated += dt;
        let fires = (self.accumulated / self.period).floor();
        self.accumulated -= fires * self.period;
        fires as u32
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}
