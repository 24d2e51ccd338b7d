//! Easing curves, retargetable tweens and looping keyframes.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out, the default curve for reveals.
    #[default]
    EaseOut,
    EaseInOut,
    /// Quadratic ease-out (`power2.out`).
    Power2Out,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn bezier(points: [f32; 4]) -> Self {
        Easing::CubicBezier(points[0], points[1], points[2], points[3])
    }

    /// Maps linear progress in [0, 1] to eased progress. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        match self {
            Easing::Linear => t,
            Easing::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::Power2Out => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

#[inline]
fn bezier_axis(a1: f32, a2: f32, s: f32) -> f32 {
    // B(s) with P0 = 0 and P3 = 1
    let u = 1.0 - s;
    3.0 * u * u * s * a1 + 3.0 * u * s * s * a2 + s * s * s
}

#[inline]
fn bezier_axis_slope(a1: f32, a2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * a1 + 6.0 * u * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }
    // Newton-Raphson on x(s) = x, falling back to bisection.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let v = bezier_axis(x1, x2, s);
        if (v - x).abs() < 1e-5 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_axis(y1, y2, s)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fixed-duration interpolation between two scalars with an optional delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            easing,
            elapsed: 0.0,
        }
    }

    /// A tween that is already finished at `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, 0.0, Easing::Linear)
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }

    pub fn value(&self) -> f32 {
        let active = self.elapsed - self.delay;
        if active <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 {
            return self.to;
        }
        lerp(self.from, self.to, self.easing.apply(active / self.duration))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Restarts toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, to: f32, duration: f32, delay: f32) {
        let current = self.value();
        self.from = current;
        self.to = to;
        self.duration = duration.max(0.0);
        self.delay = delay.max(0.0);
        self.elapsed = 0.0;
    }

    /// Retarget variant that also swaps the easing curve.
    pub fn retarget_with(&mut self, to: f32, duration: f32, delay: f32, easing: Easing) {
        self.retarget(to, duration, delay);
        self.easing = easing;
    }
}

/// How a looping keyframe track behaves past its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Loop,
    Mirror,
}

/// Samples evenly spaced keyframes at `t` seconds for a track of `duration`
/// seconds that starts after `delay` and repeats forever. Segments are eased
/// with `easing`. Before the delay the first keyframe is returned.
pub fn keyframes(
    values: &[f32],
    duration: f32,
    delay: f32,
    repeat: Repeat,
    easing: Easing,
    t: f32,
) -> f32 {
    let Some(&first) = values.first() else {
        return 0.0;
    };
    if values.len() == 1 || duration <= 0.0 || !t.is_finite() {
        return first;
    }
    let local = t - delay;
    if local <= 0.0 {
        return first;
    }
    let cycle = (local / duration).floor();
    let mut p = (local - cycle * duration) / duration;
    if repeat == Repeat::Mirror && (cycle as i64) % 2 == 1 {
        p = 1.0 - p;
    }
    let segments = (values.len() - 1) as f32;
    let pos = p * segments;
    let idx = (pos.floor() as usize).min(values.len() - 2);
    let seg_t = pos - idx as f32;
    lerp(values[idx], values[idx + 1], easing.apply(seg_t))
}
