//! Second-order spring-damper integration shared by every animated property.
//!
//! A [`Spring`] holds the current value, its target and its velocity. Moving
//! the target never touches the velocity, so retargeting mid-flight (e.g. the
//! cursor switching from its default to its hover pose) stays continuous.
//! Consumers sample [`Spring::step`] once per frame; there is no completion
//! event.

use crate::constants::{
    MAX_FRAME_DT_SEC, NAV_SPRING_DAMPING, NAV_SPRING_MASS, NAV_SPRING_STIFFNESS,
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_EPSILON, SPRING_STIFFNESS,
};
use crate::error::MotionError;
use glam::{Vec2, Vec3, Vec4};
use std::ops::{Add, Mul, Sub};

/// Values a spring can drive: scalars and small float vectors.
pub trait SpringValue:
    Copy + Default + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    /// Euclidean magnitude, used for rest detection.
    fn magnitude(self) -> f32;
}

impl SpringValue for f32 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl SpringValue for Vec2 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }
}

impl SpringValue for Vec3 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }
}

impl SpringValue for Vec4 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }
}

/// Stiffness / damping / mass triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringConfig {
    /// Softer spring used by the active-nav underline.
    pub const NAV_INDICATOR: SpringConfig = SpringConfig {
        stiffness: NAV_SPRING_STIFFNESS,
        damping: NAV_SPRING_DAMPING,
        mass: NAV_SPRING_MASS,
    };

    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Result<Self, MotionError> {
        let valid = stiffness.is_finite()
            && damping.is_finite()
            && mass.is_finite()
            && stiffness > 0.0
            && damping >= 0.0
            && mass > 0.0;
        if !valid {
            return Err(MotionError::InvalidSpring {
                stiffness,
                damping,
                mass,
            });
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }

    /// `c / (2·sqrt(k·m))`; 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One animated property.
#[derive(Clone, Debug)]
pub struct Spring<T: SpringValue> {
    value: T,
    target: T,
    velocity: T,
    config: SpringConfig,
}

impl<T: SpringValue> Spring<T> {
    pub fn new(initial: T, config: SpringConfig) -> Self {
        Self {
            value: initial,
            target: initial,
            velocity: T::default(),
            config,
        }
    }

    /// Spring at rest on `initial` using the default 500/15/0.2 tuning.
    pub fn at_rest(initial: T) -> Self {
        Self::new(initial, SpringConfig::default())
    }

    /// Moves the target; velocity is preserved.
    #[inline]
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Teleports to `value` and stops all motion.
    pub fn snap_to(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.velocity = T::default();
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Advances by `dt` seconds and returns the new value.
    ///
    /// Non-finite or negative `dt` leaves the state untouched; stalls longer
    /// than [`MAX_FRAME_DT_SEC`] are clamped.
    pub fn step(&mut self, dt: f32) -> T {
        if !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }
        let dt = dt.min(MAX_FRAME_DT_SEC);
        let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        for _ in 0..steps {
            // semi-implicit Euler
            let displacement = self.value - self.target;
            let force = displacement * (-stiffness) - self.velocity * damping;
            self.velocity = self.velocity + force * (h / mass);
            self.value = self.value + self.velocity * h;
        }
        self.value
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub fn target(&self) -> T {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> T {
        self.velocity
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// True when both the distance to target and the speed are below `epsilon`.
    pub fn is_settled_within(&self, epsilon: f32) -> bool {
        (self.value - self.target).magnitude() < epsilon && self.velocity.magnitude() < epsilon
    }

    pub fn is_settled(&self) -> bool {
        self.is_settled_within(SPRING_REST_EPSILON)
    }
}

/// The two named pose configurations an interactive element switches between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Default,
    Hover,
}

impl Variant {
    #[inline]
    pub fn from_hovering(hovering: bool) -> Self {
        if hovering {
            Variant::Hover
        } else {
            Variant::Default
        }
    }
}

/// A pair of presets keyed by [`Variant`]. The integrator never sees the
/// variant; callers resolve a preset and feed it as the spring target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantSet<P> {
    pub default: P,
    pub hover: P,
}

impl<P: Copy> VariantSet<P> {
    #[inline]
    pub fn get(&self, variant: Variant) -> P {
        match variant {
            Variant::Default => self.default,
            Variant::Hover => self.hover,
        }
    }
}
