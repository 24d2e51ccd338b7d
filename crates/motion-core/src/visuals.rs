//! Frame-driven looping visuals for the 3D/particle layers.
//!
//! Everything here except [`VinylSpin`] is a pure function of elapsed time.

use crate::clock::FrameTime;
use crate::constants::{
    DISC_FLOAT_AMPLITUDE, DISC_FLOAT_FREQUENCY, DISC_IDLE_RATE, DISC_PLAYING_RATE,
    DISC_TILT_AMPLITUDE, DISC_TILT_FREQUENCY, ORBIT_DELAY_STEP_SEC, ORBIT_RADIUS_PCT,
    PARTICLE_FIELD_COUNT, PARTICLE_FIELD_EXTENT, PARTICLE_FIELD_SPIN,
    PARTICLE_FIELD_WOBBLE_AMPLITUDE, PARTICLE_FIELD_WOBBLE_FREQUENCY,
};
use crate::easing::{keyframes, Easing, Repeat};
use crate::frame::{FrameInputs, MotionVisual, Transform};
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// Continuously integrated disc rotation about Z.
///
/// Idle spins at `DISC_IDLE_RATE`; playing spins at
/// `DISC_PLAYING_RATE * speed`, i.e. ten times faster at speed 1.
#[derive(Clone, Copy, Debug)]
pub struct VinylSpin {
    pub angle: f32,
    pub speed: f32,
}

impl Default for VinylSpin {
    fn default() -> Self {
        Self {
            angle: 0.0,
            speed: 1.0,
        }
    }
}

impl VinylSpin {
    #[inline]
    pub fn rate(&self, playing: bool) -> f32 {
        if playing {
            DISC_PLAYING_RATE * self.speed
        } else {
            DISC_IDLE_RATE
        }
    }
}

impl MotionVisual for VinylSpin {
    fn advance(&mut self, time: FrameTime, inputs: &FrameInputs) -> Transform {
        self.angle = (self.angle + time.delta * self.rate(inputs.playing)) % TAU;
        Transform {
            rotation: Vec3::new(0.0, 0.0, self.angle),
            ..Transform::IDENTITY
        }
    }
}

/// Gentle bob and rock of the whole disc group.
pub fn floating_disc(t: f32) -> Transform {
    Transform {
        position: Vec3::new(0.0, (t * DISC_FLOAT_FREQUENCY).sin() * DISC_FLOAT_AMPLITUDE, 0.0),
        rotation: Vec3::new((t * DISC_TILT_FREQUENCY).sin() * DISC_TILT_AMPLITUDE, 0.0, 0.0),
        ..Transform::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FloatingDisc;

impl MotionVisual for FloatingDisc {
    fn advance(&mut self, time: FrameTime, _inputs: &FrameInputs) -> Transform {
        floating_disc(time.elapsed)
    }
}

/// Seeded point cloud that slowly turns.
#[derive(Clone, Debug)]
pub struct ParticleField {
    points: Vec<Vec3>,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self::with_count(PARTICLE_FIELD_COUNT, seed)
    }

    pub fn with_count(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = PARTICLE_FIELD_EXTENT * 0.5;
        let points = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn transform_at(t: f32) -> Transform {
        Transform {
            rotation: Vec3::new(
                (t * PARTICLE_FIELD_WOBBLE_FREQUENCY).sin() * PARTICLE_FIELD_WOBBLE_AMPLITUDE,
                t * PARTICLE_FIELD_SPIN,
                0.0,
            ),
            ..Transform::IDENTITY
        }
    }
}

impl MotionVisual for ParticleField {
    fn advance(&mut self, time: FrameTime, _inputs: &FrameInputs) -> Transform {
        Self::transform_at(time.elapsed)
    }
}

/// One orbiting trail particle, positioned in percent of its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParticle {
    pub position_pct: Vec2,
    pub opacity: f32,
    pub scale: f32,
}

/// Pose of trail particle `index` of `count` at time `t`.
pub fn orbit_particle(index: usize, count: usize, t: f32, playing: bool) -> OrbitParticle {
    let angle = index as f32 / count.max(1) as f32 * TAU;
    let position_pct = Vec2::new(
        50.0 + angle.cos() * ORBIT_RADIUS_PCT,
        50.0 + angle.sin() * ORBIT_RADIUS_PCT,
    );
    if !playing {
        return OrbitParticle {
            position_pct,
            opacity: 0.0,
            scale: 0.5,
        };
    }
    let duration = 3.0 + (index % 5) as f32;
    let delay = index as f32 * ORBIT_DELAY_STEP_SEC;
    OrbitParticle {
        position_pct,
        opacity: keyframes(&[0.2, 0.8, 0.2], duration, delay, Repeat::Loop, Easing::EaseInOut, t),
        scale: keyframes(&[0.8, 1.2, 0.8], duration, delay, Repeat::Loop, Easing::EaseInOut, t),
    }
}

/// Fills `out` with every trail particle's pose.
pub fn orbit_particles(t: f32, playing: bool, out: &mut [OrbitParticle]) {
    let count = out.len();
    for (i, p) in out.iter_mut().enumerate() {
        *p = orbit_particle(i, count, t, playing);
    }
}

/// Pulsing blurred glow behind the music player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPulse {
    pub period: f32,
    pub idle_opacity: f32,
    pub opacity: [f32; 3],
    pub scale: [f32; 3],
}

impl GlowPulse {
    pub const PRIMARY: GlowPulse = GlowPulse {
        period: 4.0,
        idle_opacity: 0.3,
        opacity: [0.4, 0.7, 0.4],
        scale: [1.0, 1.2, 1.0],
    };
    pub const SECONDARY: GlowPulse = GlowPulse {
        period: 3.0,
        idle_opacity: 0.2,
        opacity: [0.3, 0.6, 0.3],
        scale: [1.0, 1.1, 1.0],
    };

    pub fn sample(&self, t: f32, playing: bool) -> Transform {
        if !playing {
            return Transform {
                opacity: self.idle_opacity,
                ..Transform::IDENTITY
            };
        }
        Transform {
            opacity: keyframes(&self.opacity, self.period, 0.0, Repeat::Loop, Easing::EaseInOut, t),
            scale: keyframes(&self.scale, self.period, 0.0, Repeat::Loop, Easing::EaseInOut, t),
            ..Transform::IDENTITY
        }
    }
}

impl MotionVisual for GlowPulse {
    fn advance(&mut self, time: FrameTime, inputs: &FrameInputs) -> Transform {
        self.sample(time.elapsed, inputs.playing)
    }
}

/// Slow side-to-side sway of the hero portrait (degrees keyframed, output
/// in radians).
pub fn hero_sway(t: f32) -> Transform {
    let deg = keyframes(
        &[0.0, 10.0, 0.0, -10.0, 0.0],
        12.0,
        0.0,
        Repeat::Mirror,
        Easing::EaseInOut,
        t,
    );
    Transform {
        rotation: Vec3::new(0.0, deg.to_radians(), 0.0),
        ..Transform::IDENTITY
    }
}

/// Bobbing "scroll down" hint under the hero.
pub fn scroll_hint(t: f32) -> Transform {
    let ease = Easing::EaseInOut;
    Transform {
        position: Vec3::new(0.0, keyframes(&[0.0, 10.0, 0.0], 2.0, 0.0, Repeat::Loop, ease, t), 0.0),
        opacity: keyframes(&[0.3, 1.0, 0.3], 2.0, 0.0, Repeat::Loop, ease, t),
        ..Transform::IDENTITY
    }
}
