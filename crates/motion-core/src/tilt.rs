//! Pointer parallax: hero portrait tilt, backdrop pulse zone and card tilt.

use crate::constants::{
    CARD_TILT_DEG, CARD_TILT_FALLOFF, PROFILE_TILT_RANGE_DEG, PROFILE_TILT_SEC,
    PULSE_ZONE_HALF_PX,
};
use crate::easing::{Easing, Tween};
use crate::visibility::{Rect, Viewport};

/// Rotation in degrees about X and Y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rot_x: f32,
    pub rot_y: f32,
}

/// Target tilt of the hero portrait for a pointer at (`x`, `y`).
pub fn profile_tilt_target(x: f32, y: f32, viewport: Viewport) -> Tilt {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Tilt::default();
    }
    Tilt {
        rot_x: -(y / viewport.height - 0.5) * PROFILE_TILT_RANGE_DEG,
        rot_y: (x / viewport.width - 0.5) * PROFILE_TILT_RANGE_DEG,
    }
}

/// Portrait tilt that eases toward the latest pointer target. Every move
/// restarts the tween from wherever the portrait currently is.
#[derive(Clone, Copy, Debug)]
pub struct ProfileTilt {
    rot_x: Tween,
    rot_y: Tween,
}

impl Default for ProfileTilt {
    fn default() -> Self {
        Self {
            rot_x: Tween::settled(0.0),
            rot_y: Tween::settled(0.0),
        }
    }
}

impl ProfileTilt {
    pub fn on_pointer(&mut self, x: f32, y: f32, viewport: Viewport) {
        let target = profile_tilt_target(x, y, viewport);
        self.rot_x
            .retarget_with(target.rot_x, PROFILE_TILT_SEC, 0.0, Easing::Power2Out);
        self.rot_y
            .retarget_with(target.rot_y, PROFILE_TILT_SEC, 0.0, Easing::Power2Out);
    }

    pub fn step(&mut self, dt: f32) -> Tilt {
        self.rot_x.advance(dt);
        self.rot_y.advance(dt);
        self.current()
    }

    pub fn current(&self) -> Tilt {
        Tilt {
            rot_x: self.rot_x.value(),
            rot_y: self.rot_y.value(),
        }
    }
}

/// Is the pointer within the square zone around the viewport centre?
pub fn in_pulse_zone(x: f32, y: f32, viewport: Viewport) -> bool {
    (x - viewport.width / 2.0).abs() < PULSE_ZONE_HALF_PX
        && (y - viewport.height / 2.0).abs() < PULSE_ZONE_HALF_PX
}

/// Blur radius (px) and brightness of the hero backdrop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropFilter {
    pub blur: f32,
    pub brightness: f32,
}

impl BackdropFilter {
    pub const CALM: BackdropFilter = BackdropFilter {
        blur: 80.0,
        brightness: 1.2,
    };
    pub const PULSE: BackdropFilter = BackdropFilter {
        blur: 120.0,
        brightness: 1.5,
    };
}

/// Backdrop that brightens quickly when the pointer nears the centre and
/// relaxes slowly when it leaves.
#[derive(Clone, Copy, Debug)]
pub struct BackdropPulse {
    inside: bool,
    blur: Tween,
    brightness: Tween,
}

impl Default for BackdropPulse {
    fn default() -> Self {
        Self {
            inside: false,
            blur: Tween::settled(BackdropFilter::CALM.blur),
            brightness: Tween::settled(BackdropFilter::CALM.brightness),
        }
    }
}

impl BackdropPulse {
    /// Returns true when the pointer crossed the zone boundary.
    pub fn on_pointer(&mut self, x: f32, y: f32, viewport: Viewport) -> bool {
        let inside = in_pulse_zone(x, y, viewport);
        if inside == self.inside {
            return false;
        }
        self.inside = inside;
        let (target, duration) = if inside {
            (BackdropFilter::PULSE, 0.5)
        } else {
            (BackdropFilter::CALM, 1.0)
        };
        self.blur
            .retarget_with(target.blur, duration, 0.0, Easing::Power2Out);
        self.brightness
            .retarget_with(target.brightness, duration, 0.0, Easing::Power2Out);
        true
    }

    pub fn step(&mut self, dt: f32) -> BackdropFilter {
        self.blur.advance(dt);
        self.brightness.advance(dt);
        self.current()
    }

    pub fn current(&self) -> BackdropFilter {
        BackdropFilter {
            blur: self.blur.value(),
            brightness: self.brightness.value(),
        }
    }

    pub fn is_pulsing(&self) -> bool {
        self.inside
    }
}

/// Tilt of card `index` for a pointer over the card grid `grid`.
/// Later cards tilt less. Outside the grid every card is flat.
pub fn card_tilt(x: f32, y: f32, grid: Rect, index: usize) -> Tilt {
    if grid.width <= 0.0 || grid.height <= 0.0 {
        return Tilt::default();
    }
    let nx = (x - grid.x) / grid.width - 0.5;
    let ny = (y - grid.y) / grid.height - 0.5;
    if !(-0.5..=0.5).contains(&nx) || !(-0.5..=0.5).contains(&ny) {
        return Tilt::default();
    }
    let factor = (1.0 - index as f32 * CARD_TILT_FALLOFF).max(0.0);
    Tilt {
        rot_x: -ny * CARD_TILT_DEG * factor,
        rot_y: nx * CARD_TILT_DEG * factor,
    }
}
