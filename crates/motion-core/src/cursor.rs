//! Two-layer custom cursor: a disc that centres on the pointer and a softer
//! trail behind it. Both read [`PointerState`] and spring toward a pose
//! picked by the current [`Variant`].

use crate::constants::{
    CURSOR_DISC_COLOR, CURSOR_DISC_HOVER_COLOR, CURSOR_DISC_HOVER_SIZE, CURSOR_DISC_SIZE,
    CURSOR_TRAIL_COLOR, CURSOR_TRAIL_HOVER_COLOR, CURSOR_TRAIL_HOVER_OFFSET,
    CURSOR_TRAIL_HOVER_OPACITY, CURSOR_TRAIL_HOVER_SCALE, CURSOR_TRAIL_OFFSET,
    CURSOR_TRAIL_OPACITY,
};
use crate::pointer::PointerState;
use crate::spring::{Spring, SpringConfig, Variant, VariantSet};
use glam::{Vec2, Vec4};

/// Target pose of one cursor layer for one variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPreset {
    /// Subtracted from the pointer position.
    pub offset: f32,
    pub size: f32,
    pub opacity: f32,
    pub scale: f32,
    /// RGBA, RGB in 0..1.
    pub color: [f32; 4],
}

impl LayerPreset {
    /// Packed as (size, opacity, scale, unused) for the shape spring.
    fn shape(&self) -> Vec4 {
        Vec4::new(self.size, self.opacity, self.scale, 0.0)
    }
}

pub fn disc_presets() -> VariantSet<LayerPreset> {
    VariantSet {
        default: LayerPreset {
            offset: CURSOR_DISC_SIZE / 2.0,
            size: CURSOR_DISC_SIZE,
            opacity: 1.0,
            scale: 1.0,
            color: CURSOR_DISC_COLOR,
        },
        hover: LayerPreset {
            offset: CURSOR_DISC_HOVER_SIZE / 2.0,
            size: CURSOR_DISC_HOVER_SIZE,
            opacity: 1.0,
            scale: 1.0,
            color: CURSOR_DISC_HOVER_COLOR,
        },
    }
}

pub fn trail_presets() -> VariantSet<LayerPreset> {
    VariantSet {
        default: LayerPreset {
            offset: CURSOR_TRAIL_OFFSET,
            size: CURSOR_TRAIL_OFFSET * 2.0,
            opacity: CURSOR_TRAIL_OPACITY,
            scale: 1.0,
            color: CURSOR_TRAIL_COLOR,
        },
        hover: LayerPreset {
            offset: CURSOR_TRAIL_HOVER_OFFSET,
            size: CURSOR_TRAIL_OFFSET * 2.0,
            opacity: CURSOR_TRAIL_HOVER_OPACITY,
            scale: CURSOR_TRAIL_HOVER_SCALE,
            color: CURSOR_TRAIL_HOVER_COLOR,
        },
    }
}

/// Sampled pose of one layer, in viewport px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPose {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub scale: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct CursorLayer {
    presets: VariantSet<LayerPreset>,
    variant: Variant,
    position: Spring<Vec2>,
    shape: Spring<Vec4>,
}

impl CursorLayer {
    pub fn new(presets: VariantSet<LayerPreset>, config: SpringConfig) -> Self {
        let p = presets.default;
        Self {
            presets,
            variant: Variant::Default,
            position: Spring::new(Vec2::splat(-p.offset), config),
            shape: Spring::new(p.shape(), config),
        }
    }

    /// Retargets both springs; velocity carries over so a hover switch
    /// mid-flight stays continuous.
    pub fn follow(&mut self, pointer: PointerState) {
        self.variant = Variant::from_hovering(pointer.hovering);
        let preset = self.presets.get(self.variant);
        self.position
            .set_target(Vec2::new(pointer.x, pointer.y) - Vec2::splat(preset.offset));
        self.shape.set_target(preset.shape());
    }

    pub fn step(&mut self, dt: f32) {
        self.position.step(dt);
        self.shape.step(dt);
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn pose(&self) -> LayerPose {
        let p = self.position.value();
        let s = self.shape.value();
        LayerPose {
            x: p.x,
            y: p.y,
            size: s.x,
            opacity: s.y,
            scale: s.z,
            color: self.presets.get(self.variant).color,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position.is_settled() && self.shape.is_settled()
    }
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    pub disc: CursorLayer,
    pub trail: CursorLayer,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl CursorFollower {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            disc: CursorLayer::new(disc_presets(), config),
            trail: CursorLayer::new(trail_presets(), config),
        }
    }

    pub fn follow(&mut self, pointer: PointerState) {
        self.disc.follow(pointer);
        self.trail.follow(pointer);
    }

    pub fn step(&mut self, dt: f32) {
        self.disc.step(dt);
        self.trail.step(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.disc.is_settled() && self.trail.is_settled()
    }
}
