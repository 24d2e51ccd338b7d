// Host-side tests for the spring integrator and variant presets.

use glam::Vec2;
use motion_core::constants::MAX_FRAME_DT_SEC;
use motion_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn default_spring_reaches_hover_target_within_300ms() {
    let presets = VariantSet {
        default: 0.0_f32,
        hover: 14.0,
    };
    let mut spring = Spring::new(presets.get(Variant::Default), SpringConfig::new(500.0, 15.0, 0.2).unwrap());
    spring.set_target(presets.get(Variant::from_hovering(true)));
    for _ in 0..18 {
        spring.step(DT);
    }
    let v = spring.value();
    assert!((v - 14.0).abs() <= 0.14, "value after 300ms = {v}");
}

#[test]
fn target_switch_is_continuous() {
    let mut spring = Spring::at_rest(Vec2::ZERO);
    spring.set_target(Vec2::new(100.0, 50.0));
    for _ in 0..5 {
        spring.step(DT);
    }
    let before = spring.value();
    let velocity = spring.velocity();
    spring.set_target(Vec2::new(-40.0, 0.0));
    assert_eq!(spring.value(), before);
    assert_eq!(spring.velocity(), velocity);

    // one frame later it is still well short of the new target
    let after = spring.step(DT);
    assert!(after.x > 0.0, "snapped from {before} to {after}");
}

#[test]
fn converges_after_a_sequence_of_target_changes() {
    let mut spring = Spring::at_rest(0.0_f32);
    for target in [10.0, -3.0, 250.0, 0.5, 42.0] {
        spring.set_target(target);
        for _ in 0..3 {
            spring.step(DT);
        }
    }
    for _ in 0..120 {
        spring.step(DT);
    }
    assert!((spring.value() - 42.0).abs() < 1e-3);
    assert!(spring.is_settled());
}

#[test]
fn default_tuning_is_underdamped_but_close_to_critical() {
    let ratio = SpringConfig::default().damping_ratio();
    assert!((ratio - 0.75).abs() < 1e-4, "ratio = {ratio}");
    let nav = SpringConfig::NAV_INDICATOR.damping_ratio();
    assert!(nav > 0.7 && nav < 0.8);
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(matches!(
        SpringConfig::new(500.0, 15.0, 0.0),
        Err(MotionError::InvalidSpring { .. })
    ));
    assert!(SpringConfig::new(-1.0, 15.0, 0.2).is_err());
    assert!(SpringConfig::new(500.0, -0.1, 0.2).is_err());
    assert!(SpringConfig::new(f32::NAN, 15.0, 0.2).is_err());
    assert!(SpringConfig::new(500.0, 0.0, 0.2).is_ok());
}

#[test]
fn bad_time_steps_leave_state_untouched() {
    let mut spring = Spring::at_rest(1.0_f32);
    spring.set_target(2.0);
    spring.step(DT);
    let value = spring.value();
    let velocity = spring.velocity();
    for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert_eq!(spring.step(dt), value);
        assert_eq!(spring.velocity(), velocity);
    }
}

#[test]
fn stalled_frame_is_clamped_and_stays_stable() {
    let mut a = Spring::at_rest(0.0_f32);
    let mut b = Spring::at_rest(0.0_f32);
    a.set_target(14.0);
    b.set_target(14.0);
    a.step(5.0);
    b.step(MAX_FRAME_DT_SEC);
    assert!((a.value() - b.value()).abs() < 1e-5);
    assert!(a.value().is_finite());
}

#[test]
fn snap_to_stops_motion() {
    let mut spring = Spring::at_rest(Vec2::ZERO);
    spring.set_target(Vec2::splat(30.0));
    spring.step(DT);
    spring.snap_to(Vec2::new(5.0, 6.0));
    assert_eq!(spring.value(), Vec2::new(5.0, 6.0));
    assert_eq!(spring.velocity(), Vec2::ZERO);
    assert!(spring.is_settled());
}

#[test]
fn variant_defaults_to_default_pose() {
    assert_eq!(Variant::default(), Variant::Default);
    assert_eq!(Variant::from_hovering(false), Variant::Default);
    let set = VariantSet {
        default: 32.0_f32,
        hover: 60.0,
    };
    assert_eq!(set.get(Variant::Hover), 60.0);
}
