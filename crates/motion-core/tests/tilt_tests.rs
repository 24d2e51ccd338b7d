// Pointer parallax and intro loader.

use motion_core::*;

const VIEW: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

#[test]
fn profile_tilt_follows_pointer_quadrant() {
    assert_eq!(profile_tilt_target(640.0, 400.0, VIEW), Tilt::default());
    let corner = profile_tilt_target(1280.0, 0.0, VIEW);
    assert!((corner.rot_y - 10.0).abs() < 1e-5);
    assert!((corner.rot_x - 10.0).abs() < 1e-5);
    let low_left = profile_tilt_target(0.0, 800.0, VIEW);
    assert!((low_left.rot_y + 10.0).abs() < 1e-5);
    assert!((low_left.rot_x + 10.0).abs() < 1e-5);
    assert_eq!(
        profile_tilt_target(10.0, 10.0, Viewport::new(0.0, 0.0)),
        Tilt::default()
    );
}

#[test]
fn profile_tilt_eases_over_one_second() {
    let mut tilt = ProfileTilt::default();
    tilt.on_pointer(1280.0, 0.0, VIEW);
    let half = tilt.step(0.5);
    // power2.out at t = 0.5
    assert!((half.rot_y - 7.5).abs() < 1e-4);
    let done = tilt.step(0.5);
    assert!((done.rot_y - 10.0).abs() < 1e-5);
    assert_eq!(tilt.current(), done);
}

#[test]
fn backdrop_pulses_inside_centre_zone() {
    assert!(in_pulse_zone(640.0, 400.0, VIEW));
    assert!(in_pulse_zone(789.0, 400.0, VIEW));
    assert!(!in_pulse_zone(790.0, 400.0, VIEW));

    let mut pulse = BackdropPulse::default();
    assert_eq!(pulse.current(), BackdropFilter::CALM);
    assert!(!pulse.on_pointer(10.0, 10.0, VIEW));
    assert!(pulse.on_pointer(640.0, 400.0, VIEW));
    assert!(!pulse.on_pointer(650.0, 410.0, VIEW));
    assert!(pulse.is_pulsing());
    let f = pulse.step(0.5);
    assert!((f.blur - 120.0).abs() < 1e-3 && (f.brightness - 1.5).abs() < 1e-5);

    assert!(pulse.on_pointer(0.0, 0.0, VIEW));
    // relaxing takes twice as long
    let f = pulse.step(0.5);
    assert!(f.blur > 80.0);
    let f = pulse.step(0.5);
    assert!((f.blur - 80.0).abs() < 1e-3);
}

#[test]
fn later_cards_tilt_less() {
    let grid = Rect::new(100.0, 100.0, 400.0, 200.0);
    let first = card_tilt(500.0, 300.0, grid, 0);
    assert!((first.rot_x + 5.0).abs() < 1e-5 && (first.rot_y - 5.0).abs() < 1e-5);
    let fourth = card_tilt(500.0, 300.0, grid, 3);
    assert!((fourth.rot_y - 3.5).abs() < 1e-5);
    assert_eq!(card_tilt(500.0, 300.0, grid, 20), Tilt::default());
    assert_eq!(card_tilt(300.0, 200.0, grid, 0), Tilt::default());
    assert_eq!(card_tilt(600.0, 300.0, grid, 0), Tilt::default());
}

#[test]
fn loader_runs_gate_then_fades() {
    let mut loader = LoaderSequence::new();
    let start = loader.frame();
    assert_eq!((start.progress, start.opacity, start.glow_opacity), (0.0, 1.0, 0.5));

    let mid = loader.step(1.0);
    assert!((mid.progress - 0.5).abs() < 1e-5);
    assert!((mid.spin_deg - 180.0).abs() < 1e-3);
    assert!((mid.glow_opacity - 0.8).abs() < 1e-5);

    let full = loader.step(1.0);
    assert_eq!(full.progress, 1.0);
    assert!(!loader.is_done());

    loader.step(0.5);
    assert!(loader.is_done() && !loader.is_gone());
    assert_eq!(loader.frame().opacity, 1.0);
    let fading = loader.step(0.25);
    assert!((fading.opacity - 0.5).abs() < 1e-5);
    loader.step(f32::NAN);
    assert!((loader.frame().opacity - 0.5).abs() < 1e-5);
    let gone = loader.step(0.25);
    assert!(loader.is_gone());
    assert_eq!(gone.opacity, 0.0);
}
