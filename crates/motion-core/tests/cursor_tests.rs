use motion_core::constants::{CURSOR_DISC_HOVER_COLOR, CURSOR_TRAIL_HOVER_SCALE};
use motion_core::*;

fn settle(cursor: &mut CursorFollower) {
    for _ in 0..120 {
        cursor.step(1.0 / 60.0);
    }
}

fn at(x: f32, y: f32, hovering: bool) -> PointerState {
    PointerState { x, y, hovering }
}

#[test]
fn disc_centres_on_pointer_and_trail_lags_by_its_offset() {
    let mut cursor = CursorFollower::default();
    cursor.follow(at(400.0, 300.0, false));
    settle(&mut cursor);
    assert!(cursor.is_settled());

    let disc = cursor.disc.pose();
    assert!((disc.x - 384.0).abs() < 0.05 && (disc.y - 284.0).abs() < 0.05);
    assert!((disc.size - 32.0).abs() < 0.05);

    let trail = cursor.trail.pose();
    assert!((trail.x - 394.0).abs() < 0.05);
    assert!((trail.opacity - 0.3).abs() < 0.01);
}

#[test]
fn hover_grows_disc_and_switches_colour_immediately() {
    let mut cursor = CursorFollower::default();
    cursor.follow(at(400.0, 300.0, false));
    settle(&mut cursor);

    cursor.follow(at(400.0, 300.0, true));
    assert_eq!(cursor.disc.variant(), Variant::Hover);
    assert_eq!(cursor.disc.pose().color, CURSOR_DISC_HOVER_COLOR);
    // size is still springing
    assert!(cursor.disc.pose().size < 40.0);

    settle(&mut cursor);
    let disc = cursor.disc.pose();
    assert!((disc.size - 60.0).abs() < 0.05);
    assert!((disc.x - 370.0).abs() < 0.05);
    let trail = cursor.trail.pose();
    assert!((trail.scale - CURSOR_TRAIL_HOVER_SCALE).abs() < 0.01);
    assert!((trail.x - 385.0).abs() < 0.05);
}

#[test]
fn retarget_mid_flight_is_continuous() {
    let mut cursor = CursorFollower::default();
    cursor.follow(at(600.0, 0.0, false));
    for _ in 0..3 {
        cursor.step(1.0 / 60.0);
    }
    let before = cursor.disc.pose();
    cursor.follow(at(0.0, 0.0, false));
    assert_eq!(cursor.disc.pose().x, before.x);
    cursor.step(1.0 / 60.0);
    // still carrying rightward momentum for a moment
    assert!(cursor.disc.pose().x > 0.0);
}

#[test]
fn preset_tables() {
    let disc = disc_presets();
    assert_eq!(disc.get(Variant::Default).offset, 16.0);
    assert_eq!(disc.get(Variant::Hover).offset, 30.0);
    let trail = trail_presets();
    assert_eq!(trail.get(Variant::Default).offset, 6.0);
    assert_eq!(trail.get(Variant::Hover).offset, 15.0);
    assert_eq!(trail.get(Variant::Hover).size, 12.0);
}
