use motion_core::constants::*;

#[test]
fn spring_defaults_are_underdamped_and_valid() {
    let cfg = motion_core::SpringConfig::new(SPRING_STIFFNESS, SPRING_DAMPING, SPRING_MASS).unwrap();
    assert!(cfg.damping_ratio() < 1.0);
    assert!(SPRING_MAX_SUBSTEP_SEC < MAX_FRAME_DT_SEC);
}

#[test]
fn nav_items_are_unique() {
    for (i, (id, label)) in NAV_ITEMS.iter().enumerate() {
        assert!(!label.is_empty());
        assert!(NAV_ITEMS[i + 1..].iter().all(|(other, _)| other != id));
    }
    assert_eq!(NAV_ITEMS[0].0, "hero");
}

#[test]
fn waveform_floor_sits_below_playing_minimum() {
    assert!(WAVEFORM_FLOOR > 0.0 && WAVEFORM_FLOOR < WAVEFORM_PLAYING_MIN);
    assert!(WAVEFORM_BAR_TRANSITION_SEC * 1000.0 > WAVEFORM_REFRESH_MS as f32);
    assert_eq!(WAVEFORM_BARS, 30);
}

#[test]
fn loader_gate_outlasts_progress_bar() {
    assert!(LOADER_GATE_SEC > LOADER_PROGRESS_SEC);
}
