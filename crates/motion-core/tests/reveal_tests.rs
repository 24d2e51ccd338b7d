use motion_core::*;

fn run(group: &mut RevealGroup, seconds: f32) {
    let frames = (seconds * 60.0).round() as usize;
    for _ in 0..frames {
        group.step(1.0 / 60.0);
    }
}

#[test]
fn presets_match_their_timings() {
    let section = RevealConfig::section();
    assert!((section.child_start(0) - 1.0).abs() < 1e-6);
    assert!((section.child_start(2) - 1.4).abs() < 1e-6);
    assert!((section.total_duration(3) - 2.2).abs() < 1e-6);

    let cards = RevealConfig::cards();
    assert_eq!(cards.child_start(0), 0.0);
    assert!((cards.child_start(3) - 0.3).abs() < 1e-6);
    assert!((cards.total_duration(4) - 0.9).abs() < 1e-6);

    assert_eq!(RevealConfig::hero().easing, Easing::bezier([0.22, 1.0, 0.36, 1.0]));
    assert_eq!(RevealConfig::default(), section);
}

#[test]
fn container_runs_before_children() {
    let mut group = RevealGroup::new(RevealConfig::section(), 3, false);
    assert_eq!(group.container_pose(), Pose::hidden(0.0, 0.0));
    assert!(group.on_visibility(Transition::Enter));

    run(&mut group, 0.5);
    let container = group.container_pose();
    assert!(container.opacity > 0.0 && container.opacity < 1.0);
    assert_eq!(group.child_pose(0), Pose::hidden(0.0, 20.0));

    run(&mut group, 0.6);
    assert!(group.child_pose(0).opacity > 0.0);
    assert_eq!(group.child_pose(1), Pose::hidden(0.0, 20.0));
}

#[test]
fn children_ease_out_rather_than_linearly() {
    let mut group = RevealGroup::new(RevealConfig::cards(), 1, false);
    group.on_visibility(Transition::Enter);
    // halfway through the 0.6s child
    group.step(0.3);
    let pose = group.child_pose(0);
    assert!(pose.opacity > 0.75, "opacity at half time = {}", pose.opacity);
    assert!(pose.offset_y < 10.0 && pose.offset_y > 0.0);
}

#[test]
fn reveal_completes_at_rest() {
    let mut group = RevealGroup::new(RevealConfig::hero(), 4, false);
    group.on_visibility(Transition::Enter);
    run(&mut group, 3.0);
    assert_eq!(group.phase(), RevealPhase::Shown);
    assert_eq!(group.container_pose(), Pose::REST);
    assert!(group.child_poses().all(|p| p == Pose::REST));
    assert!(!group.step(1.0 / 60.0));
}

#[test]
fn repeated_transitions_are_no_ops() {
    let mut group = RevealGroup::new(RevealConfig::section(), 2, true);
    assert!(!group.on_visibility(Transition::Exit));
    assert!(group.on_visibility(Transition::Enter));
    assert!(!group.on_visibility(Transition::Enter));
    run(&mut group, 0.5);
    assert!(matches!(group.phase(), RevealPhase::Revealing { .. }));
}

#[test]
fn replayable_group_resets_on_exit() {
    let mut group = RevealGroup::new(RevealConfig::section(), 2, true);
    group.on_visibility(Transition::Enter);
    run(&mut group, 3.0);
    assert!(group.on_visibility(Transition::Exit));
    assert_eq!(group.phase(), RevealPhase::Hidden);
    assert!(group
        .child_poses()
        .all(|p| p == Pose::hidden(0.0, 20.0)));

    assert!(group.on_visibility(Transition::Enter));
    group.step(0.1);
    assert_eq!(group.child_pose(0), Pose::hidden(0.0, 20.0));
}

#[test]
fn one_shot_group_ignores_exit() {
    let mut group = RevealGroup::new(RevealConfig::hero(), 2, false);
    group.on_visibility(Transition::Enter);
    run(&mut group, 3.0);
    assert!(!group.on_visibility(Transition::Exit));
    assert_eq!(group.phase(), RevealPhase::Shown);
}

#[test]
fn lyrics_show_with_stagger_and_hide_together() {
    let mut lyrics = StaggeredToggle::new(6);
    assert!(!lyrics.is_shown());
    assert_eq!(lyrics.panel_pose().offset_x, -50.0);

    assert!(lyrics.toggle());
    lyrics.step(0.15);
    assert!(lyrics.line_pose(0).opacity > 0.0);
    assert_eq!(lyrics.line_pose(3).opacity, 0.0);
    assert!(lyrics.is_animating());

    for _ in 0..120 {
        lyrics.step(1.0 / 60.0);
    }
    assert!(!lyrics.is_animating());
    assert!((lyrics.line_pose(5).opacity - 1.0).abs() < 1e-5);
    assert!(lyrics.panel_pose().offset_x.abs() < 1e-4);

    assert!(!lyrics.set_shown(true));
    assert!(!lyrics.toggle());
    lyrics.step(0.1);
    // hiding has no stagger: the last line fades as early as the first
    let first = lyrics.line_pose(0).opacity;
    let last = lyrics.line_pose(5).opacity;
    assert!(first < 1.0);
    assert!((first - last).abs() < 1e-5);
}

#[test]
fn lyrics_toggle_mid_flight_starts_from_current_pose() {
    let mut lyrics = StaggeredToggle::new(2);
    lyrics.set_shown(true);
    lyrics.step(0.2);
    let partial = lyrics.line_pose(0).opacity;
    assert!(partial > 0.0 && partial < 1.0);
    lyrics.set_shown(false);
    assert!((lyrics.line_pose(0).opacity - partial).abs() < 1e-6);
    assert_eq!(lyrics.line_pose(7), Pose::hidden(0.0, 20.0));
    assert_eq!(lyrics.line_count(), 2);
}
