use motion_core::*;

#[test]
fn moves_publish_latest_position() {
    let mut tracker = PointerTracker::new();
    tracker.attach();
    let mut watch = tracker.subscribe();
    assert!(watch.changed());
    tracker.on_pointer_move(10.0, 20.0);
    tracker.on_pointer_move(15.0, 25.0);
    assert_eq!(
        watch.take_changed(),
        Some(PointerState {
            x: 15.0,
            y: 25.0,
            hovering: false
        })
    );
    assert_eq!(watch.take_changed(), None);
}

#[test]
fn non_finite_moves_keep_last_good_position() {
    let mut tracker = PointerTracker::new();
    tracker.attach();
    tracker.on_pointer_move(5.0, 6.0);
    let mut watch = tracker.subscribe();
    watch.changed();
    tracker.on_pointer_move(f32::NAN, 1.0);
    tracker.on_pointer_move(1.0, f32::INFINITY);
    assert!(!watch.changed());
    let s = tracker.state();
    assert_eq!((s.x, s.y), (5.0, 6.0));
}

#[test]
fn hover_classification() {
    assert!(HoverTarget::from_element("BUTTON", None).is_interactive());
    assert!(HoverTarget::from_element("a", None).is_interactive());
    assert!(HoverTarget::from_element("DIV", Some("true")).is_interactive());
    assert!(!HoverTarget::from_element("DIV", Some("false")).is_interactive());
    assert!(!HoverTarget::from_element("SPAN", None).is_interactive());
    assert_eq!(TargetKind::from_tag("Button"), TargetKind::Button);
}

#[test]
fn hover_only_publishes_on_change() {
    let mut tracker = PointerTracker::new();
    tracker.attach();
    let mut watch = tracker.subscribe();
    watch.changed();

    tracker.on_pointer_over(HoverTarget::from_element("BUTTON", None));
    assert!(watch.changed());
    assert!(tracker.state().hovering);

    // still interactive, nothing to publish
    tracker.on_pointer_over(HoverTarget::from_element("A", None));
    assert!(!watch.changed());

    tracker.on_pointer_over(HoverTarget::from_element("P", None));
    assert!(watch.changed());
    assert!(!tracker.state().hovering);
    tracker.on_pointer_over(HoverTarget::from_element("SECTION", None));
    assert!(!watch.changed());
}

#[test]
fn attach_and_detach_are_idempotent() {
    let mut tracker = PointerTracker::default();
    assert!(!tracker.is_attached());
    assert!(!tracker.detach());
    assert!(tracker.attach());
    assert!(!tracker.attach());
    assert!(tracker.is_attached());
    assert!(tracker.detach());
    assert!(!tracker.detach());
}

#[test]
fn detached_tracker_drops_events() {
    let mut tracker = PointerTracker::new();
    let mut watch = tracker.subscribe();
    watch.changed();
    tracker.on_pointer_move(1.0, 2.0);
    tracker.on_pointer_over(HoverTarget::from_element("BUTTON", None));
    assert!(!watch.changed());

    tracker.attach();
    tracker.on_pointer_move(5.0, 6.0);
    assert!(watch.changed());
    tracker.detach();
    tracker.on_pointer_move(10.0, 20.0);
    tracker.on_pointer_over(HoverTarget::from_element("A", None));
    assert!(!watch.changed());
    assert_eq!(
        tracker.state(),
        PointerState {
            x: 5.0,
            y: 6.0,
            hovering: false
        }
    );
}

#[test]
fn subscriptions_release_exactly_once() {
    let tracker = PointerTracker::new();
    let a = tracker.subscribe();
    let mut b = tracker.subscribe();
    assert_eq!(tracker.subscriber_count(), 2);

    b.unsubscribe();
    b.unsubscribe();
    assert_eq!(tracker.subscriber_count(), 1);
    assert!(!b.is_subscribed());
    assert_eq!(b.get(), None);
    assert!(!b.changed());

    drop(a);
    assert_eq!(tracker.subscriber_count(), 0);
    drop(b);
    assert_eq!(tracker.subscriber_count(), 0);
}

#[test]
fn signal_versions_and_independent_watches() {
    let signal = Signal::new(1);
    let mut early = signal.watch();
    assert_eq!(early.take_changed(), Some(1));

    signal.set(2);
    signal.update(|v| *v += 1);
    assert_eq!(signal.version(), 2);
    assert_eq!(signal.get(), 3);

    let mut late = signal.watch();
    assert_eq!(late.take_changed(), Some(3));
    assert_eq!(early.take_changed(), Some(3));
    assert_eq!(early.take_changed(), None);
    assert_eq!(late.get(), Some(3));
    assert_eq!(signal.watcher_count(), 2);
}
