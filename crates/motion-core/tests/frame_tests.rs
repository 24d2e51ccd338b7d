// Frame driver, clock and looping visual tests.

use motion_core::constants::{DISC_IDLE_RATE, DISC_PLAYING_RATE, MAX_FRAME_DT_SEC};
use motion_core::*;
use std::cell::Cell;
use std::rc::Rc;

fn counting_visual(counter: &Rc<Cell<u32>>) -> impl MotionVisual + 'static {
    let counter = Rc::clone(counter);
    move |_: FrameTime, _: &FrameInputs| {
        counter.set(counter.get() + 1);
        Transform::IDENTITY
    }
}

#[test]
fn stopped_driver_does_not_tick() {
    let mut driver = FrameDriver::new();
    let calls = Rc::new(Cell::new(0));
    driver.register(counting_visual(&calls));
    assert_eq!(driver.tick(0.0), None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn start_and_stop_are_idempotent() {
    let mut driver = FrameDriver::new();
    assert!(driver.start());
    assert!(!driver.start());
    assert!(driver.is_running());
    assert!(driver.stop());
    assert!(!driver.stop());
    assert!(!driver.is_running());
}

#[test]
fn one_tick_fans_out_to_every_visual() {
    let mut driver = FrameDriver::new();
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    driver.register(counting_visual(&a));
    driver.register(counting_visual(&b));
    driver.start();
    for i in 0..10 {
        driver.tick(i as f64 / 60.0);
    }
    assert_eq!((a.get(), b.get()), (10, 10));
}

#[test]
fn empty_driver_still_advances_time() {
    let mut driver = FrameDriver::new();
    driver.start();
    driver.tick(0.0);
    let t = driver.tick(0.05).unwrap();
    assert!((t.delta - 0.05).abs() < 1e-6);
    assert_eq!(t.frame_index, 1);
    assert_eq!(driver.visual_count(), 0);
}

#[test]
fn disc_spins_ten_times_faster_while_playing() {
    assert!((DISC_PLAYING_RATE / DISC_IDLE_RATE - 10.0).abs() < 1e-5);

    let mut driver = FrameDriver::new();
    let disc = driver.register(VinylSpin::default());
    driver.start();
    driver.tick(0.0);
    driver.tick(0.1);
    let idle = driver.transform(disc).unwrap().rotation.z;
    assert!((idle - 0.005).abs() < 1e-6);

    driver.set_playing(true);
    assert!(driver.inputs().playing);
    driver.tick(0.2);
    let playing = driver.transform(disc).unwrap().rotation.z - idle;
    assert!((playing - 0.05).abs() < 1e-6);
}

#[test]
fn clock_clamps_stalls_and_ignores_time_going_backwards() {
    let mut clock = MotionClock::new();
    assert_eq!(clock.sample(10.0).delta, 0.0);
    assert_eq!(clock.sample(15.0).delta, MAX_FRAME_DT_SEC);
    assert_eq!(clock.sample(14.0).delta, 0.0);
    let t = clock.sample(15.05);
    assert!((t.delta - 0.05).abs() < 1e-4);
    assert!((clock.elapsed() - (MAX_FRAME_DT_SEC + 0.05)).abs() < 1e-4);
    assert_eq!(clock.sample(f64::NAN).delta, 0.0);
    assert_eq!(clock.frames(), 5);
}

#[test]
fn restart_does_not_count_paused_time() {
    let mut driver = FrameDriver::new();
    driver.start();
    driver.tick(0.0);
    driver.tick(0.05);
    driver.stop();
    driver.start();
    let t = driver.tick(30.0).unwrap();
    assert_eq!(t.delta, 0.0);
    assert!((driver.elapsed() - 0.05).abs() < 1e-6);
}

#[test]
fn unregister_removes_exactly_once() {
    let mut driver = FrameDriver::new();
    let calls = Rc::new(Cell::new(0));
    let id = driver.register(counting_visual(&calls));
    let keep = driver.register(FloatingDisc);
    assert!(driver.unregister(id));
    assert!(!driver.unregister(id));
    assert_eq!(driver.visual_count(), 1);
    driver.start();
    driver.tick(0.0);
    assert_eq!(calls.get(), 0);
    assert!(driver.transform(id).is_none());
    assert!(driver.transform(keep).is_some());
}

#[test]
fn pure_visuals_depend_only_on_elapsed_time() {
    assert_eq!(floating_disc(3.7), floating_disc(3.7));
    let disc = floating_disc(std::f32::consts::PI);
    assert!((disc.position.y - 0.05).abs() < 1e-5);
    assert_eq!(ParticleField::transform_at(0.0).rotation, glam::Vec3::ZERO);
    assert!((ParticleField::transform_at(10.0).rotation.y - 0.5).abs() < 1e-5);
    assert!((hero_sway(3.0).rotation.y - 10f32.to_radians()).abs() < 1e-5);
    let hint = scroll_hint(1.0);
    assert!((hint.opacity - 1.0).abs() < 1e-5 && (hint.position.y - 10.0).abs() < 1e-4);
}

#[test]
fn particle_field_is_seeded_and_bounded() {
    let a = ParticleField::with_count(200, 7);
    let b = ParticleField::with_count(200, 7);
    assert_eq!(a.points(), b.points());
    assert!(a
        .points()
        .iter()
        .all(|p| p.abs().max_element() <= 5.0));
    assert_eq!(ParticleField::new(1).points().len(), 1000);
}

#[test]
fn orbit_particles_hide_when_idle() {
    let mut out = [OrbitParticle {
        position_pct: glam::Vec2::ZERO,
        opacity: 1.0,
        scale: 1.0,
    }; 20];
    orbit_particles(2.0, false, &mut out);
    assert!(out.iter().all(|p| p.opacity == 0.0 && p.scale == 0.5));
    assert!((out[0].position_pct.x - 90.0).abs() < 1e-4);

    orbit_particles(0.0, true, &mut out);
    assert!((out[0].opacity - 0.2).abs() < 1e-6);
}

#[test]
fn glows_pulse_only_while_playing() {
    let idle = GlowPulse::PRIMARY.sample(1.0, false);
    assert_eq!(idle.opacity, 0.3);
    assert_eq!(idle.scale, 1.0);
    let mid = GlowPulse::PRIMARY.sample(2.0, true);
    assert!((mid.opacity - 0.7).abs() < 1e-5);
    assert!((mid.scale - 1.2).abs() < 1e-5);
}

#[test]
fn keyframes_loop_and_mirror() {
    let track = [0.0, 10.0, 0.0, -10.0, 0.0];
    assert_eq!(keyframes(&track, 12.0, 0.0, Repeat::Mirror, Easing::Linear, 0.0), 0.0);
    assert!((keyframes(&track, 12.0, 0.0, Repeat::Mirror, Easing::Linear, 3.0) - 10.0).abs() < 1e-4);
    // second cycle plays backwards
    assert!((keyframes(&track, 12.0, 0.0, Repeat::Mirror, Easing::Linear, 21.0) - 10.0).abs() < 1e-4);
    assert!((keyframes(&track, 12.0, 0.0, Repeat::Loop, Easing::Linear, 21.0) + 10.0).abs() < 1e-4);
    assert_eq!(keyframes(&[0.2, 0.8], 1.0, 5.0, Repeat::Loop, Easing::Linear, 2.0), 0.2);
    assert_eq!(keyframes(&[], 1.0, 0.0, Repeat::Loop, Easing::Linear, 2.0), 0.0);
}
