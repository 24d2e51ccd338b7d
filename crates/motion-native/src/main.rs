use glam::Vec2;
use motion_core::constants::NAV_ITEMS;
use motion_core::{
    EngineConfig, HoverTarget, IntervalTicker, MotionEngine, NavSlot, Pose, Rect, TimerHost,
};
use std::time::Duration;

const FPS: f64 = 60.0;
const SESSION_SEC: f64 = 14.0;
const VIEWPORT: Vec2 = Vec2::new(1280.0, 800.0);

// (id, top, height) in document px
const LAYOUT: [(&str, f32, f32); 6] = [
    ("hero", 0.0, 800.0),
    ("music", 800.0, 900.0),
    ("projects", 1700.0, 600.0),
    ("writer", 2300.0, 700.0),
    ("barma-effect", 3000.0, 800.0),
    ("contact", 3800.0, 600.0),
];

/// Interval timers advanced by the harness clock instead of a browser.
#[derive(Default)]
struct FixedStepTimers {
    next_id: u32,
    active: Vec<(u32, IntervalTicker)>,
}

impl FixedStepTimers {
    /// Advances every timer and returns the total number of fires.
    fn advance(&mut self, dt: f32) -> u32 {
        self.active.iter_mut().map(|(_, t)| t.advance(dt)).sum()
    }

    fn live(&self) -> usize {
        self.active.len()
    }
}

impl TimerHost for FixedStepTimers {
    type Handle = u32;

    fn set_interval(&mut self, period: Duration) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push((id, IntervalTicker::new(period)));
        id
    }

    fn clear_interval(&mut self, handle: u32) {
        self.active.retain(|(id, _)| *id != handle);
    }
}

/// Scroll offset over the session: hold on the hero, then scroll down at a
/// steady pace and stop at the contact section.
fn scripted_scroll(t: f32) -> f32 {
    ((t - 3.0) * 350.0).clamp(0.0, 3600.0)
}

fn scripted_pointer(t: f32) -> Vec2 {
    Vec2::new(
        VIEWPORT.x * (0.5 + 0.4 * (t * 0.7).sin()),
        VIEWPORT.y * (0.5 + 0.3 * (t * 0.45).cos()),
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = MotionEngine::new(EngineConfig::default(), FixedStepTimers::default())?;
    for (id, top, height) in LAYOUT {
        engine.set_section_geometry(id, top, height)?;
    }
    for (i, _) in NAV_ITEMS.iter().enumerate() {
        engine.set_nav_slot(
            i,
            NavSlot {
                left: 40.0 + i as f32 * 120.0,
                width: 96.0,
            },
        );
    }
    engine.on_resize(VIEWPORT.x, VIEWPORT.y);
    engine.on_scroll(0.0);
    engine.start();
    let wall = instant::Instant::now();

    let frames = (SESSION_SEC * FPS) as u64;
    let dt = (1.0 / FPS) as f32;
    let mut last_section = engine.active_section().to_owned();
    let mut revealed = vec![false; engine.render_state().regions.len()];
    let mut max_timers = 0;

    for frame in 0..frames {
        let t = frame as f32 * dt;

        let p = scripted_pointer(t);
        engine.on_pointer_move(p.x, p.y);
        match frame {
            60 => engine.on_pointer_over(HoverTarget::from_element("BUTTON", None)),
            120 => engine.on_pointer_over(HoverTarget::from_element("DIV", None)),
            _ => {}
        }

        let scroll = scripted_scroll(t);
        // barma card grid sits 200px into its section
        engine.set_card_grid(Some(Rect::new(160.0, 3200.0 - scroll, 960.0, 400.0)));
        engine.on_scroll(scroll);

        // play, flip the lyrics twice, and let the scroll-away stop playback
        match frame {
            270 => {
                engine.toggle_playing();
            }
            280 | 290 => {
                engine.toggle_playing();
            }
            300 | 420 => {
                engine.toggle_lyrics();
            }
            _ => {}
        }

        let fires = engine.timers_mut().advance(dt);
        for _ in 0..fires {
            engine.on_waveform_refresh();
        }
        max_timers = max_timers.max(engine.timers().live());

        engine.frame(frame as f64 / FPS);
        let dirty = engine.take_dirty();
        if !dirty.any() {
            continue;
        }
        let state = engine.render_state();

        if state.active_id != last_section {
            log::info!(
                "[harness] t={t:.2}s scroll={scroll:.0} section {} -> {}",
                last_section,
                state.active_id
            );
            last_section = state.active_id.clone();
        }
        for (done, region) in revealed.iter_mut().zip(&state.regions) {
            let rest = region.container == Pose::REST && region.children.iter().all(|c| *c == Pose::REST);
            if rest && !*done {
                log::info!("[harness] t={t:.2}s `{}` revealed", region.id);
            }
            *done = rest;
        }
    }

    let state = engine.render_state();
    engine.stop();
    log::info!(
        "[harness] {frames} frames, final section `{}`, playing={}, lyrics={}",
        state.active_id,
        state.playing,
        state.lyrics_shown
    );
    log::info!(
        "[harness] cursor disc=({:.1}, {:.1}) size={:.1} trail=({:.1}, {:.1}) scale={:.2}",
        state.disc.x,
        state.disc.y,
        state.disc.size,
        state.trail.x,
        state.trail.y,
        state.trail.scale
    );
    log::info!(
        "[harness] peak live waveform timers: {max_timers}, after stop: {}",
        engine.timers().live()
    );
    log::info!(
        "[harness] replayed {SESSION_SEC}s of session in {:.1}ms",
        wall.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}
