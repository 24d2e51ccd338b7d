//! Engine facade that wires every motion module together.
//!
//! Inputs (pointer, scroll, resize, clicks, interval ticks) only mutate
//! state and raise dirty flags. The renderer calls [`MotionEngine::frame`]
//! once per display frame, then reads [`MotionEngine::render_state`] and
//! consumes the flags with [`MotionEngine::take_dirty`].

use crate::clock::FrameTime;
use crate::constants::{
    DEFAULT_VISIBILITY_THRESHOLD, NAV_ITEMS, ORBIT_PARTICLE_COUNT, SECTION_LOOKAHEAD_PX,
    WAVEFORM_BARS,
};
use crate::cursor::{CursorFollower, LayerPose};
use crate::error::MotionError;
use crate::frame::{FrameDriver, FrameInputs, Transform, VisualId};
use crate::loader::{LoaderFrame, LoaderSequence};
use crate::pointer::{HoverTarget, PointerState, PointerTracker};
use crate::reveal::{Pose, RevealConfig, RevealGroup, StaggeredToggle};
use crate::sections::{header_backdrop_rgba, NavEntrance, NavIndicator, NavSlot, SectionTracker};
use crate::signal::Watch;
use crate::spring::SpringConfig;
use crate::tilt::{card_tilt, BackdropFilter, BackdropPulse, ProfileTilt, Tilt};
use crate::timer::{IntervalSlot, TimerHost};
use crate::visibility::{ObserveOptions, Rect, RegionHandle, Transition, Viewport, VisibilityObserver};
use crate::visuals::{
    hero_sway, orbit_particles, scroll_hint, FloatingDisc, GlowPulse, OrbitParticle,
    ParticleField, VinylSpin,
};
use crate::waveform::Waveform;

/// Role a region plays beyond its entrance reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegionRole {
    #[default]
    Plain,
    /// Enables the portrait tilt and backdrop pulse once entered.
    Hero,
    /// Its exit stops playback and hides the lyrics when the region's
    /// `reset_on_exit` flag is set.
    Music,
    /// Card grid that tilts toward the pointer while visible.
    TiltCards,
}

/// One observed region and its reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionSpec {
    pub id: String,
    pub role: RegionRole,
    pub reveal: RevealConfig,
    pub children: usize,
    /// Visible fraction needed to count as in view. `None` falls back to
    /// [`EngineConfig::visibility_threshold`].
    pub threshold: Option<f32>,
    pub fire_once: bool,
    pub reset_on_exit: bool,
}

impl RegionSpec {
    pub fn new(id: &str, reveal: RevealConfig, children: usize) -> Self {
        Self {
            id: id.to_owned(),
            role: RegionRole::Plain,
            reveal,
            children,
            threshold: None,
            fire_once: false,
            reset_on_exit: false,
        }
    }

    pub fn role(mut self, role: RegionRole) -> Self {
        self.role = role;
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn fire_once(mut self) -> Self {
        self.fire_once = true;
        self.reset_on_exit = false;
        self
    }

    pub fn reset_on_exit(mut self) -> Self {
        self.reset_on_exit = true;
        self
    }

    fn observe_options(&self, default_threshold: f32) -> ObserveOptions {
        ObserveOptions {
            threshold: self.threshold.unwrap_or(default_threshold),
            fire_once: self.fire_once,
            reset_on_exit: self.reset_on_exit,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Ordered section ids; also the nav items.
    pub sections: Vec<String>,
    pub section_bias: f32,
    pub cursor_spring: SpringConfig,
    pub visibility_threshold: f32,
    pub regions: Vec<RegionSpec>,
    pub lyric_lines: usize,
    pub waveform_seed: u64,
    pub particle_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let regions = vec![
            RegionSpec::new("hero", RevealConfig::hero(), 4)
                .role(RegionRole::Hero)
                .fire_once(),
            RegionSpec::new("music", RevealConfig::section(), 3)
                .role(RegionRole::Music)
                .reset_on_exit(),
            RegionSpec::new("projects", RevealConfig::cards(), 3),
            RegionSpec::new("writer", RevealConfig::section(), 2),
            RegionSpec::new("barma-effect", RevealConfig::cards(), 3).role(RegionRole::TiltCards),
            RegionSpec::new("contact", RevealConfig::cards(), 2),
        ];
        Self {
            sections: NAV_ITEMS.iter().map(|(id, _)| (*id).to_owned()).collect(),
            section_bias: SECTION_LOOKAHEAD_PX,
            cursor_spring: SpringConfig::default(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            regions,
            lyric_lines: 8,
            waveform_seed: 0x5eed,
            particle_seed: 42,
        }
    }
}

/// Per-area "needs repaint" flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dirty {
    pub cursor: bool,
    pub header: bool,
    pub sections: bool,
    pub reveals: bool,
    pub music: bool,
    pub visuals: bool,
    pub hero: bool,
    pub cards: bool,
    pub loader: bool,
}

impl Dirty {
    pub fn all() -> Self {
        Self {
            cursor: true,
            header: true,
            sections: true,
            reveals: true,
            music: true,
            visuals: true,
            hero: true,
            cards: true,
            loader: true,
        }
    }

    pub fn any(&self) -> bool {
        *self != Self::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegionPose {
    pub id: String,
    pub visible: bool,
    pub container: Pose,
    pub children: Vec<Pose>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualTransforms {
    pub disc_spin: Transform,
    pub disc_float: Transform,
    pub particle_field: Transform,
    pub glow_primary: Transform,
    pub glow_secondary: Transform,
    pub hero_sway: Transform,
    pub scroll_hint: Transform,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub disc: LayerPose,
    pub trail: LayerPose,
    pub active_section: usize,
    pub active_id: String,
    pub header_rgba: [f32; 4],
    pub nav_underline: NavSlot,
    /// `(opacity, offset_y)` per nav item.
    pub nav_items: Vec<(f32, f32)>,
    pub regions: Vec<RegionPose>,
    pub playing: bool,
    pub lyrics_shown: bool,
    pub lyrics_panel: Pose,
    pub lyric_lines: Vec<Pose>,
    pub waveform: [f32; WAVEFORM_BARS],
    pub orbit: [OrbitParticle; ORBIT_PARTICLE_COUNT],
    pub visuals: VisualTransforms,
    pub profile_tilt: Tilt,
    pub backdrop: BackdropFilter,
    pub card_tilts: Vec<Tilt>,
    pub loader: LoaderFrame,
}

struct Region {
    handle: RegionHandle,
    role: RegionRole,
    reveal: RevealGroup,
}

struct Visuals {
    disc_spin: VisualId,
    disc_float: VisualId,
    particle_field: VisualId,
    glow_primary: VisualId,
    glow_secondary: VisualId,
    hero_sway: VisualId,
    scroll_hint: VisualId,
}

impl Visuals {
    fn register(driver: &mut FrameDriver, particle_seed: u64) -> Self {
        Self {
            disc_spin: driver.register(VinylSpin::default()),
            disc_float: driver.register(FloatingDisc),
            particle_field: driver.register(ParticleField::new(particle_seed)),
            glow_primary: driver.register(GlowPulse::PRIMARY),
            glow_secondary: driver.register(GlowPulse::SECONDARY),
            hero_sway: driver.register(|t: FrameTime, _: &FrameInputs| {
                hero_sway(t.elapsed)
            }),
            scroll_hint: driver.register(|t: FrameTime, _: &FrameInputs| {
                scroll_hint(t.elapsed)
            }),
        }
    }
}

pub struct MotionEngine<H: TimerHost> {
    pointer: PointerTracker,
    pointer_watch: Watch<PointerState>,
    cursor: CursorFollower,
    sections: SectionTracker,
    scroll: f32,
    viewport: Viewport,
    nav: NavIndicator,
    nav_entrance: NavEntrance,
    observer: VisibilityObserver,
    regions: Vec<Region>,
    hero_entered: bool,
    card_grid: Option<Rect>,
    card_tilts: Vec<Tilt>,
    profile: ProfileTilt,
    backdrop: BackdropPulse,
    lyrics: StaggeredToggle,
    waveform: Waveform,
    waveform_timer: IntervalSlot<H::Handle>,
    timers: H,
    driver: FrameDriver,
    visuals: Visuals,
    orbit: [OrbitParticle; ORBIT_PARTICLE_COUNT],
    loader: LoaderSequence,
    dirty: Dirty,
}

impl<H: TimerHost> MotionEngine<H> {
    pub fn new(config: EngineConfig, timers: H) -> Result<Self, MotionError> {
        SpringConfig::new(
            config.cursor_spring.stiffness,
            config.cursor_spring.damping,
            config.cursor_spring.mass,
        )?;
        let sections = SectionTracker::new(config.sections.iter().map(String::as_str))?
            .with_bias(config.section_bias);

        let mut observer = VisibilityObserver::new();
        let mut regions = Vec::with_capacity(config.regions.len());
        let mut card_count = 0;
        for spec in &config.regions {
            let handle = observer
                .register_with(&spec.id, spec.observe_options(config.visibility_threshold));
            if spec.role == RegionRole::TiltCards {
                card_count = card_count.max(spec.children);
            }
            regions.push(Region {
                handle,
                role: spec.role,
                reveal: RevealGroup::new(spec.reveal, spec.children, !spec.fire_once),
            });
        }

        let pointer = PointerTracker::new();
        let pointer_watch = pointer.subscribe();
        let mut driver = FrameDriver::new();
        let visuals = Visuals::register(&mut driver, config.particle_seed);
        let nav_len = config.sections.len();

        log::info!(
            "[engine] {} sections, {} observed regions, {} visuals",
            nav_len,
            regions.len(),
            driver.visual_count()
        );

        Ok(Self {
            pointer,
            pointer_watch,
            cursor: CursorFollower::new(config.cursor_spring),
            sections,
            scroll: 0.0,
            viewport: Viewport::default(),
            nav: NavIndicator::new(nav_len),
            nav_entrance: NavEntrance::new(nav_len),
            observer,
            regions,
            hero_entered: false,
            card_grid: None,
            card_tilts: vec![Tilt::default(); card_count],
            profile: ProfileTilt::default(),
            backdrop: BackdropPulse::default(),
            lyrics: StaggeredToggle::new(config.lyric_lines),
            waveform: Waveform::new(config.waveform_seed),
            waveform_timer: IntervalSlot::new(),
            timers,
            driver,
            visuals,
            orbit: [OrbitParticle {
                position_pct: glam::Vec2::ZERO,
                opacity: 0.0,
                scale: 0.5,
            }; ORBIT_PARTICLE_COUNT],
            loader: LoaderSequence::new(),
            dirty: Dirty::all(),
        })
    }

    // ---- lifecycle ----

    /// Attaches the pointer tracker and starts the frame driver.
    pub fn start(&mut self) -> bool {
        self.pointer.attach();
        self.driver.start()
    }

    /// Detaches input, stops the driver and ends playback. A later
    /// [`start`](Self::start) resumes paused with the lyrics hidden.
    pub fn stop(&mut self) -> bool {
        self.pointer.detach();
        self.set_playing(false);
        self.set_lyrics(false);
        self.waveform_timer.disarm(&mut self.timers);
        self.driver.stop()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn timers(&self) -> &H {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut H {
        &mut self.timers
    }

    // ---- inputs ----

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.on_pointer_move(x, y);
    }

    pub fn on_pointer_over(&mut self, target: HoverTarget) {
        self.pointer.on_pointer_over(target);
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Layout of one section in document px.
    pub fn set_section_geometry(
        &mut self,
        id: &str,
        top_offset: f32,
        height: f32,
    ) -> Result<(), MotionError> {
        self.sections.set_geometry(id, top_offset, height)
    }

    /// Layout of one nav item in header px.
    pub fn set_nav_slot(&mut self, index: usize, slot: NavSlot) {
        self.nav.set_slot(index, slot);
        if index == self.sections.active_index() {
            self.nav.follow(index);
        }
        self.dirty.header = true;
    }

    /// Card grid rect in viewport px, or `None` when it is not laid out.
    pub fn set_card_grid(&mut self, grid: Option<Rect>) {
        self.card_grid = grid;
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.refresh_visibility();
        self.dirty.hero = true;
    }

    pub fn on_scroll(&mut self, scroll_offset: f32) {
        if !scroll_offset.is_finite() {
            return;
        }
        self.scroll = scroll_offset;
        if let Some(active) = self.sections.on_scroll(scroll_offset) {
            self.nav.follow(active);
            self.dirty.sections = true;
        }
        self.dirty.header = true;
        self.refresh_visibility();
    }

    /// Re-evaluates every region against the section layout.
    pub fn refresh_visibility(&mut self) {
        let viewport = self.viewport;
        let scroll = self.scroll;
        let sections = &self.sections;
        let changes = self.observer.evaluate_all(viewport, |id| {
            let index = sections.index_of(id)?;
            let s = &sections.sections()[index];
            Some(Rect::new(0.0, s.top_offset - scroll, viewport.width, s.height))
        });
        for change in changes {
            let Some(region) = self.regions.iter_mut().find(|r| r.handle == change.handle) else {
                continue;
            };
            if region.reveal.on_visibility(change.transition) {
                self.dirty.reveals = true;
            }
            match (region.role, change.transition) {
                (RegionRole::Hero, Transition::Enter) => self.hero_entered = true,
                (RegionRole::Music, Transition::Exit) if change.reset_on_exit => {
                    log::debug!("[engine] music left view, resetting playback");
                    self.set_playing(false);
                    self.set_lyrics(false);
                }
                (RegionRole::TiltCards, Transition::Exit) => {
                    self.card_tilts.fill(Tilt::default());
                    self.dirty.cards = true;
                }
                _ => {}
            }
        }
    }

    // ---- toggles ----

    pub fn is_playing(&self) -> bool {
        self.waveform.is_playing()
    }

    /// Returns true if the flag changed.
    pub fn set_playing(&mut self, playing: bool) -> bool {
        let changed = self
            .waveform
            .set_playing(playing, &mut self.waveform_timer, &mut self.timers);
        if changed {
            self.driver.set_playing(playing);
            self.dirty.music = true;
        }
        changed
    }

    /// Returns the new playing state.
    pub fn toggle_playing(&mut self) -> bool {
        let next = !self.is_playing();
        self.set_playing(next);
        next
    }

    pub fn lyrics_shown(&self) -> bool {
        self.lyrics.is_shown()
    }

    pub fn set_lyrics(&mut self, shown: bool) -> bool {
        let changed = self.lyrics.set_shown(shown);
        if changed {
            self.dirty.music = true;
        }
        changed
    }

    /// Returns the new lyrics state.
    pub fn toggle_lyrics(&mut self) -> bool {
        let shown = self.lyrics.toggle();
        self.dirty.music = true;
        shown
    }

    /// Waveform interval callback.
    pub fn on_waveform_refresh(&mut self) {
        if self.waveform.on_refresh() {
            self.dirty.music = true;
        }
    }

    pub fn waveform_timer_armed(&self) -> bool {
        self.waveform_timer.is_armed()
    }

    // ---- frame ----

    /// Advances everything by one display frame. `None` while stopped.
    pub fn frame(&mut self, host_sec: f64) -> Option<FrameTime> {
        let time = self.driver.tick(host_sec)?;
        let dt = time.delta;

        if let Some(p) = self.pointer_watch.take_changed() {
            self.apply_pointer(p);
        }

        if !self.loader.is_gone() {
            self.loader.step(dt);
            self.dirty.loader = true;
        }
        if !self.nav_entrance.is_finished() || !self.nav.is_settled() {
            self.nav_entrance.step(dt);
            self.nav.step(dt);
            self.dirty.header = true;
        }
        if !self.cursor.is_settled() {
            self.cursor.step(dt);
            self.dirty.cursor = true;
        }
        for region in &mut self.regions {
            if region.reveal.step(dt) {
                self.dirty.reveals = true;
            }
        }
        self.lyrics.step(dt);
        self.waveform.step(dt);
        self.profile.step(dt);
        self.backdrop.step(dt);
        orbit_particles(time.elapsed, self.is_playing(), &mut self.orbit);

        // looping visuals change every frame
        self.dirty.music = true;
        self.dirty.visuals = true;
        self.dirty.hero = true;
        log::trace!("[engine] frame {} dt={:.4}", time.frame_index, dt);
        Some(time)
    }

    fn apply_pointer(&mut self, p: PointerState) {
        self.cursor.follow(p);
        self.dirty.cursor = true;
        if self.hero_entered {
            self.profile.on_pointer(p.x, p.y, self.viewport);
            if self.backdrop.on_pointer(p.x, p.y, self.viewport) {
                log::debug!("[engine] backdrop pulse={}", self.backdrop.is_pulsing());
            }
        }
        let cards_visible = self
            .regions
            .iter()
            .any(|r| r.role == RegionRole::TiltCards && self.observer.is_visible(r.handle));
        if let (true, Some(grid)) = (cards_visible, self.card_grid) {
            for (i, tilt) in self.card_tilts.iter_mut().enumerate() {
                *tilt = card_tilt(p.x, p.y, grid, i);
            }
            self.dirty.cards = true;
        }
    }

    // ---- output ----

    /// Returns and clears the accumulated dirty flags.
    pub fn take_dirty(&mut self) -> Dirty {
        std::mem::take(&mut self.dirty)
    }

    pub fn active_section(&self) -> &str {
        self.sections.active_id()
    }

    pub fn is_region_visible(&self, id: &str) -> bool {
        self.regions
            .iter()
            .find(|r| self.observer.region_id(r.handle) == Some(id))
            .is_some_and(|r| self.observer.is_visible(r.handle))
    }

    pub fn loader_done(&self) -> bool {
        self.loader.is_done()
    }

    /// Pointer is inside the backdrop's centre zone.
    pub fn backdrop_pulsing(&self) -> bool {
        self.backdrop.is_pulsing()
    }

    pub fn cursor(&self) -> &CursorFollower {
        &self.cursor
    }

    pub fn render_state(&self) -> RenderState {
        let transform = |id| self.driver.transform(id).unwrap_or_default();
        let v = &self.visuals;
        RenderState {
            disc: self.cursor.disc.pose(),
            trail: self.cursor.trail.pose(),
            active_section: self.sections.active_index(),
            active_id: self.sections.active_id().to_owned(),
            header_rgba: header_backdrop_rgba(self.scroll),
            nav_underline: self.nav.current(),
            nav_items: (0..self.sections.sections().len())
                .map(|i| self.nav_entrance.item(i))
                .collect(),
            regions: self
                .regions
                .iter()
                .map(|r| RegionPose {
                    id: self
                        .observer
                        .region_id(r.handle)
                        .unwrap_or_default()
                        .to_owned(),
                    visible: self.observer.is_visible(r.handle),
                    container: r.reveal.container_pose(),
                    children: r.reveal.child_poses().collect(),
                })
                .collect(),
            playing: self.is_playing(),
            lyrics_shown: self.lyrics.is_shown(),
            lyrics_panel: self.lyrics.panel_pose(),
            lyric_lines: (0..self.lyrics.line_count())
                .map(|i| self.lyrics.line_pose(i))
                .collect(),
            waveform: self.waveform.display_heights(),
            orbit: self.orbit,
            visuals: VisualTransforms {
                disc_spin: transform(v.disc_spin),
                disc_float: transform(v.disc_float),
                particle_field: transform(v.particle_field),
                glow_primary: transform(v.glow_primary),
                glow_secondary: transform(v.glow_secondary),
                hero_sway: transform(v.hero_sway),
                scroll_hint: transform(v.scroll_hint),
            },
            profile_tilt: self.profile.current(),
            backdrop: self.backdrop.current(),
            card_tilts: self.card_tilts.clone(),
            loader: self.loader.frame(),
        }
    }
}
