// Shared motion tuning constants used by the web and native front-ends.

// Spring defaults (tuned for a sub-200ms perceptible settle)
pub const SPRING_STIFFNESS: f32 = 500.0;
pub const SPRING_DAMPING: f32 = 15.0;
pub const SPRING_MASS: f32 = 0.2;

// Integration limits
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0; // keeps stiff springs stable at 60Hz
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // frames longer than this are treated as a stall
pub const SPRING_REST_EPSILON: f32 = 0.01;

// Nav underline spring
pub const NAV_SPRING_STIFFNESS: f32 = 380.0;
pub const NAV_SPRING_DAMPING: f32 = 30.0;
pub const NAV_SPRING_MASS: f32 = 1.0;

// Cursor disc
pub const CURSOR_DISC_SIZE: f32 = 32.0;
pub const CURSOR_DISC_HOVER_SIZE: f32 = 60.0;
pub const CURSOR_DISC_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
pub const CURSOR_DISC_HOVER_COLOR: [f32; 4] = [139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0, 0.5];

// Cursor trail
pub const CURSOR_TRAIL_OFFSET: f32 = 6.0;
pub const CURSOR_TRAIL_HOVER_OFFSET: f32 = 15.0;
pub const CURSOR_TRAIL_OPACITY: f32 = 0.3;
pub const CURSOR_TRAIL_HOVER_OPACITY: f32 = 0.5;
pub const CURSOR_TRAIL_HOVER_SCALE: f32 = 1.8;
pub const CURSOR_TRAIL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
pub const CURSOR_TRAIL_HOVER_COLOR: [f32; 4] = [94.0 / 255.0, 234.0 / 255.0, 212.0 / 255.0, 0.3];

// Pointer classification
pub const HOVER_MARKER_ATTRIBUTE: &str = "data-cursor-hover";

// Sections
pub const SECTION_LOOKAHEAD_PX: f32 = 100.0;
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("hero", "Home"),
    ("music", "Music"),
    ("projects", "The Lab"),
    ("writer", "Echoverse"),
    ("barma-effect", "The Barma Effect"),
    ("contact", "Contact"),
];

// Header backdrop
pub const HEADER_FADE_SCROLL_PX: f32 = 100.0;
pub const HEADER_MAX_ALPHA: f32 = 0.8;
pub const HEADER_RGB: [f32; 3] = [8.0, 8.0, 32.0];
pub const NAV_ENTER_STAGGER_SEC: f32 = 0.1;
pub const NAV_ENTER_DURATION_SEC: f32 = 0.5;
pub const NAV_ENTER_OFFSET_PX: f32 = -20.0;

// Visibility
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.1;

// Reveal timings (seconds / px)
pub const REVEAL_CONTAINER_SEC: f32 = 1.0;
pub const REVEAL_STAGGER_SEC: f32 = 0.2;
pub const REVEAL_CHILD_SEC: f32 = 0.8;
pub const REVEAL_OFFSET_PX: f32 = 20.0;
pub const CARD_STAGGER_SEC: f32 = 0.1;
pub const CARD_DURATION_SEC: f32 = 0.6;
pub const HERO_BEZIER: [f32; 4] = [0.22, 1.0, 0.36, 1.0];

// Lyrics overlay
pub const LYRIC_LINE_STAGGER_SEC: f32 = 0.1;
pub const LYRIC_LINE_SEC: f32 = 0.8;
pub const LYRIC_PANEL_SEC: f32 = 0.5;
pub const LYRIC_PANEL_OFFSET_PX: f32 = -50.0;

// Disc motion
pub const DISC_IDLE_RATE: f32 = 0.05; // rad/s
pub const DISC_PLAYING_RATE: f32 = 0.5; // rad/s before the speed multiplier
pub const DISC_FLOAT_AMPLITUDE: f32 = 0.05;
pub const DISC_FLOAT_FREQUENCY: f32 = 0.5;
pub const DISC_TILT_AMPLITUDE: f32 = 0.02;
pub const DISC_TILT_FREQUENCY: f32 = 0.25;

// Particle field
pub const PARTICLE_FIELD_COUNT: usize = 1000;
pub const PARTICLE_FIELD_EXTENT: f32 = 10.0;
pub const PARTICLE_FIELD_SPIN: f32 = 0.05;
pub const PARTICLE_FIELD_WOBBLE_AMPLITUDE: f32 = 0.1;
pub const PARTICLE_FIELD_WOBBLE_FREQUENCY: f32 = 0.2;

// Orbit trail particles around the disc
pub const ORBIT_PARTICLE_COUNT: usize = 20;
pub const ORBIT_RADIUS_PCT: f32 = 40.0;
pub const ORBIT_DELAY_STEP_SEC: f32 = 0.2;

// Waveform
pub const WAVEFORM_BARS: usize = 30;
pub const WAVEFORM_REFRESH_MS: u32 = 100;
pub const WAVEFORM_MAX: f32 = 100.0;
pub const WAVEFORM_FLOOR: f32 = 2.0; // idle bar height
pub const WAVEFORM_PLAYING_MIN: f32 = 5.0;
pub const WAVEFORM_BAR_TRANSITION_SEC: f32 = 0.2;

// Loader
pub const LOADER_GATE_SEC: f32 = 2.5;
pub const LOADER_PROGRESS_SEC: f32 = 2.0;
pub const LOADER_SPIN_PERIOD_SEC: f32 = 2.0;
pub const LOADER_FADE_SEC: f32 = 0.5;

// Pointer parallax
pub const PROFILE_TILT_RANGE_DEG: f32 = 20.0;
pub const PROFILE_TILT_SEC: f32 = 1.0;
pub const PULSE_ZONE_HALF_PX: f32 = 150.0;
pub const CARD_TILT_DEG: f32 = 10.0;
pub const CARD_TILT_FALLOFF: f32 = 0.1;
