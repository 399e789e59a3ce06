/// Scroll animation and scene tuning constants.
///
/// These express intended behavior (phase boundaries, clamp limits, entity
/// counts) and keep magic numbers out of the code.
// Sections whose scroll-through progress drives animation
pub const TRACKED_SECTION_IDS: [&str; 3] = ["about", "portfolio", "contact"];

// Scroll-progress animation schedule (percent of section progress)
pub const FADE_WINDOW_PCT: f32 = 20.0; // fade-in 0..20 down, fade-out 80..100 up
pub const OFFSET_WINDOW_PCT: f32 = 30.0; // offsets resolve 0..30 down, 70..100 up

// Per-kind offset magnitudes (px)
pub const OFFSET_PX: f32 = 50.0;
pub const OFFSET_DEFAULT_PX: f32 = 30.0;

// Title underline ramp starts at mid-section (down) and resets below it (up)
pub const UNDERLINE_START_PCT: f32 = 50.0;
pub const UNDERLINE_MAX_PX: f32 = 100.0;

// Paragraph in-view hysteresis; the two thresholds are intentionally distinct
// so the toggle cannot flicker at a single midpoint.
pub const IN_VIEW_DOWN_PCT: f32 = 10.0;
pub const IN_VIEW_UP_PCT: f32 = 90.0;

// Element is considered active once it is meaningfully visible
pub const SCROLL_ACTIVE_MIN_OPACITY: f32 = 0.1;

// Fallback IntersectionObserver thresholds and in-view cutoff
pub const OBSERVER_THRESHOLDS: [f64; 4] = [0.0, 0.1, 0.5, 1.0];
pub const OBSERVER_IN_VIEW_RATIO: f64 = 0.1;

// Starfield
pub const STAR_AREA_PER_STAR: f32 = 3000.0; // one star per N px^2
pub const STAR_PARALLAX_PX: f32 = 8.0;
pub const STAR_SIZE_MIN: f32 = 0.1;
pub const STAR_SIZE_SPAN: f32 = 0.7;
pub const STAR_GLOW_SIZE_LARGE: f32 = 0.5; // wide halo above this size
pub const STAR_GLOW_SIZE_SMALL: f32 = 0.3; // faint halo above this size

// Underwater overlay
pub const UNDERWATER_PARTICLES: usize = 200;
pub const UNDERWATER_BUBBLES: usize = 80;
pub const PARTICLE_WRAP: f32 = 1.5; // scene-space drift bounds
pub const BUBBLE_RESET_Y: f32 = 1.2; // rising bubbles respawn past this
pub const BUBBLE_SPAN_X: f32 = 4.0; // full-width spawn range

// Hero model
pub const MODEL_LOAD_TIMEOUT_SEC: f64 = 5.0;
pub const HERO_FIT_WIDTH: f32 = 6.0;
pub const HERO_FIT_WIDTH_MOBILE: f32 = 2.0;
pub const HERO_FLOAT_AMPLITUDE: f32 = 0.1;
pub const HERO_SCROLL_LIFT: f32 = 0.0005;
pub const HERO_TURNS: f32 = 2.0; // full rotations across the page scroll
pub const HERO_SCALE_SPAN: f32 = 3.0; // grows up to 4x at the bottom
pub const HERO_DESCEND_UNITS: f32 = 2000.0;
pub const HERO_CAMERA_TRACK: f32 = 0.99; // camera follows 99% of the descent

// Page chrome
pub const NAVBAR_BLUR_AFTER_PX: f32 = 50.0;
pub const NAV_ACTIVE_LEAD_PX: f32 = 200.0;
