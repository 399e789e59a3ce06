//! Frontend-only tuning: element ids, asset locations, scene seeds.

pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const STARS_CANVAS_ID: &str = "stars-canvas";
pub const UNDERWATER_CANVAS_ID: &str = "underwater-canvas";
pub const NOISE_CANVAS_ID: &str = "noise-canvas";
pub const LOADING_OVERLAY_ID: &str = "hero-loading";

// Tried in order; the CDN mirror covers the GitHub Pages deploy where the
// asset path differs.
pub const MODEL_URLS: [&str; 2] = [
    "assets/models/hero.hmsh",
    "https://cdn.jsdelivr.net/gh/blindblues/portfolio-assets@main/hero.hmsh",
];

pub const STARFIELD_SEED: u64 = 0x5747_4c4f;
pub const UNDERWATER_SEED: u64 = 0x4255_424c;

// Matches the CSS breakpoint that switches the hero layout
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

// Film-grain overlay strength and shaping
pub const NOISE_INTENSITY: f32 = 0.08;
pub const NOISE_CONTRAST: f32 = 1.4;
