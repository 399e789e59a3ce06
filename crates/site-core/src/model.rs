//! Hero model loading race and pose math.
//!
//! Loading is a single attempt: the fetch races a fixed deadline, and the
//! first of {loaded, failed, timed out} wins. Either failure path degrades to
//! the procedural fallback shape; once terminal, later events are ignored.

use crate::constants::*;
use crate::mesh::Mesh;

/// Outcome of the load attempt, delivered at most once each.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded(Mesh),
    Failed(String),
    TimedOut,
}

#[derive(Debug, Default)]
pub enum HeroModel {
    #[default]
    Loading,
    Loaded(Mesh),
    Fallback(Mesh),
}

fn fallback_shape() -> Mesh {
    Mesh::torus_knot(1.0, 0.3, 100, 16, 2, 3)
}

impl HeroModel {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, HeroModel::Loading)
    }

    /// Apply a load event; returns true when this call reached a terminal
    /// state. Events arriving after the first resolution are ignored.
    pub fn resolve(&mut self, event: LoadEvent) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = match event {
            LoadEvent::Loaded(mesh) => {
                log::info!("hero model loaded ({} vertices)", mesh.positions.len());
                HeroModel::Loaded(mesh)
            }
            LoadEvent::Failed(reason) => {
                log::warn!("hero model load failed, using fallback: {reason}");
                HeroModel::Fallback(fallback_shape())
            }
            LoadEvent::TimedOut => {
                log::warn!("hero model load timed out, using fallback");
                HeroModel::Fallback(fallback_shape())
            }
        };
        true
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        match self {
            HeroModel::Loading => None,
            HeroModel::Loaded(mesh) | HeroModel::Fallback(mesh) => Some(mesh),
        }
    }
}

/// Model and camera placement for one frame of the hero scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroPose {
    pub rotation_y: f32,
    pub scale: f32,
    pub model_y: f32,
    pub camera_y: f32,
}

/// The hero floats on a slow sine and, as the page scrolls, spins, grows and
/// descends with the camera tracking most of the descent.
pub fn hero_pose(time_sec: f32, scroll_y: f32, max_scroll: f32) -> HeroPose {
    let float_y = (time_sec).sin() * HERO_FLOAT_AMPLITUDE + scroll_y * HERO_SCROLL_LIFT;
    if max_scroll <= 0.0 {
        return HeroPose {
            rotation_y: 0.0,
            scale: 1.0,
            model_y: float_y + 1.0,
            camera_y: 0.0,
        };
    }
    let pct = (scroll_y / max_scroll).clamp(0.0, 1.0);
    let descend = pct * HERO_DESCEND_UNITS;
    HeroPose {
        rotation_y: pct * HERO_TURNS * std::f32::consts::TAU,
        scale: 1.0 + pct * HERO_SCALE_SPAN,
        model_y: float_y + 1.0 - descend,
        camera_y: -descend * HERO_CAMERA_TRACK,
    }
}
