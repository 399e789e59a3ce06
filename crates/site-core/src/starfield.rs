//! Procedural starfield simulation.
//!
//! Owns the per-star parameters and computes draw instances each frame from
//! (time, mouse position); rendering is left to the frontend.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
struct Star {
    base: Vec2,
    size: f32,
    brightness: f32,
    twinkle_speed: f32,
    parallax_factor: f32,
    orbit_speed: f32,
    orbit_radius: f32,
    orbit_angle: f32,
}

impl Star {
    fn sample(rng: &mut StdRng, width: f32, height: f32) -> Self {
        Self {
            base: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            size: rng.gen::<f32>() * STAR_SIZE_SPAN + STAR_SIZE_MIN,
            brightness: rng.gen::<f32>() * 0.8 + 0.2,
            twinkle_speed: rng.gen::<f32>() * 0.02 + 0.01,
            parallax_factor: rng.gen::<f32>() * 0.5 + 0.1,
            orbit_speed: rng.gen::<f32>() * 0.5 + 0.2,
            orbit_radius: rng.gen::<f32>() * 10.0 + 5.0,
            orbit_angle: rng.gen::<f32>() * std::f32::consts::TAU,
        }
    }
}

/// Per-star draw parameters, uploaded directly as an instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    pub pos: [f32; 2],
    pub size: f32,
    pub brightness: f32,
}

pub struct StarField {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    seed: u64,
}

impl StarField {
    /// Star density scales with viewport area; reseeding with the same seed
    /// and size reproduces the same field.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            width,
            height,
            seed,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        let count = ((self.width * self.height) / STAR_AREA_PER_STAR).floor() as usize;
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.stars = (0..count)
            .map(|_| Star::sample(&mut rng, self.width, self.height))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Regenerate the field for a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.populate();
        }
    }

    /// Advance orbit phases. Twinkle and parallax are stateless functions of
    /// time and mouse, so they live in `fill_instances`.
    pub fn step(&mut self, dt_sec: f32) {
        // Matches a 0.01 rad advance per star per 60 Hz frame
        let rate = dt_sec * 60.0 * 0.01;
        for star in &mut self.stars {
            star.orbit_angle += star.orbit_speed * rate;
        }
    }

    /// Write current draw instances; `mouse_ndc` is the pointer in [-1,1]
    /// with (0,0) at the viewport center.
    pub fn fill_instances(&self, time_sec: f32, mouse_ndc: Vec2, out: &mut Vec<StarInstance>) {
        out.clear();
        out.reserve(self.stars.len());
        for star in &self.stars {
            let float = Vec2::new(star.orbit_angle.cos(), star.orbit_angle.sin()) * star.orbit_radius;
            let parallax = mouse_ndc * star.parallax_factor * STAR_PARALLAX_PX;
            let pos = star.base + float + parallax;
            let twinkle = (time_sec * star.twinkle_speed).sin() * 0.4 + 0.6;
            out.push(StarInstance {
                pos: pos.to_array(),
                size: star.size,
                brightness: (star.brightness * twinkle).clamp(0.0, 1.0),
            });
        }
    }
}
