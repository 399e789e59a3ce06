//! Underwater overlay simulation: slow drifting particles and rising
//! bubbles in a normalized scene space, stepped per frame and drawn by the
//! frontend as additive sprites.

use crate::constants::*;
use rand::prelude::*;

#[derive(Clone, Debug)]
struct Particle {
    x: f32,
    y: f32,
    size: f32,
    speed: f32,
    color: [f32; 3],
}

#[derive(Clone, Debug)]
struct Bubble {
    x: f32,
    y: f32,
    home_x: f32,
    scale: f32,
    speed: f32,
    wobble_speed: f32,
    wobble_amount: f32,
}

/// One additive sprite, uploaded directly as an instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos: [f32; 2],
    pub size: f32,
    pub alpha: f32,
    pub color: [f32; 3],
}

pub struct UnderwaterSim {
    particles: Vec<Particle>,
    bubbles: Vec<Bubble>,
    rng: StdRng,
}

impl UnderwaterSim {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..UNDERWATER_PARTICLES)
            .map(|_| Particle {
                x: (rng.gen::<f32>() - 0.5) * 3.0,
                y: (rng.gen::<f32>() - 0.5) * 3.0,
                size: rng.gen::<f32>() * 0.02 + 0.005,
                speed: rng.gen::<f32>() * 0.1 + 0.05,
                // blue-green palette
                color: [
                    0.2 + rng.gen::<f32>() * 0.3,
                    0.5 + rng.gen::<f32>() * 0.3,
                    0.7 + rng.gen::<f32>() * 0.3,
                ],
            })
            .collect();
        let bubbles = (0..UNDERWATER_BUBBLES)
            .map(|_| {
                let x = (rng.gen::<f32>() - 0.5) * BUBBLE_SPAN_X;
                Bubble {
                    x,
                    y: -1.0 - rng.gen::<f32>() * 0.5,
                    home_x: x,
                    scale: 0.005 + rng.gen::<f32>() * 0.01,
                    speed: 0.02 + rng.gen::<f32>() * 0.03,
                    wobble_speed: 0.5 + rng.gen::<f32>() * 0.5,
                    wobble_amount: 0.02 + rng.gen::<f32>() * 0.02,
                }
            })
            .collect();
        Self {
            particles,
            bubbles,
            rng,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn bubble_count(&self) -> usize {
        self.bubbles.len()
    }

    /// Advance the simulation; `time_sec` drives the periodic motion terms.
    pub fn step(&mut self, time_sec: f32, dt_sec: f32) {
        // Tuned against a 60 Hz frame; scale the per-frame increments by dt
        let frames = dt_sec * 60.0;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let phase = i as f32;
            p.x += (time_sec * p.speed + phase).sin() * 0.001 * frames;
            p.y += (time_sec * p.speed * 0.7 + phase).cos() * 0.0015 * frames;
            if p.x > PARTICLE_WRAP {
                p.x = -PARTICLE_WRAP;
            } else if p.x < -PARTICLE_WRAP {
                p.x = PARTICLE_WRAP;
            }
            if p.y > PARTICLE_WRAP {
                p.y = -PARTICLE_WRAP;
            } else if p.y < -PARTICLE_WRAP {
                p.y = PARTICLE_WRAP;
            }
        }
        for b in &mut self.bubbles {
            b.y += b.speed * dt_sec;
            b.x = b.home_x + (time_sec * b.wobble_speed).sin() * b.wobble_amount;
            if b.y > BUBBLE_RESET_Y {
                b.y = -BUBBLE_RESET_Y;
                b.home_x = (self.rng.gen::<f32>() - 0.5) * BUBBLE_SPAN_X;
                b.x = b.home_x;
            }
        }
    }

    /// Write particle sprites followed by bubble sprites.
    pub fn fill_instances(&self, out: &mut Vec<SpriteInstance>) {
        out.clear();
        out.reserve(self.particles.len() + self.bubbles.len());
        for p in &self.particles {
            out.push(SpriteInstance {
                pos: [p.x, p.y],
                size: p.size,
                alpha: 0.6,
                color: p.color,
            });
        }
        for b in &self.bubbles {
            out.push(SpriteInstance {
                pos: [b.x, b.y],
                size: b.scale,
                alpha: 0.6,
                color: [0.6, 0.8, 1.0],
            });
        }
    }
}
