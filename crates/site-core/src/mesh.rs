//! Triangle mesh container for the hero scene: parsing of the site's binary
//! mesh asset and the procedural fallback shape used when loading fails.

use glam::Vec3;
use thiserror::Error;

/// Little-endian binary mesh blob: `HMSH`, vertex count, index count,
/// positions, normals, indices.
pub const MESH_MAGIC: [u8; 4] = *b"HMSH";

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("not a mesh blob (bad magic)")]
    BadMagic,
    #[error("mesh blob truncated: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },
    #[error("index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: u32 },
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

struct Cursor<'a> {
    bytes: &'a [u8],
    at: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], MeshError> {
        let end = self.at + n;
        if end > self.bytes.len() {
            return Err(MeshError::Truncated {
                need: end,
                have: self.bytes.len(),
            });
        }
        let out = &self.bytes[self.at..end];
        self.at = end;
        Ok(out)
    }

    fn u32(&mut self) -> Result<u32, MeshError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn f32(&mut self) -> Result<f32, MeshError> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Header counts are untrusted input; the remaining length must cover
    /// `count * stride` bytes before any allocation is sized from them.
    /// The product is computed in u64 so it cannot wrap on 32-bit targets.
    fn ensure(&self, count: u32, stride: u64) -> Result<(), MeshError> {
        let need = count as u64 * stride;
        let have = (self.bytes.len() - self.at) as u64;
        if have < need {
            return Err(MeshError::Truncated {
                need: self.at.saturating_add(need.min(usize::MAX as u64) as usize),
                have: self.bytes.len(),
            });
        }
        Ok(())
    }

    fn vec3s(&mut self, count: u32) -> Result<Vec<Vec3>, MeshError> {
        self.ensure(count, 12)?;
        let mut out = Vec::with_capacity(count as usize);
        for _ in 0..count {
            out.push(Vec3::new(self.f32()?, self.f32()?, self.f32()?));
        }
        Ok(out)
    }
}

impl Mesh {
    pub fn from_blob(bytes: &[u8]) -> Result<Self, MeshError> {
        let mut cur = Cursor { bytes, at: 0 };
        if cur.take(4)? != MESH_MAGIC {
            return Err(MeshError::BadMagic);
        }
        let vertex_count = cur.u32()?;
        let index_count = cur.u32()?;
        let positions = cur.vec3s(vertex_count)?;
        let normals = cur.vec3s(vertex_count)?;
        cur.ensure(index_count, 4)?;
        let mut indices = Vec::with_capacity(index_count as usize);
        for _ in 0..index_count {
            let index = cur.u32()?;
            if index >= vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertices: vertex_count,
                });
            }
            indices.push(index);
        }
        Ok(Self {
            positions,
            normals,
            indices,
        })
    }

    /// Procedural (p,q) torus knot, the fallback when the asset cannot load.
    pub fn torus_knot(
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    ) -> Self {
        let curve_point = |u: f32| -> Vec3 {
            let qu_over_p = q as f32 / p as f32 * u;
            let cs = qu_over_p.cos();
            Vec3::new(
                radius * (2.0 + cs) * 0.5 * u.cos(),
                radius * (2.0 + cs) * 0.5 * u.sin(),
                radius * qu_over_p.sin() * 0.5,
            )
        };

        let tub = tubular_segments as usize;
        let rad = radial_segments as usize;
        let mut positions = Vec::with_capacity((tub + 1) * (rad + 1));
        let mut normals = Vec::with_capacity((tub + 1) * (rad + 1));

        for i in 0..=tub {
            let u = i as f32 / tub as f32 * p as f32 * std::f32::consts::TAU;
            let p1 = curve_point(u);
            let p2 = curve_point(u + 0.01);
            // Frame from consecutive curve samples
            let tangent = (p2 - p1).normalize();
            let normal = (p2 + p1).normalize();
            let binormal = tangent.cross(normal).normalize();
            let normal = binormal.cross(tangent);

            for j in 0..=rad {
                let v = j as f32 / rad as f32 * std::f32::consts::TAU;
                let cx = -tube * v.cos();
                let cy = tube * v.sin();
                let pos = p1 + normal * cx + binormal * cy;
                positions.push(pos);
                normals.push((pos - p1).normalize());
            }
        }

        let stride = rad + 1;
        let mut indices = Vec::with_capacity(tub * rad * 6);
        for i in 1..=tub {
            for j in 1..=rad {
                let a = (stride * (i - 1) + (j - 1)) as u32;
                let b = (stride * i + (j - 1)) as u32;
                let c = (stride * i + j) as u32;
                let d = (stride * (i - 1) + j) as u32;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for p in &self.positions {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }

    /// Recenter on the origin and scale so the X extent matches
    /// `target_width`, the fit used by the hero scene.
    pub fn normalize_to_width(&mut self, target_width: f32) {
        if self.positions.is_empty() {
            return;
        }
        let (min, max) = self.bounds();
        let center = (min + max) * 0.5;
        let size_x = (max.x - min.x).max(1e-6);
        let scale = target_width / size_x;
        for p in &mut self.positions {
            *p = (*p - center) * scale;
        }
    }
}
