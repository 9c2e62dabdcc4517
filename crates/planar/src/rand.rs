//! Random star-shaped polygons and point clouds.
//!
//! Purpose
//! - Small, deterministic samplers feeding property tests, benchmarks and the
//!   CLI `sample` command.
//!
//! Model
//! - Vertex `k` of `n` sits at angle `phase + kΔ` (Δ = 2π/n) plus a jitter
//!   below Δ/4, at radius `base_radius · (1 ± radial_jitter)`. Vertices come
//!   out in angle order, so the polygon is counter-clockwise, simple, and
//!   star-shaped around the origin with the origin strictly inside. Zero
//!   radial jitter puts every vertex on one circle, which makes it convex.
//! - A `ReplayToken` fully determines a draw.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Pt;
use crate::predicates::rot;

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Inclusive vertex count range; both ends are raised to at least 3.
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Angular jitter as a fraction of Δ, clamped to [0, 0.24]. Consecutive
    /// vertices then stay less than π apart, even for triangles.
    pub angle_jitter: f64,
    /// Relative radial amplitude.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub random_phase: bool,
}

impl RadialCfg {
    /// Default jitter with exactly `n` vertices.
    pub fn fixed(n: usize) -> Self {
        Self {
            min_vertices: n,
            max_vertices: n,
            ..Self::default()
        }
    }
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            min_vertices: 12,
            max_vertices: 12,
            angle_jitter: 0.2,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// `(seed, index)` pair identifying one reproducible draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.index.to_le_bytes());
        bytes[16..].copy_from_slice(b"planar/replay-v1");
        StdRng::from_seed(bytes)
    }
}

/// Draw a random star-shaped polygon (counter-clockwise) around the origin.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Pt<f64>> {
    let mut rng = tok.rng();
    let lo = cfg.min_vertices.max(3);
    let n = rng.gen_range(lo..=cfg.max_vertices.max(lo));
    let delta = TAU / n as f64;
    let jitter = cfg.angle_jitter.clamp(0.0, 0.24) * delta;
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let phase = if cfg.random_phase {
        rng.gen_range(0.0..TAU)
    } else {
        0.0
    };
    let mut poly = Vec::with_capacity(n);
    for k in 0..n {
        let th = phase + k as f64 * delta + rng.gen_range(-1.0f64..=1.0) * jitter;
        let r = r0 * (1.0 + rng.gen_range(-1.0f64..=1.0) * rj).max(1e-6);
        poly.push(rot(Pt::new(r, 0.0), th));
    }
    poly
}

/// Draw `n` points uniformly from the square `[-half_width, half_width]²`.
pub fn draw_points_in_box(n: usize, half_width: f64, tok: ReplayToken) -> Vec<Pt<f64>> {
    let mut rng = tok.rng();
    let h = half_width.abs().max(1e-9);
    (0..n)
        .map(|_| Pt::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}
