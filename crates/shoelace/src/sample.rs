//! Reference polygons with known areas, and random star polygons.
//!
//! Behind the `sample` feature; tests and benches use it, library callers
//! normally do not.
//!
//! Star polygons put vertex `k` at angle `(k + j_k)·2π/n` with `j_k ∈ [0, jitter)`
//! and a positive radius. With `jitter < 1/2` consecutive gaps stay below π, so
//! the origin is interior, the polygon is star-shaped around it, simple, and
//! listed counter-clockwise.

use std::f64::consts::TAU;

use rand::Rng;

use crate::error::GeomError;
use crate::point::Point;
use crate::shapes::Ngon;

/// Regular `n`-gon of circumradius `radius`, centred at the origin, listed CCW.
pub fn regular_ngon(n: usize, radius: f64) -> Result<Ngon, GeomError> {
    let delta = TAU / (n as f64);
    let points = (0..n)
        .map(|k| {
            let th = (k as f64) * delta;
            Point::from_xy(radius * th.cos(), radius * th.sin())
        })
        .collect();
    Ngon::new(points)
}

/// Closed-form area of `regular_ngon(n, radius)`: `n/2 · r² · sin(2π/n)`.
/// Zero for `n < 3`, like the shoelace sum on fewer than three vertices.
pub fn regular_area(n: usize, radius: f64) -> f64 {
    if n < 3 {
        return 0.0;
    }
    0.5 * (n as f64) * radius * radius * (TAU / (n as f64)).sin()
}

/// Shape parameters for `draw_star`.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Number of vertices; raised to 3 if smaller.
    pub vertices: usize,
    /// Angular offset per vertex as a fraction of 2π/n, clamped to [0, 0.45].
    pub angle_jitter: f64,
    /// Radii are drawn from `radius·[1 − radial_jitter, 1 + radial_jitter]`,
    /// with `radial_jitter` clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub radius: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            angle_jitter: 0.3,
            radial_jitter: 0.5,
            radius: 1.0,
        }
    }
}

/// Build a star polygon from per-vertex `(angle_offset, radius)` pairs, offsets in
/// units of 2π/n. Offsets must lie in [0, 1/2) and radii be positive for the
/// result to be star-shaped.
pub fn star_from_offsets(offsets: &[(f64, f64)]) -> Result<Ngon, GeomError> {
    let delta = TAU / (offsets.len() as f64);
    let points = offsets
        .iter()
        .enumerate()
        .map(|(k, &(j, r))| {
            let th = ((k as f64) + j) * delta;
            Point::from_xy(r * th.cos(), r * th.sin())
        })
        .collect();
    Ngon::new(points)
}

/// Draw a random star polygon; reproducible for a seeded `rng`.
pub fn draw_star<R: Rng>(cfg: &StarCfg, rng: &mut R) -> Result<Ngon, GeomError> {
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter.clamp(0.0, 0.45);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.radius.abs().max(1e-9);
    let offsets: Vec<(f64, f64)> = (0..n)
        .map(|_| {
            let j = rng.gen::<f64>() * aj;
            let r = r0 * (1.0 + rj * (2.0 * rng.gen::<f64>() - 1.0));
            (j, r)
        })
        .collect();
    star_from_offsets(&offsets)
}
