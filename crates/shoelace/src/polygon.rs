//! Shoelace area and the `Polygon` capability.
//!
//! Purpose
//! - One implementation of the area formula, shared by every shape through the
//!   provided `Polygon::area` method.
//!
//! Formula
//! - `S = Σ_i (x_i y_{i+1} − x_{i+1} y_i)` with indices mod n; `area = |S| / 2`.
//! - Sign of `S` encodes the winding (positive for counter-clockwise).
//!
//! Numerics
//! - Plain f64 accumulation, no compensated summation. Very large or
//!   ill-conditioned vertex sets accumulate rounding error; translate the input
//!   near the origin first if that matters.

use nalgebra::{ComplexField, Vector2};

use crate::point::Vertex;

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Raw cyclic cross-product sum `S`. Returns 0.0 for fewer than 3 vertices.
pub fn shoelace_sum<V: Vertex>(vertices: &[V]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let (p, q) = (&vertices[i], &vertices[(i + 1) % n]);
            parallelogram_area(Vector2::new(p.x(), p.y()), Vector2::new(q.x(), q.y()))
        })
        .sum()
}

/// Signed area `S / 2`: positive for counter-clockwise listings, negative for clockwise.
#[inline]
pub fn signed_area<V: Vertex>(vertices: &[V]) -> f64 {
    0.5 * shoelace_sum(vertices)
}

/// Unsigned area `|S| / 2`, independent of winding and starting vertex.
#[inline]
pub fn area<V: Vertex>(vertices: &[V]) -> f64 {
    // Trait path: `f64::abs` is not available under `no_std`.
    0.5 * ComplexField::abs(shoelace_sum(vertices))
}

/// A closed boundary given by an ordered vertex list (last connects back to first).
///
/// Implementors only supply `vertices`; `area` is shared. Callers are expected to
/// pass simple polygons listed in one rotational direction.
pub trait Polygon {
    type V: Vertex;

    fn vertices(&self) -> &[Self::V];

    /// Shoelace area; 0.0 when fewer than 3 vertices are exposed.
    fn area(&self) -> f64 {
        area(self.vertices())
    }
}
