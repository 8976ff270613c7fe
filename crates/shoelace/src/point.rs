//! 2D points and the `Vertex` accessor trait.
//!
//! `Point` is the owned vertex type used by the shapes. `Vertex` lets the area
//! routines read coordinates from plain arrays, tuples and `nalgebra` vectors too.

use core::fmt;

use nalgebra::Vector2;

use crate::error::GeomError;

/// Read access to planar coordinates.
pub trait Vertex {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// Immutable 2D point. Equality is exact per component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Build from a coordinate slice; anything but two entries is `InvalidDimension`.
    pub fn new(coords: &[f64]) -> Result<Self, GeomError> {
        match *coords {
            [x, y] => Ok(Self { x, y }),
            _ => Err(GeomError::InvalidDimension { got: coords.len() }),
        }
    }

    #[inline]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Vertex for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Vertex for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Vertex for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Vertex for Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = GeomError;

    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}
