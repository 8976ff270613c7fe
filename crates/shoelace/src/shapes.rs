//! Concrete shapes: vertex-count checked wrappers over a point list.
//!
//! Each constructor validates the count and stores the points unchanged. Nothing
//! else is checked: a `Square` is any quadrilateral, an `Ngon` need not be convex,
//! and the counter-clockwise order of `CcwNgon` is a naming convention.

use alloc::vec::Vec;

use crate::error::{Arity, GeomError};
use crate::point::Point;
use crate::polygon::Polygon;

/// Exactly three vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle([Point; 3]);

/// Exactly four vertices. Side lengths and angles are not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Square([Point; 4]);

/// Three or more vertices, expected (not enforced) counter-clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Ngon(Vec<Point>);

/// Name kept for callers that spell out the expected winding.
pub type CcwNgon = Ngon;

impl Triangle {
    pub const ARITY: Arity = Arity::Exactly(3);

    pub fn new(points: Vec<Point>) -> Result<Self, GeomError> {
        <[Point; 3]>::try_from(points)
            .map(Self)
            .map_err(|points| GeomError::vertex_count("triangle", Self::ARITY, points.len()))
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        3
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.0.to_vec()
    }
}

impl Square {
    pub const ARITY: Arity = Arity::Exactly(4);

    pub fn new(points: Vec<Point>) -> Result<Self, GeomError> {
        <[Point; 4]>::try_from(points)
            .map(Self)
            .map_err(|points| GeomError::vertex_count("square", Self::ARITY, points.len()))
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        4
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.0.to_vec()
    }
}

impl Ngon {
    pub const ARITY: Arity = Arity::AtLeast(3);

    pub fn new(points: Vec<Point>) -> Result<Self, GeomError> {
        if Self::ARITY.admits(points.len()) {
            Ok(Self(points))
        } else {
            Err(GeomError::vertex_count("ngon", Self::ARITY, points.len()))
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.0.len()
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.0
    }
}

macro_rules! impl_polygon {
    ($($shape:ty),*) => {$(
        impl Polygon for $shape {
            type V = Point;
            #[inline]
            fn vertices(&self) -> &[Point] {
                &self.0
            }
        }

        impl TryFrom<Vec<Point>> for $shape {
            type Error = GeomError;
            fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
                Self::new(points)
            }
        }
    )*};
}

impl_polygon!(Triangle, Square, Ngon);
