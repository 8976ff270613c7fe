use core::fmt;

use thiserror::Error;

/// Vertex-count rule a shape enforces at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    #[inline]
    pub fn admits(&self, n: usize) -> bool {
        match *self {
            Arity::Exactly(k) => n == k,
            Arity::AtLeast(k) => n >= k,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(k) => write!(f, "exactly {k}"),
            Arity::AtLeast(k) => write!(f, "at least {k}"),
        }
    }
}

/// Construction errors. Queries on a constructed value never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeomError {
    #[error("point needs exactly 2 coordinates, got {got}")]
    InvalidDimension { got: usize },

    #[error("{shape} needs {expected} vertices, got {got}")]
    InvalidVertexCount {
        shape: &'static str,
        expected: Arity,
        got: usize,
    },
}

impl GeomError {
    pub(crate) fn vertex_count(shape: &'static str, expected: Arity, got: usize) -> Self {
        Self::InvalidVertexCount {
            shape,
            expected,
            got,
        }
    }
}
