//! Polygon area via the shoelace formula.
//!
//! Model
//! - `Point`: immutable 2D coordinate pair, exact equality.
//! - `Polygon`: capability trait; implementors expose an ordered vertex slice and
//!   receive `area()` from the shared algorithm in `polygon`.
//! - `Triangle`, `Square`, `Ngon`: constructors that check vertex count and nothing else.
//!
//! Scope
//! - Simple polygons only. Self-intersecting input returns the absolute net signed
//!   area, which is rarely what a caller wants; nothing here detects it.
//! - Winding order is the caller's business; `area()` is winding-independent.
//!
//! Targets
//! - `no_std` + `alloc` with default features off; only `Ngon` allocates.
//! - `std` (default) forwards to `nalgebra`/`thiserror`.
//! - `sample` adds reference and random polygons for tests and benches.
//!
//! Code cross-refs: `polygon::{area, signed_area, shoelace_sum}`, `shapes`, `sample`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(
    clippy::all,
    clippy::todo,
    clippy::style,
    clippy::suspicious,
    clippy::complexity,
    clippy::unimplemented
)]
#![cfg_attr(
    not(test),
    deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]
#![warn(clippy::pedantic, clippy::nursery, unused, rust_2018_idioms)]

extern crate alloc;

pub mod error;
pub mod point;
pub mod polygon;
#[cfg(feature = "sample")]
pub mod sample;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Arity, GeomError};
pub use point::{Point, Vertex};
pub use polygon::{area, parallelogram_area, shoelace_sum, signed_area, Polygon};
pub use shapes::{CcwNgon, Ngon, Square, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Arity, GeomError};
    pub use crate::point::{Point, Vertex};
    pub use crate::polygon::{area, signed_area, Polygon};
    pub use crate::shapes::{CcwNgon, Ngon, Square, Triangle};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests;
