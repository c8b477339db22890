//! Random 2-D darts thrown into a bounded region, alone or in sets.
//!
//! Darts thrown into the default bounds land in the square `[-1, 1]²`,
//! so the share of darts with a distance from the origin of at most one
//! approaches `π / 4`.

#[macro_use]
extern crate log;
extern crate rand;

mod bounds;
mod dart;
mod dart_set;
mod error;

pub use bounds::{Bounds, ThrowBounds};
pub use dart::Dart;
pub use dart_set::DartSet;
pub use error::BoundsError;
