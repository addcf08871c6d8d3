//! 2D polygon geometry (local shape + mutable pose).
//!
//! Purpose
//! - `Point`: plain 2D coordinate with value semantics.
//! - `Polygon`: a shape normalized to its own bounding origin, placed in the
//!   world by an offset and a clockwise rotation in degrees.
//!
//! Conventions
//! - Screen coordinates: +x east, +y south. Positive rotation is clockwise on
//!   screen (0° = east, 90° = south).
//! - World points are recomputed from shape + pose on every query.
//!
//! Code cross-refs: `Polygon`, `util::{bounding_origin, shoelace_area, shoelace_centroid}`

mod error;
mod point;
mod polygon;
pub mod rand;
mod util;

pub use error::InvalidShapeError;
pub use point::Point;
pub use polygon::Polygon;
pub use util::{bounding_origin, shoelace_area};
