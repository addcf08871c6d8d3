//! Polygon geometry and a headless fixed-tick stage for an Asteroids-style game.
//!
//! Layout
//! - `geom2`: `Point`, `Polygon` (shape + pose), area/centroid helpers, random shapes.
//! - `render`: the rendering-host contract (`Canvas`) and a recording canvas.
//! - `sprite`: a game object that owns a `Polygon` and forwards geometry calls.
//! - `stage`: stage configuration and the fixed-tick update/paint loop.
//! - `field`: the playfield scene (background, centre line, sprites).
//!
//! API Policy
//! - The geometry contract (`Polygon::{new, rotate, move_by, world_points, paint, contains}`)
//!   is stable; everything around it is scaffold and may change freely.

pub mod field;
pub mod geom2;
pub mod render;
pub mod sprite;
pub mod stage;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{InvalidShapeError, Point, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::field::Field;
    pub use crate::geom2::rand::{draw_shape_radial, random_point, ReplayToken, ShapeCfg, VertexCount};
    pub use crate::geom2::{InvalidShapeError, Point, Polygon};
    pub use crate::render::{Canvas, Color, DrawCmd, Frame, Recorder};
    pub use crate::sprite::Sprite;
    pub use crate::stage::{Scene, Stage, StageCfg};
}
