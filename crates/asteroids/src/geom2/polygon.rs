//! Polygon with a fixed local shape and a mutable pose.
//!
//! Model
//! - `shape`: points in traversal order, translated at construction so the
//!   component-wise minimum sits at local (0,0). Never changed afterwards.
//! - `offset`: world translation; `rotation`: degrees in [0, 360), clockwise.
//!
//! Transform (per local point p, local centroid c, angle θ)
//! - `q = R(θ)·(p − c) + c/2 + offset`.
//! - The pivot is added back at half weight, so at identity pose the outline
//!   sits `c/2` up-left of the normalized shape.
//!
//! Code cross-refs: `util::{bounding_origin, shoelace_area, shoelace_centroid}`, `render::Canvas`

use nalgebra::{Rotation2, Vector2};
use tracing::trace;

use super::error::InvalidShapeError;
use super::point::Point;
use super::util::{bounding_origin, shoelace_area, shoelace_centroid};
use crate::render::Canvas;

/// A polygon-shaped object in the plane.
///
/// Invariants:
/// - `shape.len() >= 3`, all coordinates finite, area finite and non-zero,
///   centroid finite.
/// - min x and min y over `shape` are both exactly 0.
/// - `rotation` in [0, 360).
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    shape: Vec<Point>,
    offset: Point,
    rotation: f64,
}

impl Polygon {
    /// Build a polygon from `shape` (in drawing order) and an initial pose.
    ///
    /// Only the relative positions of the points matter:
    /// `{(0,1),(1,1),(1,0)}` and `{(9,10),(10,10),(10,9)}` are the same shape.
    pub fn new(
        mut shape: Vec<Point>,
        offset: Point,
        rotation: f64,
    ) -> Result<Self, InvalidShapeError> {
        if shape.len() < 3 {
            return Err(InvalidShapeError::TooFewPoints { len: shape.len() });
        }
        if let Some(index) = shape.iter().position(|p| !p.is_finite()) {
            return Err(InvalidShapeError::NonFinite { index });
        }
        let origin = bounding_origin(&shape).ok_or(InvalidShapeError::TooFewPoints { len: 0 })?;
        for p in shape.iter_mut() {
            p.x -= origin.x;
            p.y -= origin.y;
        }
        let area = shoelace_area(&shape);
        if area == 0.0 {
            return Err(InvalidShapeError::ZeroArea);
        }
        if !area.is_finite() || !shoelace_centroid(&shape).is_finite() {
            return Err(InvalidShapeError::Overflow);
        }
        trace!(
            points = shape.len(),
            origin_x = origin.x,
            origin_y = origin.y,
            "normalized polygon shape"
        );
        Ok(Self {
            shape,
            offset,
            rotation: wrap_degrees(rotation),
        })
    }

    /// Polygon at offset (0,0) with rotation 0.
    pub fn at_origin(shape: Vec<Point>) -> Result<Self, InvalidShapeError> {
        Self::new(shape, Point::origin(), 0.0)
    }

    /// Normalized local shape.
    #[inline]
    pub fn shape(&self) -> &[Point] {
        &self.shape
    }

    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Current rotation in degrees, within [0, 360).
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// True if the shape has no points (never, for a constructed polygon).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Rotate clockwise by `degrees` (negative is counter-clockwise).
    /// Non-finite `degrees` leave the rotation unchanged.
    pub fn rotate(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            return;
        }
        self.rotation = wrap_degrees(self.rotation + degrees);
    }

    /// Translate the offset by `(dx, dy)`. Ignored unless both are finite.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Area of the local shape.
    pub fn area(&self) -> f64 {
        shoelace_area(&self.shape)
    }

    /// Area centroid of the local shape (pose-independent).
    pub(crate) fn centroid(&self) -> Point {
        shoelace_centroid(&self.shape)
    }

    /// Vertices in world space for the current offset and rotation.
    pub fn world_points(&self) -> Vec<Point> {
        let c: Vector2<f64> = self.centroid().into();
        let rot = Rotation2::new(self.rotation.to_radians());
        let shift = c / 2.0 + Vector2::from(self.offset);
        self.shape
            .iter()
            .map(|&p| Point::from(rot * (Vector2::from(p) - c) + shift))
            .collect()
    }

    /// Draw the outline through the host's closed-polygon primitive.
    ///
    /// Coordinates are truncated toward zero, not rounded.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let (xs, ys) = self.outline();
        canvas.draw_polygon(&xs, &ys, xs.len());
    }

    /// World outline as parallel integer arrays (what `paint` hands the host).
    pub fn outline(&self) -> (Vec<i32>, Vec<i32>) {
        self.world_points()
            .into_iter()
            .map(|p| (p.x as i32, p.y as i32))
            .unzip()
    }

    /// Ray-casting point-in-polygon test against the current world position.
    pub fn contains(&self, point: Point) -> bool {
        let pts = self.world_points();
        let n = pts.len();
        let mut crossings = 0usize;
        for i in 0..n {
            let a = pts[i];
            let b = pts[(i + 1) % n];
            let run = b.x - a.x;
            if run == 0.0 {
                // vertical edge: never straddles, and the slope is undefined
                continue;
            }
            let straddles = (a.x < point.x && point.x <= b.x) || (b.x < point.x && point.x <= a.x);
            if straddles && point.y > a.y + (b.y - a.y) / run * (point.x - a.x) {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    }
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
fn wrap_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}
