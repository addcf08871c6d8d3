//! Polygon-shaped game object built by composition.
//!
//! A `Sprite` owns its `Polygon` and forwards geometry calls to it, adding
//! only linear and angular velocity. Game rules (wrapping, collisions,
//! lifetimes) belong to whoever owns the sprites.

use crate::geom2::{InvalidShapeError, Point, Polygon};
use crate::render::Canvas;

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    polygon: Polygon,
    /// Units per second.
    pub velocity: Point,
    /// Degrees per second, clockwise.
    pub spin: f64,
}

impl Sprite {
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            velocity: Point::origin(),
            spin: 0.0,
        }
    }

    /// Shorthand for `Sprite::new(Polygon::new(shape, offset, rotation)?)`.
    pub fn from_shape(
        shape: Vec<Point>,
        offset: Point,
        rotation: f64,
    ) -> Result<Self, InvalidShapeError> {
        Ok(Self::new(Polygon::new(shape, offset, rotation)?))
    }

    pub fn with_velocity(mut self, velocity: Point) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_spin(mut self, spin: f64) -> Self {
        self.spin = spin;
        self
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Advance the pose by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        let step = self.velocity.scale(dt);
        self.polygon.move_by(step.x, step.y);
        self.polygon.rotate(self.spin * dt);
    }

    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.polygon.paint(canvas);
    }

    pub fn contains(&self, point: Point) -> bool {
        self.polygon.contains(point)
    }
}
