//! The playfield scene: black background, white centre line, and sprites.

use crate::render::{Canvas, Color};
use crate::sprite::Sprite;
use crate::stage::{Scene, StageCfg};

/// Top edge of the centre line, in pixels from the top of the field.
const LINE_TOP: i32 = 50;

#[derive(Clone, Debug, Default)]
pub struct Field {
    pub width: u32,
    pub height: u32,
    pub sprites: Vec<Sprite>,
}

impl Field {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sprites: Vec::new(),
        }
    }

    /// Empty field sized to the stage.
    pub fn for_stage(cfg: &StageCfg) -> Self {
        Self::new(cfg.width, cfg.height)
    }

    pub fn push(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Field centre in world coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl Scene for Field {
    fn update(&mut self, dt: f64) {
        for s in &mut self.sprites {
            s.update(dt);
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        canvas.set_color(Color::Black);
        canvas.fill_rect(0, 0, w, h);
        canvas.set_color(Color::White);
        canvas.draw_line(w / 2, h / 2, w / 2, LINE_TOP);
        for s in &self.sprites {
            s.paint(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Point;
    use crate::render::{DrawCmd, Recorder};

    #[test]
    fn paints_background_line_then_sprites() {
        let mut field = Field::for_stage(&StageCfg::default());
        let tri = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        ];
        field.push(Sprite::from_shape(tri, Point::new(400.0, 300.0), 0.0).unwrap());
        let mut canvas = Recorder::default();
        field.paint(&mut canvas);
        let cmds = canvas.take_frame(0).commands;
        assert_eq!(cmds.len(), 5);
        assert_eq!(
            cmds[1],
            DrawCmd::FillRect {
                x: 0,
                y: 0,
                width: 800,
                height: 600
            }
        );
        assert_eq!(
            cmds[3],
            DrawCmd::Line {
                x1: 400,
                y1: 300,
                x2: 400,
                y2: 50
            }
        );
        assert_eq!(
            cmds[4],
            DrawCmd::Polygon {
                xs: vec![399, 401, 399],
                ys: vec![299, 299, 301],
            }
        );
    }

    #[test]
    fn update_advances_every_sprite() {
        let mut field = Field::new(100, 100);
        let sq = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        for _ in 0..3 {
            let s = Sprite::from_shape(sq.clone(), Point::origin(), 0.0)
                .unwrap()
                .with_velocity(Point::new(10.0, 0.0));
            field.push(s);
        }
        field.update(0.1);
        assert!(field.sprites.iter().all(|s| s.polygon().offset() == Point::new(1.0, 0.0)));
    }
}
