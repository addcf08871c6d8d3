//! Rendering-host contract and a headless recording canvas.
//!
//! The host owns the surface, colors, clearing and buffering. Geometry only
//! ever calls `draw_polygon`; the scene background uses the provided extras.

use serde::{Deserialize, Serialize};

/// Drawing color understood by every host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

/// A drawing surface supplied by the rendering host.
pub trait Canvas {
    /// Draw the closed outline through `n` vertices given as parallel arrays,
    /// using the current color.
    fn draw_polygon(&mut self, xs: &[i32], ys: &[i32], n: usize);

    fn set_color(&mut self, _color: Color) {}

    fn fill_rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32) {}

    fn draw_line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32) {}
}

/// One recorded host call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    SetColor { color: Color },
    FillRect { x: i32, y: i32, width: i32, height: i32 },
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    Polygon { xs: Vec<i32>, ys: Vec<i32> },
}

/// Everything drawn during one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub commands: Vec<DrawCmd>,
}

/// Canvas that records calls instead of drawing them.
#[derive(Debug, Default)]
pub struct Recorder {
    pending: Vec<DrawCmd>,
}

impl Recorder {
    /// Commands recorded since the last `take_frame`.
    pub fn pending(&self) -> &[DrawCmd] {
        &self.pending
    }

    /// Drain the recorded commands into a frame.
    pub fn take_frame(&mut self, tick: u64) -> Frame {
        Frame {
            tick,
            commands: std::mem::take(&mut self.pending),
        }
    }
}

impl Canvas for Recorder {
    fn draw_polygon(&mut self, xs: &[i32], ys: &[i32], n: usize) {
        let n = n.min(xs.len()).min(ys.len());
        self.pending.push(DrawCmd::Polygon {
            xs: xs[..n].to_vec(),
            ys: ys[..n].to_vec(),
        });
    }

    fn set_color(&mut self, color: Color) {
        self.pending.push(DrawCmd::SetColor { color });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.pending.push(DrawCmd::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.pending.push(DrawCmd::Line { x1, y1, x2, y2 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_clips_to_vertex_count() {
        let mut r = Recorder::default();
        r.draw_polygon(&[1, 2, 3, 4], &[5, 6, 7], 4);
        assert_eq!(
            r.pending(),
            &[DrawCmd::Polygon {
                xs: vec![1, 2, 3],
                ys: vec![5, 6, 7],
            }]
        );
    }

    #[test]
    fn take_frame_drains() {
        let mut r = Recorder::default();
        r.set_color(Color::White);
        r.draw_line(0, 0, 10, 10);
        let f = r.take_frame(7);
        assert_eq!(f.tick, 7);
        assert_eq!(f.commands.len(), 2);
        assert!(r.pending().is_empty());
    }

    #[test]
    fn frame_json_shape() {
        let f = Frame {
            tick: 1,
            commands: vec![DrawCmd::SetColor {
                color: Color::Black,
            }],
        };
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["commands"][0]["op"], "set_color");
        assert_eq!(v["commands"][0]["color"], "black");
    }
}
