//! Spin a ship outline in place and print its integer outline every 10 ticks.
//!
//! Usage:
//!   cargo run -p asteroids --example spin

use std::ops::ControlFlow;

use asteroids::prelude::*;

fn main() {
    let cfg = StageCfg::default();
    let mut field = Field::for_stage(&cfg);
    let (cx, cy) = field.center();
    let ship = vec![
        Point::new(0.0, 0.0),
        Point::new(30.0, 10.0),
        Point::new(0.0, 20.0),
        Point::new(6.0, 10.0),
    ];
    match Sprite::from_shape(ship, Point::new(cx, cy), 0.0) {
        Ok(s) => field.push(s.with_spin(180.0)),
        Err(e) => {
            eprintln!("bad ship shape: {e}");
            return;
        }
    }
    let mut stage = Stage::new(cfg);
    let mut canvas = Recorder::default();
    stage.run(&mut field, &mut canvas, 100, |tick, c| {
        let frame = c.take_frame(tick);
        if tick % 10 == 0 {
            if let Some(DrawCmd::Polygon { xs, ys }) = frame.commands.last() {
                println!("tick {tick:3}: xs={xs:?} ys={ys:?}");
            }
        }
        ControlFlow::Continue(())
    });
}
