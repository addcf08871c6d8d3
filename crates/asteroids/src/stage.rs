//! Stage configuration and the fixed-tick update/paint loop.
//!
//! Each tick: `scene.update(dt)`, `scene.paint(canvas)`, then the frame
//! callback (where a host presents or records the frame). In real-time mode the
//! loop sleeps one tick interval between frames; headless runs go flat out
//! with the same `dt`, so results do not depend on wall-clock timing.

use std::ops::ControlFlow;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::render::Canvas;

/// Stage configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageCfg {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Tick interval in milliseconds.
    pub tick_ms: u64,
    /// Sleep `tick_ms` between ticks.
    pub realtime: bool,
}

impl Default for StageCfg {
    fn default() -> Self {
        Self {
            title: "Asteroids!".to_string(),
            width: 800,
            height: 600,
            tick_ms: 10,
            realtime: false,
        }
    }
}

impl StageCfg {
    /// Seconds per tick.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }
}

/// Something the stage can advance and draw once per tick.
pub trait Scene {
    fn update(&mut self, dt: f64);
    fn paint(&self, canvas: &mut dyn Canvas);
}

/// Drives a `Scene` at a fixed tick.
#[derive(Debug)]
pub struct Stage {
    cfg: StageCfg,
    on: bool,
    ticks: u64,
}

impl Stage {
    pub fn new(cfg: StageCfg) -> Self {
        Self {
            cfg,
            on: true,
            ticks: 0,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &StageCfg {
        &self.cfg
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Ticks completed over the stage's lifetime.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Switch the stage off; `run` returns before the next tick.
    pub fn stop(&mut self) {
        self.on = false;
    }

    /// Run up to `max_ticks` ticks, or until the stage is switched off.
    ///
    /// `on_frame` gets the tick number and the canvas after painting;
    /// returning `ControlFlow::Break` switches the stage off.
    /// Returns the number of ticks run by this call.
    pub fn run<S, C, F>(
        &mut self,
        scene: &mut S,
        canvas: &mut C,
        max_ticks: u64,
        mut on_frame: F,
    ) -> u64
    where
        S: Scene + ?Sized,
        C: Canvas,
        F: FnMut(u64, &mut C) -> ControlFlow<()>,
    {
        let dt = self.cfg.dt();
        let pause = Duration::from_millis(self.cfg.tick_ms);
        debug!(
            title = %self.cfg.title,
            width = self.cfg.width,
            height = self.cfg.height,
            tick_ms = self.cfg.tick_ms,
            max_ticks,
            "stage start"
        );
        let mut ran = 0u64;
        while self.on && ran < max_ticks {
            let tick = self.ticks;
            scene.update(dt);
            scene.paint(&mut *canvas);
            self.ticks += 1;
            ran += 1;
            trace!(tick, "frame");
            if on_frame(tick, &mut *canvas).is_break() {
                self.stop();
            }
            if self.cfg.realtime && self.on && ran < max_ticks {
                std::thread::sleep(pause);
            }
        }
        debug!(ran, total = self.ticks, on = self.on, "stage stop");
        ran
    }
}
