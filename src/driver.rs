//! Simulation loop driver
//!
//! One call to `Simulation::run_tick` is one iteration of the main loop:
//! time, input, physics, frame, present. It owns every piece of per-run state
//! and takes the surface by reference, so it runs headless just as well as
//! behind a window.

use crate::platform::clock::FrameClock;
use crate::platform::input::{InputEvent, collect_tick_input};
use crate::renderer::{Palette, PixelFormat, PixelSurface, compose_frame};
use crate::settings::Settings;
use crate::sim::{DirectionTable, Scene, tick};

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    /// A quit was requested; the tick that saw it has completed
    Exit,
}

/// Once-per-second frame rate logging
#[derive(Debug, Default)]
struct FrameStats {
    frames: u32,
    elapsed_ms: u64,
}

impl FrameStats {
    fn record(&mut self, dt_ms: u64) {
        self.frames += 1;
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= 1000 {
            let fps = self.frames as f64 * 1000.0 / self.elapsed_ms as f64;
            let avg = self.elapsed_ms as f64 / self.frames as f64;
            log::debug!("{fps:.1} fps ({avg:.2} ms/frame)");
            *self = Self::default();
        }
    }
}

/// Everything one run of the visualizer owns
pub struct Simulation<C: FrameClock> {
    scene: Scene,
    directions: DirectionTable,
    palette: Palette,
    clock: C,
    stats: FrameStats,
    ticks: u64,
}

impl<C: FrameClock> Simulation<C> {
    /// Build the initial scene and map the palette for a surface of `format`
    pub fn new(settings: &Settings, format: PixelFormat, clock: C) -> Self {
        Self {
            scene: Scene::from_settings(settings),
            directions: DirectionTable::new(settings.num_rays),
            palette: Palette::map(&settings.palette, format),
            clock,
            stats: FrameStats::default(),
            ticks: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one full tick against `surface`
    ///
    /// Frame failures are logged and skipped; they never stop the loop.
    pub fn run_tick<S, I>(&mut self, events: I, surface: &mut S) -> LoopControl
    where
        S: PixelSurface,
        I: IntoIterator<Item = InputEvent>,
    {
        let dt_ms = self.clock.elapsed_ms();
        let dt = dt_ms as f64 / 1000.0;

        let input = collect_tick_input(events);
        tick(&mut self.scene, &input, dt);

        if let Err(e) = compose_frame(surface, &self.scene, &self.directions, &self.palette) {
            log::warn!("Skipping frame {}: {e}", self.ticks);
        }
        if let Err(e) = surface.present() {
            log::warn!("Frame {} not presented: {e}", self.ticks);
        }

        self.ticks += 1;
        self.stats.record(dt_ms);

        if input.quit {
            log::info!("Quit requested after {} ticks", self.ticks);
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }
}
