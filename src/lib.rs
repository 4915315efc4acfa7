//! Light Rays - a real-time 2D light/ray-casting visualizer
//!
//! Core modules:
//! - `sim`: Window-free core (geometry, ray/obstacle intersection, scene physics)
//! - `renderer`: Software frame composition and GPU presentation
//! - `platform`: Clock, input and window collaborators
//! - `driver`: Per-tick simulation loop
//! - `settings`: Data-driven scene configuration

pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{LoopControl, Simulation};
pub use error::{FrameError, InitError, SettingsError};
pub use settings::Settings;

use glam::DVec2;

/// Scene configuration constants
pub mod consts {
    /// Default screen rectangle (pixels)
    pub const SCREEN_WIDTH: u32 = 1200;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Rays emitted by the light, equally spaced over a full turn
    pub const NUM_RAYS: usize = 720;

    /// Display radius of the light glyph
    pub const LIGHT_GLYPH_RADIUS: f64 = 10.0;

    /// Running-minimum seed for hit distances; no real hit is ever this far
    pub const NO_HIT: f64 = 1e30;
}

/// Unit vector pointing at `angle` radians (counter-clockwise from +x, y down on screen)
#[inline]
pub fn unit_from_angle(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Clamp a point into `[1, width - 1] x [1, height - 1]`
///
/// A point on a wall has no positive distance to that wall for rays running
/// along it, so the light is kept one pixel inside.
#[inline]
pub fn clamp_to_rect(p: DVec2, width: f64, height: f64) -> DVec2 {
    DVec2::new(
        p.x.clamp(1.0, (width - 1.0).max(1.0)),
        p.y.clamp(1.0, (height - 1.0).max(1.0)),
    )
}
