//! Error taxonomy
//!
//! - `InitError`: start-up failures, fatal
//! - `FrameError`: per-frame failures, the frame is skipped and the loop continues
//! - `SettingsError`: bad settings file, defaults are used instead
//!
//! The simulation core (`sim`) has no failure modes.

use thiserror::Error;

/// Window, surface or GPU unavailable at start-up
#[derive(Debug, Error)]
pub enum InitError {
    #[error("event loop unavailable: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("graphics device unavailable: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// A single frame could not be drawn or shown
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("surface lock failed: {0}")]
    Lock(&'static str),
    #[error("present failed: {0}")]
    Present(#[from] wgpu::SurfaceError),
}

/// Settings file could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}
