//! Rendering module
//!
//! Frames are composed on the CPU into a 32-bit pixel surface, then handed
//! to the GPU only for presentation.

pub mod frame;
pub mod palette;
pub mod present;
pub mod raster;
pub mod surface;

pub use frame::{compose_frame, draw_scene};
pub use palette::{Palette, PixelFormat};
pub use present::GpuPresenter;
pub use surface::{Framebuffer, FramebufferLock, PixelSurface, PixelWriter, Rect};
