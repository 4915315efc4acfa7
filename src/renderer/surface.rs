//! Pixel surface capability
//!
//! Direct pixel writes only happen through a lock guard. Locking borrows the
//! surface exclusively, so it cannot be presented until the guard is dropped,
//! and dropping the guard releases it on every path out of the draw code.

use super::palette::PixelFormat;
use crate::error::FrameError;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Intersect with `[0, width) x [0, height)`; `None` if nothing is left
    pub fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = (self.x as i64 + self.w as i64).min(width as i64);
        let y1 = (self.y as i64 + self.h as i64).min(height as i64);
        (x0 < x1 && y0 < y1).then(|| (x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Write access to a locked surface
pub trait PixelWriter {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Coordinates outside the surface are ignored
    fn set_pixel(&mut self, x: u32, y: u32, color: u32);
    /// Fill `rect` clipped to the surface
    fn fill_rect(&mut self, rect: Rect, color: u32);
}

/// A presentable 32-bit pixel surface
pub trait PixelSurface {
    type Lock<'a>: PixelWriter
    where
        Self: 'a;

    fn pixel_format(&self) -> PixelFormat;

    /// Fill `rect` (whole surface if `None`) without holding the lock
    fn fill_rect(&mut self, rect: Option<Rect>, color: u32);

    /// Acquire exclusive pixel access until the guard is dropped
    fn lock(&mut self) -> Result<Self::Lock<'_>, FrameError>;

    /// Show the finished frame
    fn present(&mut self) -> Result<(), FrameError>;
}

/// In-memory surface, pitch equal to width
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels, `width * height` entries
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }
}

impl PixelSurface for Framebuffer {
    type Lock<'a> = FramebufferLock<'a>;

    fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    fn fill_rect(&mut self, rect: Option<Rect>, color: u32) {
        match rect {
            Some(rect) => fill(&mut self.pixels, self.width, self.height, rect, color),
            None => self.pixels.fill(color),
        }
    }

    fn lock(&mut self) -> Result<FramebufferLock<'_>, FrameError> {
        if self.pixels.is_empty() {
            return Err(FrameError::Lock("framebuffer has no pixels"));
        }
        Ok(FramebufferLock {
            width: self.width,
            height: self.height,
            pixels: &mut self.pixels,
        })
    }

    fn present(&mut self) -> Result<(), FrameError> {
        Ok(())
    }
}

/// Scoped write access to a `Framebuffer`
pub struct FramebufferLock<'a> {
    width: u32,
    height: u32,
    pixels: &'a mut [u32],
}

impl PixelWriter for FramebufferLock<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: u32, y: u32, color: u32) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        fill(self.pixels, self.width, self.height, rect, color);
    }
}

fn fill(pixels: &mut [u32], width: u32, height: u32, rect: Rect, color: u32) {
    let Some((x0, y0, x1, y1)) = rect.clip(width, height) else {
        return;
    };
    for y in y0..y1 {
        let row = (y * width) as usize;
        pixels[row + x0 as usize..row + x1 as usize].fill(color);
    }
}
