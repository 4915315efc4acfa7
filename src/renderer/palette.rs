//! Colour mapping into the surface's native 32-bit encoding

use crate::settings::{PaletteSettings, Rgb};

/// Byte order of a 32-bit pixel in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Bytes R, G, B, A
    Rgba8888,
    /// Bytes B, G, R, A
    Bgra8888,
}

impl PixelFormat {
    /// Pack an opaque colour
    #[inline]
    pub fn map_rgb(self, r: u8, g: u8, b: u8) -> u32 {
        match self {
            PixelFormat::Rgba8888 => u32::from_le_bytes([r, g, b, 0xff]),
            PixelFormat::Bgra8888 => u32::from_le_bytes([b, g, r, 0xff]),
        }
    }

    /// Unpack to (r, g, b)
    #[cfg(test)]
    pub fn rgb(self, pixel: u32) -> (u8, u8, u8) {
        let [c0, g, c2, _] = pixel.to_le_bytes();
        match self {
            PixelFormat::Rgba8888 => (c0, g, c2),
            PixelFormat::Bgra8888 => (c2, g, c0),
        }
    }
}

/// Palette colours already mapped for one surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: u32,
    pub ray: u32,
    pub obstacle: u32,
    pub light: u32,
}

impl Palette {
    /// Map every palette colour once, at start-up
    pub fn map(colors: &PaletteSettings, format: PixelFormat) -> Self {
        let map = |Rgb(r, g, b): Rgb| format.map_rgb(r, g, b);
        Self {
            background: map(colors.background),
            ray: map(colors.ray),
            obstacle: map(colors.obstacle),
            light: map(colors.light),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_rgb_byte_order() {
        let rgba = PixelFormat::Rgba8888.map_rgb(255, 212, 59);
        assert_eq!(rgba.to_le_bytes(), [255, 212, 59, 255]);
        let bgra = PixelFormat::Bgra8888.map_rgb(255, 212, 59);
        assert_eq!(bgra.to_le_bytes(), [59, 212, 255, 255]);
    }

    #[test]
    fn test_unpack() {
        for format in [PixelFormat::Rgba8888, PixelFormat::Bgra8888] {
            assert_eq!(format.rgb(format.map_rgb(50, 50, 255)), (50, 50, 255));
        }
    }

    #[test]
    fn test_default_palette_is_distinct() {
        let p = Palette::map(&PaletteSettings::default(), PixelFormat::Bgra8888);
        let all = [p.background, p.ray, p.obstacle, p.light];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
