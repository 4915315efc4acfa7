//! Frame composition
//!
//! Draw order is rays, then obstacles, then the light glyph. Later draws
//! overwrite earlier ones (no blending).

use super::palette::Palette;
use super::raster::{draw_line, fill_circle};
use super::surface::{PixelSurface, PixelWriter};
use crate::error::FrameError;
use crate::sim::{DirectionTable, Scene, calculate_intersection};

/// Clear `surface` and draw the whole scene under the surface lock
///
/// If the lock cannot be acquired the frame is left cleared and the error
/// is returned; the caller decides whether to carry on.
pub fn compose_frame<S: PixelSurface>(
    surface: &mut S,
    scene: &Scene,
    directions: &DirectionTable,
    palette: &Palette,
) -> Result<(), FrameError> {
    surface.fill_rect(None, palette.background);

    let mut pixels = surface.lock()?;
    draw_scene(&mut pixels, scene, directions, palette);
    Ok(())
}

/// Draw rays, obstacles and the light onto an already-cleared writer
pub fn draw_scene<W: PixelWriter>(
    px: &mut W,
    scene: &Scene,
    directions: &DirectionTable,
    palette: &Palette,
) {
    for ray in directions.rays_from(scene.light) {
        let dist = calculate_intersection(&ray, &scene.obstacles, scene.bounds);
        let hit = ray.at(dist);
        draw_line(
            px,
            (ray.origin.x as i32, ray.origin.y as i32),
            (hit.x as i32, hit.y as i32),
            palette.ray,
        );
    }

    for obstacle in &scene.obstacles {
        fill_circle(px, obstacle.center, obstacle.radius, palette.obstacle);
    }

    let light = scene.light_glyph();
    fill_circle(px, light.center, light.radius, palette.light);
}
