//! Integer rasterisers for rays and discs
//!
//! Both clip against the writer's dimensions, so any input (including
//! numerically overshooting hit points) stays in bounds.

use glam::DVec2;

use super::surface::PixelWriter;

/// Draw a line with Bresenham's algorithm
///
/// Endpoints are clamped to the surface first; the line always includes both
/// (clamped) endpoints.
pub fn draw_line<W: PixelWriter>(px: &mut W, from: (i32, i32), to: (i32, i32), color: u32) {
    let (w, h) = (px.width(), px.height());
    if w == 0 || h == 0 {
        return;
    }
    let max_x = (w - 1) as i32;
    let max_y = (h - 1) as i32;

    let (mut x0, mut y0) = (from.0.clamp(0, max_x), from.1.clamp(0, max_y));
    let (x1, y1) = (to.0.clamp(0, max_x), to.1.clamp(0, max_y));

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        px.set_pixel(x0 as u32, y0 as u32, color);
        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Fill a disc by scanning its bounding box (`dx² + dy² <= r²`)
///
/// Center and radius are truncated to whole pixels. The scan works in `f64`
/// and is clipped to the surface before any pixel is visited, so arbitrarily
/// large or distant discs cannot overflow.
pub fn fill_circle<W: PixelWriter>(px: &mut W, center: DVec2, radius: f64, color: u32) {
    let (w, h) = (px.width(), px.height());
    let cx = center.x.trunc();
    let cy = center.y.trunc();
    let r = radius.trunc();
    if !(r >= 0.0) || !center.is_finite() || w == 0 || h == 0 {
        return;
    }

    // Only pixels inside the bounding box
    let x_start = (cx - r).max(0.0);
    let x_end = (cx + r).min((w - 1) as f64);
    let y_start = (cy - r).max(0.0);
    let y_end = (cy + r).min((h - 1) as f64);
    if x_start > x_end || y_start > y_end {
        return;
    }

    let r2 = r * r;
    for y in y_start as u32..=y_end as u32 {
        let dy = y as f64 - cy;
        for x in x_start as u32..=x_end as u32 {
            let dx = x as f64 - cx;
            if dx * dx + dy * dy <= r2 {
                px.set_pixel(x, y, color);
            }
        }
    }
}
