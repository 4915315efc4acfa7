//! Ray casting against the boundary wall and circular obstacles
//!
//! Every ray emitted by the light ends on the nearest surface in front of it.
//! The screen rectangle acts as a wall that always catches rays that miss
//! every obstacle, so a ray cast from inside the screen always terminates.

use super::geometry::{Bounds, Circle, Ray};
use crate::consts::NO_HIT;

/// Distance along `ray` to the nearest of the four boundary walls
///
/// Axes whose direction component is exactly zero are skipped (the ray is
/// parallel to those walls). Only strictly positive candidates count.
pub fn boundary_distance(ray: &Ray, bounds: Bounds) -> f64 {
    let mut min_t = NO_HIT;

    if ray.direction.x != 0.0 {
        let t1 = (0.0 - ray.origin.x) / ray.direction.x;
        let t2 = (bounds.width - ray.origin.x) / ray.direction.x;
        if t1 > 0.0 {
            min_t = min_t.min(t1);
        }
        if t2 > 0.0 {
            min_t = min_t.min(t2);
        }
    }
    if ray.direction.y != 0.0 {
        let t1 = (0.0 - ray.origin.y) / ray.direction.y;
        let t2 = (bounds.height - ray.origin.y) / ray.direction.y;
        if t1 > 0.0 {
            min_t = min_t.min(t1);
        }
        if t2 > 0.0 {
            min_t = min_t.min(t2);
        }
    }

    min_t
}

/// Distance along `ray` to the near side of `circle`, if the ray strikes it
///
/// One-sided: circles whose center projects behind the origin are never hit,
/// and a ray starting inside a circle passes out through it (the near root
/// is negative).
pub fn circle_distance(ray: &Ray, circle: &Circle) -> Option<f64> {
    let l = circle.center - ray.origin;
    let tca = l.dot(ray.direction);
    if tca < 0.0 {
        return None;
    }

    // Squared distance from the center to the ray's line
    let d2 = l.length_squared() - tca * tca;
    let r2 = circle.radius * circle.radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    (t0 > 0.0).then_some(t0)
}

/// Hit distance of `ray`: the nearest obstacle in front of it, or the wall
pub fn calculate_intersection(ray: &Ray, obstacles: &[Circle], bounds: Bounds) -> f64 {
    obstacles
        .iter()
        .filter_map(|circle| circle_distance(ray, circle))
        .fold(boundary_distance(ray, bounds), f64::min)
}
