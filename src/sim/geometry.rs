//! Geometry primitives: circles, rays and the screen rectangle
//!
//! Vector arithmetic (add, sub, scale, dot, squared length) comes from
//! `glam::DVec2`; these types only add the scene-level meaning.

use glam::DVec2;

/// A circular obstacle (or the light glyph)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    /// Always > 0
    pub radius: f64,
    /// Pixels per second; zero for static obstacles and the light glyph
    pub velocity: DVec2,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            velocity: DVec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// True if `p` lies strictly inside the circle
    #[cfg(test)]
    pub fn contains(&self, p: DVec2) -> bool {
        (p - self.center).length_squared() < self.radius * self.radius
    }
}

/// A directed half-line used to sample visibility from the light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec2,
    /// Unit length
    pub direction: DVec2,
}

impl Ray {
    pub fn new(origin: DVec2, direction: DVec2) -> Self {
        Self { origin, direction }
    }

    /// Point at parametric distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f64) -> DVec2 {
        self.origin + self.direction * t
    }
}

/// The screen rectangle `[0, width) x [0, height)`, also the boundary wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// Distance from `p` to the farthest corner of the rectangle
    #[cfg(test)]
    pub fn farthest_corner_distance(&self, p: DVec2) -> f64 {
        [
            DVec2::ZERO,
            DVec2::new(self.width, 0.0),
            DVec2::new(0.0, self.height),
            DVec2::new(self.width, self.height),
        ]
        .iter()
        .map(|corner| (*corner - p).length())
        .fold(0.0, f64::max)
    }
}
