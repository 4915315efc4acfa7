//! Scene state and obstacle physics
//!
//! The scene is the single piece of mutable simulation state: the light
//! position (driven by the pointer) and the obstacle list (driven by physics).

use glam::DVec2;

use super::geometry::{Bounds, Circle};
use crate::clamp_to_rect;
use crate::consts::LIGHT_GLYPH_RADIUS;
use crate::settings::Settings;

/// Light position plus obstacles inside the screen rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub bounds: Bounds,
    /// Current light position (origin of every ray this frame)
    pub light: DVec2,
    /// Display radius of the light glyph
    pub light_radius: f64,
    /// Obstacles in draw/iteration order; created once, never removed
    pub obstacles: Vec<Circle>,
}

impl Scene {
    /// Empty scene with the light at `light`
    pub fn new(bounds: Bounds, light: DVec2) -> Self {
        Self {
            bounds,
            light: clamp_to_rect(light, bounds.width, bounds.height),
            light_radius: LIGHT_GLYPH_RADIUS,
            obstacles: Vec::new(),
        }
    }

    /// Build the initial scene described by `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        let bounds = Bounds::from_pixels(settings.width, settings.height);
        let mut scene = Self::new(bounds, settings.light.start);
        scene.light_radius = settings.light.glyph_radius;
        scene.obstacles = settings
            .obstacles
            .iter()
            .map(|o| Circle::new(o.center, o.radius).with_velocity(o.velocity))
            .collect();
        scene
    }

    pub fn with_obstacle(mut self, obstacle: Circle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Move the light, keeping it on the screen rectangle
    pub fn set_light(&mut self, pos: DVec2) {
        self.light = clamp_to_rect(pos, self.bounds.width, self.bounds.height);
    }

    /// The light as a drawable disc
    pub fn light_glyph(&self) -> Circle {
        Circle::new(self.light, self.light_radius)
    }

    /// Advance obstacle physics by `dt` seconds
    pub fn step(&mut self, dt: f64) {
        for obstacle in &mut self.obstacles {
            integrate(obstacle, dt, self.bounds);
        }
    }
}

/// Move an obstacle and bounce it off the screen edges
///
/// Elastic and lossless, no sub-stepping: a fast obstacle may overshoot the
/// edge for a tick. A component is only inverted while it still points out
/// of the screen, so each crossing flips it exactly once.
fn integrate(obstacle: &mut Circle, dt: f64, bounds: Bounds) {
    obstacle.center += obstacle.velocity * dt;

    let r = obstacle.radius;
    obstacle.velocity.x = bounce(obstacle.center.x, r, obstacle.velocity.x, bounds.width);
    obstacle.velocity.y = bounce(obstacle.center.y, r, obstacle.velocity.y, bounds.height);
}

#[inline]
fn bounce(pos: f64, radius: f64, vel: f64, extent: f64) -> f64 {
    if pos - radius < 0.0 && vel < 0.0 {
        -vel
    } else if pos + radius > extent && vel > 0.0 {
        -vel
    } else {
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 600.0;

    fn bouncing_scene(velocity: f64) -> Scene {
        Scene::new(Bounds::new(1200.0, H), DVec2::new(200.0, 200.0)).with_obstacle(
            Circle::new(DVec2::new(550.0, H / 2.0), 80.0).with_velocity(DVec2::new(0.0, velocity)),
        )
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut scene = bouncing_scene(150.0);
        scene.step(0.1);
        assert!((scene.obstacles[0].center.y - 315.0).abs() < 1e-9);
        assert_eq!(scene.obstacles[0].velocity.y, 150.0);
    }

    #[test]
    fn test_bounce_off_bottom_flips_once() {
        let mut scene = bouncing_scene(150.0);
        let mut flips = 0;
        let mut last_sign = 1.0;
        // Bottom edge crosses 600 after ~1.47s; stop before the top is reached
        for _ in 0..30 {
            scene.step(0.1);
            let sign = scene.obstacles[0].velocity.y.signum();
            if sign != last_sign {
                flips += 1;
                last_sign = sign;
            }
        }
        assert_eq!(flips, 1);
        assert_eq!(scene.obstacles[0].velocity.y, -150.0);
    }

    #[test]
    fn test_overshoot_does_not_reflip() {
        let mut scene = bouncing_scene(150.0);
        // Deep overshoot in one large step
        scene.obstacles[0].center.y = 590.0;
        scene.step(0.01);
        assert_eq!(scene.obstacles[0].velocity.y, -150.0);
        // Still outside next tick, but now moving back in
        scene.step(0.01);
        assert_eq!(scene.obstacles[0].velocity.y, -150.0);
    }

    #[test]
    fn test_bounce_off_top() {
        let mut scene = bouncing_scene(-150.0);
        scene.obstacles[0].center.y = 81.0;
        scene.step(0.1);
        assert_eq!(scene.obstacles[0].velocity.y, 150.0);
    }

    #[test]
    fn test_oscillates_between_edges() {
        let mut scene = bouncing_scene(150.0);
        let mut flips = 0;
        let mut last = scene.obstacles[0].velocity.y;
        for _ in 0..1000 {
            scene.step(1.0 / 60.0);
            let v = scene.obstacles[0].velocity.y;
            if v.signum() != last.signum() {
                flips += 1;
            }
            last = v;
            let c = scene.obstacles[0].center.y;
            assert!(c > 0.0 && c < H, "obstacle escaped: {c}");
        }
        // ~16.7s at 150 px/s over a 440 px travel span: 6 crossings
        assert!((5..=6).contains(&flips), "flips = {flips}");
    }

    #[test]
    fn test_static_obstacle_stays_put() {
        let mut scene = Scene::new(Bounds::new(1200.0, H), DVec2::ZERO)
            .with_obstacle(Circle::new(DVec2::new(200.0, 100.0), 30.0));
        let before = scene.obstacles[0];
        scene.step(0.5);
        assert_eq!(scene.obstacles[0], before);
    }

    #[test]
    fn test_set_light_clamps_to_screen() {
        let mut scene = bouncing_scene(0.0);
        scene.set_light(DVec2::new(-20.0, 700.0));
        assert_eq!(scene.light, DVec2::new(1.0, H - 1.0));
        scene.set_light(DVec2::new(321.0, 123.0));
        assert_eq!(scene.light, DVec2::new(321.0, 123.0));
    }

    #[test]
    fn test_clamped_light_reaches_every_wall() {
        use crate::sim::{Ray, boundary_distance};

        let mut scene = bouncing_scene(0.0);
        scene.set_light(DVec2::new(0.0, 0.0));
        for dir in [DVec2::X, DVec2::NEG_X, DVec2::Y, DVec2::NEG_Y] {
            let t = boundary_distance(&Ray::new(scene.light, dir), scene.bounds);
            assert!(t > 0.0 && t < 1200.0, "t = {t}");
        }
    }

    #[test]
    fn test_smallest_screen_keeps_hits_finite() {
        use crate::sim::{DirectionTable, calculate_intersection};

        let mut settings = Settings::default();
        settings.width = 2;
        settings.height = 2;
        settings.obstacles.clear();
        assert!(settings.validate().is_ok());

        let mut scene = Scene::from_settings(&settings);
        let directions = DirectionTable::new(360);
        for pointer in [DVec2::ZERO, DVec2::new(2.0, 2.0), DVec2::new(-5.0, 9.0)] {
            scene.set_light(pointer);
            for ray in directions.rays_from(scene.light) {
                let t = calculate_intersection(&ray, &scene.obstacles, scene.bounds);
                assert!(t.is_finite() && t > 0.0, "t = {t}");
                assert!(t <= scene.bounds.farthest_corner_distance(scene.light) + 1e-9);
            }
        }
    }

    #[test]
    fn test_from_default_settings() {
        let scene = Scene::from_settings(&Settings::default());
        assert_eq!(scene.light, DVec2::new(200.0, 200.0));
        assert_eq!(scene.obstacles.len(), 3);
        assert_eq!(scene.obstacles[0].velocity, DVec2::new(0.0, 150.0));
        assert_eq!(scene.light_glyph().radius, LIGHT_GLYPH_RADIUS);
    }
}
