//! Per-tick scene update
//!
//! Applies one tick's input to the scene, then advances physics.

use glam::DVec2;

use super::state::Scene;

/// Input gathered for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer position this tick (screen pixels), if it moved
    pub pointer: Option<DVec2>,
    /// Quit requested; the tick still completes
    pub quit: bool,
}

/// Advance the scene by one tick of `dt` seconds
pub fn tick(scene: &mut Scene, input: &TickInput, dt: f64) {
    // Light follows the pointer directly, no smoothing
    if let Some(pointer) = input.pointer {
        scene.set_light(pointer);
    }

    scene.step(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_tick_moves_light_to_pointer() {
        let mut scene = Scene::from_settings(&Settings::default());
        let input = TickInput {
            pointer: Some(DVec2::new(640.0, 360.0)),
            ..Default::default()
        };
        tick(&mut scene, &input, 0.016);
        assert_eq!(scene.light, DVec2::new(640.0, 360.0));
    }

    #[test]
    fn test_tick_without_pointer_keeps_light() {
        let mut scene = Scene::from_settings(&Settings::default());
        let before = scene.light;
        tick(&mut scene, &TickInput::default(), 0.016);
        assert_eq!(scene.light, before);
    }

    #[test]
    fn test_tick_runs_physics() {
        let mut scene = Scene::from_settings(&Settings::default());
        let y0 = scene.obstacles[0].center.y;
        tick(&mut scene, &TickInput::default(), 0.5);
        assert!((scene.obstacles[0].center.y - (y0 + 75.0)).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let mut a = Scene::from_settings(&Settings::default());
        let mut b = Scene::from_settings(&Settings::default());
        let inputs = [
            TickInput {
                pointer: Some(DVec2::new(10.0, 20.0)),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                pointer: Some(DVec2::new(900.0, 50.0)),
                quit: true,
            },
        ];
        for input in &inputs {
            tick(&mut a, input, 0.25);
            tick(&mut b, input, 0.25);
        }
        assert_eq!(a, b);
    }
}
