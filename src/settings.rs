//! Scene settings
//!
//! Defaults reproduce the classic demo scene. A JSON file named by the
//! `LIGHT_RAYS_SETTINGS` environment variable overrides any subset of fields.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;
use crate::error::SettingsError;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "LIGHT_RAYS_SETTINGS";

/// Fastest allowed obstacle, in screen diagonals per second
const MAX_SPEED_DIAGONALS: f64 = 10.0;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fixed palette colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub background: Rgb,
    pub ray: Rgb,
    pub obstacle: Rgb,
    pub light: Rgb,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            ray: Rgb(255, 212, 59),
            obstacle: Rgb(50, 50, 255),
            light: Rgb(255, 255, 255),
        }
    }
}

/// Light source placement and glyph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    /// Position before the pointer first moves
    pub start: DVec2,
    pub glyph_radius: f64,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            start: DVec2::new(200.0, 200.0),
            glyph_radius: LIGHT_GLYPH_RADIUS,
        }
    }
}

/// One obstacle at scene start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSettings {
    pub center: DVec2,
    pub radius: f64,
    #[serde(default)]
    pub velocity: DVec2,
}

/// Visualizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Screen rectangle in physical pixels
    pub width: u32,
    pub height: u32,
    /// Rays emitted per frame
    pub num_rays: usize,
    pub light: LightSettings,
    pub obstacles: Vec<ObstacleSettings>,
    pub palette: PaletteSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Raytracer".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            num_rays: NUM_RAYS,
            light: LightSettings::default(),
            obstacles: vec![
                // The moving one
                ObstacleSettings {
                    center: DVec2::new(550.0, 300.0),
                    radius: 80.0,
                    velocity: DVec2::new(0.0, 150.0),
                },
                ObstacleSettings {
                    center: DVec2::new(200.0, 100.0),
                    radius: 30.0,
                    velocity: DVec2::ZERO,
                },
                ObstacleSettings {
                    center: DVec2::new(900.0, 450.0),
                    radius: 60.0,
                    velocity: DVec2::ZERO,
                },
            ],
            palette: PaletteSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `$LIGHT_RAYS_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => match Self::from_file(Path::new(&path)) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Path::new(&path).display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings file {}: {e}", Path::new(&path).display());
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Read and validate a JSON settings file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate JSON settings
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the scene cannot be built from
    ///
    /// Sizes, positions and speeds are bounded by the screen diagonal so the
    /// rasterisers and the physics stay in a sane numeric range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        // The light is kept one pixel inside each wall, which needs room
        if self.width < 2 || self.height < 2 {
            return Err(SettingsError::Invalid(format!(
                "screen must be at least 2x2, got {}x{}",
                self.width, self.height
            )));
        }
        let (w, h) = (self.width as f64, self.height as f64);
        let diagonal = w.hypot(h);
        if self.num_rays == 0 {
            return Err(SettingsError::Invalid("num_rays must be at least 1".into()));
        }
        if !self.light.start.is_finite() {
            return Err(SettingsError::Invalid("light start must be finite".into()));
        }
        if !(self.light.glyph_radius > 0.0 && self.light.glyph_radius <= diagonal) {
            return Err(SettingsError::Invalid(format!(
                "light glyph radius must be in (0, {diagonal}], got {}",
                self.light.glyph_radius
            )));
        }
        for (i, o) in self.obstacles.iter().enumerate() {
            if !(o.radius > 0.0 && o.radius <= diagonal) {
                return Err(SettingsError::Invalid(format!(
                    "obstacle {i}: radius must be in (0, {diagonal}], got {}",
                    o.radius
                )));
            }
            let near_screen = (-diagonal..=w + diagonal).contains(&o.center.x)
                && (-diagonal..=h + diagonal).contains(&o.center.y);
            if !near_screen {
                return Err(SettingsError::Invalid(format!(
                    "obstacle {i}: center {} is more than a screen diagonal off-screen",
                    o.center
                )));
            }
            let max_speed = diagonal * MAX_SPEED_DIAGONALS;
            if !(o.velocity.length() <= max_speed) {
                return Err(SettingsError::Invalid(format!(
                    "obstacle {i}: speed must be at most {max_speed} px/s, got {}",
                    o.velocity.length()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.width, 1200);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.num_rays, 720);
        assert_eq!(settings.obstacles.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "num_rays": 90, "palette": { "ray": [255, 0, 0] } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.num_rays, 90);
        assert_eq!(settings.palette.ray, Rgb(255, 0, 0));
        assert_eq!(settings.palette.obstacle, Rgb(50, 50, 255));
        assert_eq!(settings.width, 1200);
        assert_eq!(settings.obstacles.len(), 3);
    }

    #[test]
    fn test_obstacle_velocity_defaults_to_zero() {
        let json = r#"{ "obstacles": [ { "center": [400.0, 200.0], "radius": 50.0 } ] }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.obstacles.len(), 1);
        assert_eq!(settings.obstacles[0].velocity, DVec2::ZERO);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "num_rays": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "width": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "obstacles": [ { "center": [1.0, 1.0], "radius": -3.0 } ] }"#),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_degenerate_screen() {
        for json in [r#"{ "width": 1 }"#, r#"{ "height": 1 }"#] {
            assert!(matches!(
                Settings::from_json(json),
                Err(SettingsError::Invalid(_))
            ));
        }
        assert!(Settings::from_json(r#"{ "width": 2, "height": 2, "obstacles": [] }"#).is_ok());
    }

    #[test]
    fn test_rejects_out_of_scale_obstacles() {
        let huge_radius = r#"{ "obstacles": [ { "center": [400, 200], "radius": 4e9 } ] }"#;
        let far_center = r#"{ "obstacles": [ { "center": [1e12, 200], "radius": 10 } ] }"#;
        let fast =
            r#"{ "obstacles": [ { "center": [400, 200], "radius": 10, "velocity": [0, 1e9] } ] }"#;
        let huge_glyph = r#"{ "light": { "start": [200, 200], "glyph_radius": 1e7 } }"#;
        for json in [huge_radius, far_center, fast, huge_glyph] {
            assert!(
                matches!(Settings::from_json(json), Err(SettingsError::Invalid(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("light-rays-does-not-exist.json");
        assert!(matches!(Settings::from_file(&path), Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_roundtrip_file() {
        let name = format!("light-rays-settings-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let mut settings = Settings::default();
        settings.title = "Custom".into();
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
        let loaded = Settings::from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), settings);
    }
}
