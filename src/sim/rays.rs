//! Precomputed ray directions
//!
//! Trigonometry runs once at start-up; each frame only supplies a new
//! origin and borrows the table to produce ray instances.

use glam::DVec2;
use std::f64::consts::TAU;

use super::geometry::Ray;
use crate::unit_from_angle;

/// Immutable table of `n` unit directions at equally spaced angles over `[0, 2π)`
#[derive(Debug, Clone)]
pub struct DirectionTable {
    directions: Box<[DVec2]>,
}

impl DirectionTable {
    pub fn new(count: usize) -> Self {
        let directions = (0..count)
            .map(|i| unit_from_angle(i as f64 / count as f64 * TAU))
            .collect();
        Self { directions }
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn directions(&self) -> &[DVec2] {
        &self.directions
    }

    /// One ray per direction, all starting at `origin`
    pub fn rays_from(&self, origin: DVec2) -> impl Iterator<Item = Ray> + '_ {
        self.directions
            .iter()
            .map(move |&direction| Ray::new(origin, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_unit_length() {
        let table = DirectionTable::new(720);
        assert_eq!(table.len(), 720);
        for d in table.directions() {
            assert!((d.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_first_direction_points_right() {
        let table = DirectionTable::new(4);
        let d = table.directions();
        assert_eq!(d[0], DVec2::new(1.0, 0.0));
        // Quarter turn is +y (down on screen)
        assert!(d[1].x.abs() < 1e-12 && (d[1].y - 1.0).abs() < 1e-12);
        assert!((d[2].x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rays_share_origin() {
        let table = DirectionTable::new(8);
        let origin = DVec2::new(10.0, 20.0);
        let rays: Vec<_> = table.rays_from(origin).collect();
        assert_eq!(rays.len(), 8);
        assert!(rays.iter().all(|r| r.origin == origin));
        assert_eq!(rays[3].direction, table.directions()[3]);
    }
}
