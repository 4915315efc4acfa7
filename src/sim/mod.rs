//! Window-free simulation core
//!
//! Everything in here is pure and deterministic:
//! - No rendering, window or clock dependencies
//! - No fallible operations (inputs are well-formed by construction)
//! - Stable iteration order (obstacles in scene order, rays by index)

pub mod geometry;
pub mod intersect;
pub mod rays;
pub mod state;
pub mod tick;

pub use geometry::{Bounds, Circle, Ray};
pub use intersect::{boundary_distance, calculate_intersection, circle_distance};
pub use rays::DirectionTable;
pub use state::Scene;
pub use tick::{TickInput, tick};
