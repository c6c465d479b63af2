//! Data-driven game balance
//!
//! Every gameplay constant lives here so the sim stays free of magic
//! numbers. Constructed once at startup and owned by the game state.

use glam::Vec2;

/// Balance values for one session
#[derive(Debug, Clone)]
pub struct Tuning {
    /// Added to vertical speed every frame (px/s)
    pub gravity: f32,
    /// Multiplier (<1) applied to the reflected speed component on wall
    /// contact, so bounces lose energy
    pub wall_restitution: f32,
    /// Horizontal damping applied on bottom-edge contact
    pub floor_friction: f32,
    /// Size multiplier applied to a square on every click
    pub shrink_factor: f32,
    /// Click-launch speeds are drawn uniformly from ± these (px/s)
    pub max_launch_speed: Vec2,
    /// How close (px) two facing edges must be to pick the contact side
    pub contact_tolerance: f32,
    /// Number of squares spawned at startup
    pub square_count: usize,
    /// Square-vs-square collision pass
    pub pair_collisions: bool,
    /// Scale applied to the wall-clock frame delta before it reaches the sim
    pub time_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            wall_restitution: 0.95,
            floor_friction: 0.99,
            shrink_factor: 0.95,
            max_launch_speed: Vec2::new(10_000.0, 100.0),
            contact_tolerance: 5.0,
            square_count: 4,
            pair_collisions: true,
            time_scale: 0.9,
        }
    }
}
