//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Parameters of the physics micro-world.
///
/// All motion constants are per tick; the simulation has no real-time clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimParams {
    /// World width.
    pub world_width: f32,
    /// World height.
    pub world_height: f32,
    /// Horizontal agent position (agents never move horizontally).
    pub agent_x: f32,
    /// Vertical spawn position.
    pub agent_start_y: f32,
    /// Agent bounding-box width.
    pub agent_width: f32,
    /// Agent bounding-box height.
    pub agent_height: f32,
    /// Downward acceleration added to the velocity accumulator each tick.
    pub gravity: f32,
    /// Velocity the accumulator is set to on a flap (negative = upward).
    pub jump: f32,
    /// Network output above this value triggers a flap.
    pub flap_threshold: f32,
    /// Obstacle segment width.
    pub obstacle_width: f32,
    /// Horizontal scroll speed of obstacles, per tick.
    pub obstacle_speed: f32,
    /// Ticks between obstacle-pair spawns.
    pub spawn_interval: u32,
    /// Vertical size of the passable gap between a pair's segments.
    pub gap_height: f32,
    /// Minimum distance of the gap from the top and bottom edges.
    pub gap_margin: f32,
    /// Cosmetic background scroll speed, per tick.
    pub background_speed: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            world_width: 500.0,
            world_height: 512.0,
            agent_x: 80.0,
            agent_start_y: 250.0,
            agent_width: 50.0,
            agent_height: 50.0,
            gravity: 0.3,
            jump: -6.0,
            flap_threshold: 0.5,
            obstacle_width: 50.0,
            obstacle_speed: 3.0,
            spawn_interval: 90,
            gap_height: 120.0,
            gap_margin: 50.0,
            background_speed: 0.5,
        }
    }
}
