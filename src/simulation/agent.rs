//! Agent physics and collision.
//!
//! An agent is a falling bounding box driven each tick by one network's flap
//! decision. It dies when it leaves the vertical world bounds or overlaps any
//! obstacle segment.

use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::params::SimParams;

/// A physical entity controlled by one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Horizontal position (constant over an agent's life).
    pub x: f32,
    /// Vertical position of the top edge.
    pub y: f32,
    /// Bounding-box width.
    pub width: f32,
    /// Bounding-box height.
    pub height: f32,
    /// Vertical velocity accumulator; gravity adds to it every tick.
    pub velocity: f32,
    /// Liveness flag; cleared exactly once, on death.
    pub alive: bool,
}

impl Agent {
    /// Spawns an agent at the configured start position.
    pub fn new(params: &SimParams) -> Self {
        Self {
            x: params.agent_x,
            y: params.agent_start_y,
            width: params.agent_width,
            height: params.agent_height,
            velocity: 0.0,
            alive: true,
        }
    }

    /// Applies the upward flap impulse.
    pub fn flap(&mut self, params: &SimParams) {
        self.velocity = params.jump;
    }

    /// Integrates one tick of physics: gravity into the velocity accumulator,
    /// accumulator into position.
    pub fn update(&mut self, params: &SimParams) {
        self.velocity += params.gravity;
        self.y += self.velocity;
    }

    /// Checks death against the vertical world bounds and every obstacle
    /// segment (axis-aligned overlap).
    pub fn is_dead(&self, world_height: f32, obstacles: &[Obstacle]) -> bool {
        if self.y >= world_height || self.y + self.height <= 0.0 {
            return true;
        }
        obstacles.iter().any(|o| {
            !(self.x > o.x + o.width
                || self.x + self.width < o.x
                || self.y > o.y + o.height
                || self.y + self.height < o.y)
        })
    }
}
