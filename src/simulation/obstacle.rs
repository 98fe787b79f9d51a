//! Scrolling barrier segments.
//!
//! Obstacles are spawned in vertically-offset pairs that leave a passable gap
//! between them; both segments scroll left at constant speed and are removed
//! once fully past the left edge.

use serde::{Deserialize, Serialize};

use super::params::SimParams;

/// One barrier segment of an obstacle pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Segment width.
    pub width: f32,
    /// Segment height.
    pub height: f32,
    /// Horizontal scroll speed, per tick.
    pub speed: f32,
}

impl Obstacle {
    /// Creates a segment at the given position and height.
    pub fn new(x: f32, y: f32, height: f32, params: &SimParams) -> Self {
        Self {
            x,
            y,
            width: params.obstacle_width,
            height,
            speed: params.obstacle_speed,
        }
    }

    /// Moves the segment left by its scroll speed.
    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    /// Whether the segment has scrolled fully off the left edge.
    pub fn is_out(&self) -> bool {
        self.x + self.width < 0.0
    }
}
