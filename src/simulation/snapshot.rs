//! Read-only render view of the world.
//!
//! The rendering collaborator consumes a [`Snapshot`] per frame instead of
//! reaching into the simulation state. Everything here is plain data copied
//! out of the world.

/// Geometry and motion of one living agent.
#[derive(Debug, Clone, Copy)]
pub struct AgentView {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Bounding-box width.
    pub width: f32,
    /// Bounding-box height.
    pub height: f32,
    /// Vertical velocity, usable as a rotation proxy when drawing.
    pub velocity: f32,
}

/// Geometry of one obstacle segment.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleView {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Segment width.
    pub width: f32,
    /// Segment height.
    pub height: f32,
}

/// Per-tick view for the rendering collaborator.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Living agents only.
    pub agents: Vec<AgentView>,
    /// All current obstacle segments.
    pub obstacles: Vec<ObstacleView>,
    /// Current score (ticks survived this run).
    pub score: u32,
    /// Best score seen across all runs.
    pub max_score: u32,
    /// Generation index, starting at 1.
    pub generation: u32,
    /// Agents still alive this run.
    pub alive: usize,
    /// Configured population size.
    pub population: usize,
    /// Cosmetic background scroll offset.
    pub background_x: f32,
}
