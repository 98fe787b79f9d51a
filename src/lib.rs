//! # Neuvol - Neuroevolution of Flapping Agents
//!
//! Trains a population of small feed-forward networks through evolutionary
//! search inside a deterministic side-scrolling micro-world. Each network
//! decides, once per tick, whether its agent flaps; agents that survive longer
//! score higher, and once a whole generation has died the fittest genomes are
//! bred into the next one and the world restarts.
//!
//! ## Features
//!
//! - Feed-forward networks with logistic activation
//! - Generational genetic algorithm (elitism, random injection, uniform
//!   crossover, bounded mutation)
//! - Score-sorted populations with a bounded generation history
//! - Deterministic tick-based simulation (gravity, flap impulse, scrolling
//!   obstacle pairs, AABB collision)
//! - Real-time visualization with egui/macroquad
//! - Save/load of the full trainer state
//!
//! ## Core Modules
//!
//! - [`neuro::network`] - Network representation, compute, serialization
//! - [`neuro::population`] - Genomes and the breeding algorithm
//! - [`neuro::generations`] - Generation lifecycle and retention policy
//! - [`simulation::world`] - The stepping orchestrator producing fitness

/// Neuroevolution engine: networks, genomes, populations, generations.
pub mod neuro {
    /// Evolution configuration with validated, documented defaults.
    pub mod config;
    /// Error types for configuration and lifecycle failures.
    pub mod error;
    /// Generation history: first/next generation and pruning policy.
    pub mod generations;
    /// Feed-forward network and its flat serialized form.
    pub mod network;
    /// Score-sorted genome populations and breeding.
    pub mod population;
}

/// Deterministic simulation harness that scores the networks.
pub mod simulation {
    /// A physical agent driven by one network.
    pub mod agent;
    /// Scrolling barrier segments spawned in gap-defining pairs.
    pub mod obstacle;
    /// Simulation parameters.
    pub mod params;
    /// Pluggable step pacing for interactive playback.
    pub mod scheduler;
    /// Read-only per-tick view for the rendering collaborator.
    pub mod snapshot;
    /// The stepping orchestrator tying agents to the generation history.
    pub mod world;
}
