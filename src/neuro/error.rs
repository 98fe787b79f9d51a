//! Error types for the neuroevolution engine.
//!
//! Configuration problems are rejected eagerly at construction time and are
//! distinct from lifecycle errors: a [`EvolutionError::NotReady`] indicates an
//! ordering bug upstream, not corrupt data, and is recoverable by the caller.

use thiserror::Error;

/// Invalid evolution configuration, detected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The population size must be at least one.
    #[error("population must be greater than zero")]
    EmptyPopulation,
    /// Every layer of the topology needs at least one neuron.
    #[error("topology layer {0} has zero width")]
    ZeroWidthLayer(usize),
    /// A probability-like setting fell outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    RateOutOfRange {
        /// Name of the offending setting.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The mutation range cannot be negative.
    #[error("mutation_range must be >= 0, got {0}")]
    NegativeMutationRange(f32),
    /// The retention bound is a count, or -1 for unbounded.
    #[error("historic must be -1 (unbounded) or >= 0, got {0}")]
    InvalidHistoric(i32),
    /// Breeding must produce at least one child per pairing.
    #[error("nb_child must be at least 1")]
    ZeroChildCount,
    /// The activation slope must be strictly positive.
    #[error("activation_slope must be > 0, got {0}")]
    NonPositiveSlope(f32),
}

/// Runtime failure of the evolution lifecycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvolutionError {
    /// A lifecycle call arrived out of order: a genome was scored before any
    /// generation was opened, or a breed was requested from a generation
    /// with no scored genomes. Recoverable by the caller.
    #[error("no scored generation is ready for this operation")]
    NotReady,
    /// A serialized network declared layer sizes that do not match its flat
    /// weight sequence. Never silently truncated or padded.
    #[error("network save mismatch: layer sizes require {expected} weights, save holds {found}")]
    SaveMismatch {
        /// Weight count implied by the per-layer neuron counts.
        expected: usize,
        /// Weight count actually present in the save.
        found: usize,
    },
    /// Invalid configuration surfaced through a lifecycle entry point.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
