//! Evolution configuration.
//!
//! All knobs of the genetic algorithm live in [`EvolutionConfig`], an explicit
//! struct with documented defaults. Construction sites validate it once via
//! [`EvolutionConfig::validate`] and fail fast on nonsense values.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Ordered neuron counts per layer: input, hidden(s), output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Input layer width.
    pub input: usize,
    /// Hidden layer widths, in order.
    pub hiddens: Vec<usize>,
    /// Output layer width.
    pub output: usize,
}

impl Topology {
    /// Creates a topology from explicit layer widths.
    pub fn new(input: usize, hiddens: Vec<usize>, output: usize) -> Self {
        Self {
            input,
            hiddens,
            output,
        }
    }

    /// Layer widths in network order.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hiddens.len() + 2);
        sizes.push(self.input);
        sizes.extend_from_slice(&self.hiddens);
        sizes.push(self.output);
        sizes
    }
}

/// Direction populations are kept sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreSort {
    /// Highest score first (the usual fitness ordering).
    #[default]
    Descending,
    /// Lowest score first.
    Ascending,
}

/// Parameters of the genetic algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Genomes per generation. Must be greater than zero.
    pub population: usize,
    /// Network shape shared by every genome.
    pub topology: Topology,
    /// Fraction of top genomes copied unchanged into the next generation.
    pub elitism: f32,
    /// Fraction of the next generation replaced with fresh random weights.
    pub random_behaviour: f32,
    /// Per-weight probability of mutation during breeding.
    pub mutation_rate: f32,
    /// Mutation delta is uniform in `[-mutation_range, +mutation_range]`.
    pub mutation_range: f32,
    /// Generations kept in history beyond the open one (-1 = unbounded).
    pub historic: i32,
    /// Strip network params (keep scores) from superseded generations.
    pub low_historic: bool,
    /// Sort direction for fitness scores.
    pub score_sort: ScoreSort,
    /// Children produced per breeding pairing. Must be at least 1.
    pub nb_child: usize,
    /// Steepness of the logistic activation.
    pub activation_slope: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population: 50,
            topology: Topology::new(1, vec![1], 1),
            elitism: 0.2,
            random_behaviour: 0.2,
            mutation_rate: 0.1,
            mutation_range: 0.5,
            historic: 0,
            low_historic: false,
            score_sort: ScoreSort::Descending,
            nb_child: 1,
            activation_slope: 1.0,
        }
    }
}

impl EvolutionConfig {
    /// Checks every constraint, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        for (i, &width) in self.topology.layer_sizes().iter().enumerate() {
            if width == 0 {
                return Err(ConfigError::ZeroWidthLayer(i));
            }
        }
        for (name, value) in [
            ("elitism", self.elitism),
            ("random_behaviour", self.random_behaviour),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.mutation_range < 0.0 {
            return Err(ConfigError::NegativeMutationRange(self.mutation_range));
        }
        if self.historic < -1 {
            return Err(ConfigError::InvalidHistoric(self.historic));
        }
        if self.nb_child == 0 {
            return Err(ConfigError::ZeroChildCount);
        }
        if self.activation_slope <= 0.0 {
            return Err(ConfigError::NonPositiveSlope(self.activation_slope));
        }
        Ok(())
    }
}
