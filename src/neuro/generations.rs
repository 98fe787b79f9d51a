//! Generation lifecycle: first generation, breeding, and retention.
//!
//! [`GenerationHistory`] owns every population produced so far, oldest first,
//! and is the only entry point for opening generations and recording fitness.
//! It is an explicit context value handed to the simulation loop; there is no
//! process-wide trainer state.

use log::info;
use serde::{Deserialize, Serialize};

use super::config::EvolutionConfig;
use super::error::{ConfigError, EvolutionError};
use super::network::{Network, NetworkSave};
use super::population::{Genome, Population};

/// Ordered sequence of populations plus the evolution configuration.
///
/// Invariant: the sequence never grows beyond `historic + 1` populations
/// (unbounded when `historic == -1`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationHistory {
    generations: Vec<Population>,
    config: EvolutionConfig,
}

impl GenerationHistory {
    /// Creates an empty history with a validated configuration.
    pub fn new(config: EvolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            generations: Vec::new(),
            config,
        })
    }

    /// The evolution configuration this history was built with.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// All retained populations, oldest first.
    pub fn generations(&self) -> &[Population] {
        &self.generations
    }

    /// Drops every population, returning to the pre-first-generation state.
    pub fn restart(&mut self) {
        self.generations.clear();
    }

    /// Produces the params of the next generation and opens an empty
    /// population to receive its fitness scores.
    ///
    /// The first call yields `population` independently randomized networks;
    /// later calls breed the last population, failing with
    /// [`EvolutionError::NotReady`] when it holds no scored genomes yet.
    /// Afterwards the retention policy runs: `low_historic` strips params (scores stay) from
    /// the generation just bred from, and `historic` bounds how many
    /// populations are kept.
    pub fn advance(&mut self) -> Result<Vec<NetworkSave>, EvolutionError> {
        let saves = match self.generations.last() {
            None => (0..self.config.population)
                .map(|_| {
                    Network::perceptron(&self.config.topology, self.config.activation_slope).save()
                })
                .collect(),
            // An open population with no recorded scores has nothing to
            // breed from.
            Some(last) if last.is_empty() => return Err(EvolutionError::NotReady),
            Some(last) => {
                if let Some(best) = last.genomes.first() {
                    info!(
                        "breeding generation {} ({} genomes, top score {})",
                        self.generations.len(),
                        last.len(),
                        best.score
                    );
                }
                last.generate_next(&self.config)
            }
        };

        self.generations.push(Population::new());

        if self.config.low_historic && self.generations.len() >= 2 {
            let stripped = self.generations.len() - 2;
            for genome in &mut self.generations[stripped].genomes {
                genome.strip_params();
            }
        }

        if self.config.historic != -1 {
            let keep = self.config.historic as usize + 1;
            if self.generations.len() > keep {
                let excess = self.generations.len() - keep;
                self.generations.drain(0..excess);
            }
        }

        Ok(saves)
    }

    /// Records a death: wraps the params and score into a genome and inserts
    /// it into the currently open population.
    ///
    /// Fails with [`EvolutionError::NotReady`] when no population has been
    /// opened yet.
    pub fn record_fitness(
        &mut self,
        save: NetworkSave,
        score: f32,
    ) -> Result<(), EvolutionError> {
        let sort = self.config.score_sort;
        let open = self
            .generations
            .last_mut()
            .ok_or(EvolutionError::NotReady)?;
        open.insert(Genome::new(score, save), sort);
        Ok(())
    }
}
