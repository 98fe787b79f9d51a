//! Genomes and the breeding algorithm for one generation.
//!
//! A [`Population`] is the score-sorted set of genomes produced by one
//! simulation run. Sorting is maintained by positional insertion, and the
//! next generation is produced by elitism, random injection, and a
//! rank-biased breeding schedule.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::{EvolutionConfig, ScoreSort};
use super::network::NetworkSave;

/// A scored, serialized network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genome {
    /// Fitness score (ticks survived by the agent).
    pub score: f32,
    /// Serialized network params. `None` only after a low-historic strip of
    /// a superseded generation.
    pub save: Option<NetworkSave>,
}

impl Genome {
    /// Wraps a score and serialized params into a genome.
    pub fn new(score: f32, save: NetworkSave) -> Self {
        Self {
            score,
            save: Some(save),
        }
    }

    /// Drops the network params, keeping only the score.
    pub fn strip_params(&mut self) {
        self.save = None;
    }
}

/// The fitness-sorted genomes of one generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    /// Genomes, kept sorted by score at all times via [`Population::insert`].
    pub genomes: Vec<Genome>,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self {
            genomes: Vec::new(),
        }
    }

    /// Number of genomes inserted so far.
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Whether no genome has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Inserts a genome at its sorted position.
    ///
    /// The genome goes before the first existing entry it strictly beats
    /// under the sort direction, so equal scores land after pre-existing
    /// equals. The rest of the sequence is never re-sorted.
    pub fn insert(&mut self, genome: Genome, sort: ScoreSort) {
        let position = self.genomes.iter().position(|existing| match sort {
            ScoreSort::Descending => genome.score > existing.score,
            ScoreSort::Ascending => genome.score < existing.score,
        });
        match position {
            Some(i) => self.genomes.insert(i, genome),
            None => self.genomes.push(genome),
        }
    }

    /// Breeds two genomes, returning exactly `count` children.
    ///
    /// Each child starts as a deep copy of `a`'s params; every weight is
    /// replaced by `b`'s weight at that position with probability 0.5
    /// (uniform crossover), then independently mutated with probability
    /// `mutation_rate` by a uniform delta in the mutation range.
    pub fn breed(
        a: &Genome,
        b: &Genome,
        count: usize,
        config: &EvolutionConfig,
    ) -> Vec<NetworkSave> {
        let a_save = expect_params(a);
        let b_save = expect_params(b);
        let mut rng = rand::rng();

        let mut children = Vec::with_capacity(count);
        for _ in 0..count {
            let mut child = a_save.clone();
            for (weight, &other) in child.weights.iter_mut().zip(&b_save.weights) {
                if rng.random::<f32>() <= 0.5 {
                    *weight = other;
                }
            }
            for weight in &mut child.weights {
                if rng.random::<f32>() <= config.mutation_rate {
                    *weight += rng.random::<f32>() * config.mutation_range * 2.0
                        - config.mutation_range;
                }
            }
            children.push(child);
        }
        children
    }

    /// Produces the next generation's params from a complete, sorted
    /// population. Always returns exactly `config.population` saves.
    ///
    /// The breeding cursor pairs high ranks first: an outer cursor `max`
    /// starts at 0, the inner loop breeds each `i in 0..max` with `max`, and
    /// `max` wraps once it reaches the second-to-last rank. The exact
    /// `(i, max)` pairing sequence is load-bearing for reproducibility and
    /// must not be reordered.
    pub fn generate_next(&self, config: &EvolutionConfig) -> Vec<NetworkSave> {
        let mut nexts: Vec<NetworkSave> = Vec::with_capacity(config.population);

        let elite_count = (config.elitism * config.population as f32).round() as usize;
        for genome in self.genomes.iter().take(elite_count) {
            if nexts.len() < config.population {
                nexts.push(expect_params(genome).clone());
            }
        }

        let random_count = (config.random_behaviour * config.population as f32).round() as usize;
        let mut rng = rand::rng();
        for _ in 0..random_count {
            if nexts.len() >= config.population {
                break;
            }
            let mut save = expect_params(&self.genomes[0]).clone();
            for weight in &mut save.weights {
                *weight = rng.random::<f32>() * 2.0 - 1.0;
            }
            nexts.push(save);
        }

        if nexts.len() >= config.population {
            return nexts;
        }

        let nb_child = config.nb_child.max(1);

        // A lone genome has no pairings; breed it with itself.
        if self.genomes.len() == 1 {
            while nexts.len() < config.population {
                let children = Self::breed(&self.genomes[0], &self.genomes[0], nb_child, config);
                for child in children {
                    nexts.push(child);
                    if nexts.len() >= config.population {
                        return nexts;
                    }
                }
            }
        }

        let mut max = 0;
        loop {
            for i in 0..max {
                let children =
                    Self::breed(&self.genomes[i], &self.genomes[max], nb_child, config);
                for child in children {
                    nexts.push(child);
                    if nexts.len() >= config.population {
                        return nexts;
                    }
                }
            }
            max += 1;
            if max >= self.genomes.len() - 1 {
                max = 0;
            }
        }
    }
}

/// Params of a genome participating in breeding. Populations being bred are
/// always the newest complete generation, which is never stripped.
fn expect_params(genome: &Genome) -> &NetworkSave {
    genome
        .save
        .as_ref()
        .expect("breeding genome has no network params")
}
