//! The stepping orchestrator.
//!
//! [`World`] couples the physics micro-world to the generation history: each
//! tick it evaluates every living agent's network, integrates physics, records
//! fitness on death, and rolls the whole run over to a freshly bred generation
//! once nobody is left alive.
//!
//! A tick is atomic with respect to the evolution state: all deaths of a tick
//! are recorded, in agent-index order, before the generation-advance check
//! runs. Network decisions are computed in a parallel phase (collected
//! positionally) and applied serially, so stepping stays deterministic for a
//! fixed random sequence.

use log::info;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::neuro::config::EvolutionConfig;
use crate::neuro::error::EvolutionError;
use crate::neuro::generations::GenerationHistory;
use crate::neuro::network::Network;

use super::agent::Agent;
use super::obstacle::Obstacle;
use super::params::SimParams;
use super::snapshot::{AgentView, ObstacleView, Snapshot};

/// The live state of one generation run plus the evolution history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Agents of the current run, one per bred network.
    pub agents: Vec<Agent>,
    /// Networks driving the agents, index-aligned with `agents`.
    pub networks: Vec<Network>,
    /// Current obstacle segments, in spawn order (pairs are adjacent).
    pub obstacles: Vec<Obstacle>,
    /// Ticks survived in the current run.
    pub score: u32,
    /// Best score across all runs.
    pub max_score: u32,
    /// Generation counter, starting at 1 for the first run.
    pub generation: u32,
    /// Number of agents still alive.
    pub alive: usize,
    /// All populations bred so far.
    pub history: GenerationHistory,
    interval: u32,
    background_x: f32,
}

impl World {
    /// Creates a world and starts the first generation run.
    pub fn new(params: &SimParams, config: EvolutionConfig) -> Result<Self, EvolutionError> {
        let history = GenerationHistory::new(config)?;
        let mut world = Self {
            agents: Vec::new(),
            networks: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            max_score: 0,
            generation: 0,
            alive: 0,
            history,
            interval: 0,
            background_x: 0.0,
        };
        world.start_generation(params)?;
        Ok(world)
    }

    /// Opens the next generation: breeds (or randomizes) networks, rebuilds
    /// the agent set, and resets the run counters and obstacles.
    fn start_generation(&mut self, params: &SimParams) -> Result<(), EvolutionError> {
        self.interval = 0;
        self.score = 0;
        self.obstacles.clear();

        let slope = self.history.config().activation_slope;
        let saves = self.history.advance()?;
        self.networks = saves
            .iter()
            .map(|save| Network::from_save(save, slope))
            .collect::<Result<Vec<_>, _>>()?;
        self.agents = self.networks.iter().map(|_| Agent::new(params)).collect();

        self.generation += 1;
        self.alive = self.agents.len();
        info!(
            "generation {} started with {} agents",
            self.generation, self.alive
        );
        Ok(())
    }

    /// Advances the simulation by one discrete tick.
    pub fn step(&mut self, params: &SimParams) -> Result<(), EvolutionError> {
        self.background_x += params.background_speed;

        let gap_signal = self.next_gap_signal(params);
        let world_height = params.world_height;

        // Parallel decision phase: pure network evaluation, collected in
        // index order. Physics and deaths are applied serially below.
        let outputs: Vec<f32> = self
            .networks
            .par_iter_mut()
            .zip(self.agents.par_iter())
            .map(|(network, agent)| {
                if agent.alive {
                    let inputs = [agent.y / world_height, gap_signal];
                    network.compute(&inputs).first().copied().unwrap_or(0.0)
                } else {
                    0.0
                }
            })
            .collect();

        for i in 0..self.agents.len() {
            if !self.agents[i].alive {
                continue;
            }
            if outputs[i] > params.flap_threshold {
                self.agents[i].flap(params);
            }
            self.agents[i].update(params);

            if self.agents[i].is_dead(params.world_height, &self.obstacles) {
                self.agents[i].alive = false;
                self.alive -= 1;
                let save = self.networks[i].save();
                self.history.record_fitness(save, self.score as f32)?;
            }
        }

        if self.alive == 0 {
            self.start_generation(params)?;
        }

        for obstacle in &mut self.obstacles {
            obstacle.update();
        }
        self.obstacles.retain(|o| !o.is_out());

        if self.interval == 0 {
            self.spawn_pair(params);
        }
        self.interval += 1;
        if self.interval == params.spawn_interval {
            self.interval = 0;
        }

        self.score += 1;
        self.max_score = self.max_score.max(self.score);
        Ok(())
    }

    /// Normalized gap position of the first unpassed obstacle pair ahead of
    /// the lead (first living) agent; 0.0 when no pair is ahead.
    fn next_gap_signal(&self, params: &SimParams) -> f32 {
        let Some(lead) = self.agents.iter().find(|a| a.alive) else {
            return 0.0;
        };
        for pair in self.obstacles.chunks(2) {
            let top = &pair[0];
            if top.x + top.width > lead.x {
                return top.height / params.world_height;
            }
        }
        0.0
    }

    /// Spawns a top/bottom obstacle pair with a uniformly random gap position
    /// inside the margins.
    fn spawn_pair(&mut self, params: &SimParams) {
        let span = params.world_height - params.gap_margin * 2.0 - params.gap_height;
        let gap_top = (rand::rng().random::<f32>() * span).round() + params.gap_margin;

        self.obstacles
            .push(Obstacle::new(params.world_width, 0.0, gap_top, params));
        self.obstacles.push(Obstacle::new(
            params.world_width,
            gap_top + params.gap_height,
            params.world_height,
            params,
        ));
    }

    /// Discards all evolution progress and starts over from a random first
    /// generation.
    pub fn restart(&mut self, params: &SimParams) -> Result<(), EvolutionError> {
        self.history.restart();
        self.generation = 0;
        self.max_score = 0;
        self.start_generation(params)
    }

    /// Read-only view for the rendering collaborator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            agents: self
                .agents
                .iter()
                .filter(|a| a.alive)
                .map(|a| AgentView {
                    x: a.x,
                    y: a.y,
                    width: a.width,
                    height: a.height,
                    velocity: a.velocity,
                })
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    y: o.y,
                    width: o.width,
                    height: o.height,
                })
                .collect(),
            score: self.score,
            max_score: self.max_score,
            generation: self.generation,
            alive: self.alive,
            population: self.history.config().population,
            background_x: self.background_x,
        }
    }

    /// Saves the world state to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a world state from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let world = serde_json::from_str(&json)?;
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neuro::config::Topology;

    fn test_world() -> (SimParams, World) {
        let params = SimParams::default();
        let config = EvolutionConfig {
            population: 2,
            topology: Topology::new(2, vec![2], 1),
            ..EvolutionConfig::default()
        };
        let world = World::new(&params, config).expect("valid config");
        (params, world)
    }

    #[test]
    fn gap_signal_defaults_to_zero_without_obstacles() {
        let (params, world) = test_world();
        assert!(world.obstacles.is_empty());
        assert_eq!(world.next_gap_signal(&params), 0.0);
    }

    #[test]
    fn gap_signal_skips_pairs_behind_the_lead_agent() {
        let (params, mut world) = test_world();

        // Trailing edge at x 70, behind the lead agent at x 80.
        world.obstacles.push(Obstacle::new(20.0, 0.0, 130.0, &params));
        world.obstacles.push(Obstacle::new(
            20.0,
            130.0 + params.gap_height,
            params.world_height,
            &params,
        ));
        assert_eq!(world.next_gap_signal(&params), 0.0);

        // An unpassed pair further right is the one reported.
        world
            .obstacles
            .push(Obstacle::new(300.0, 0.0, 150.0, &params));
        world.obstacles.push(Obstacle::new(
            300.0,
            150.0 + params.gap_height,
            params.world_height,
            &params,
        ));
        assert_eq!(
            world.next_gap_signal(&params),
            150.0 / params.world_height
        );
    }

    #[test]
    fn gap_signal_reports_first_unpassed_pair() {
        let (params, mut world) = test_world();

        world
            .obstacles
            .push(Obstacle::new(100.0, 0.0, 200.0, &params));
        world.obstacles.push(Obstacle::new(
            100.0,
            200.0 + params.gap_height,
            params.world_height,
            &params,
        ));
        world
            .obstacles
            .push(Obstacle::new(300.0, 0.0, 80.0, &params));
        world.obstacles.push(Obstacle::new(
            300.0,
            80.0 + params.gap_height,
            params.world_height,
            &params,
        ));

        // The nearer pair wins even though both are ahead.
        assert_eq!(
            world.next_gap_signal(&params),
            200.0 / params.world_height
        );
    }
}
