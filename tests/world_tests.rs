#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use neuvol::neuro::config::{EvolutionConfig, Topology};
use neuvol::simulation::agent::Agent;
use neuvol::simulation::obstacle::Obstacle;
use neuvol::simulation::params::SimParams;
use neuvol::simulation::world::World;

fn test_params() -> SimParams {
    SimParams::default()
}

fn test_config() -> EvolutionConfig {
    EvolutionConfig {
        population: 4,
        topology: Topology::new(2, vec![2], 1),
        historic: -1,
        ..EvolutionConfig::default()
    }
}

#[test]
fn test_world_creation() {
    let params = test_params();
    let world = World::new(&params, test_config()).expect("valid config");

    assert_eq!(world.agents.len(), 4);
    assert_eq!(world.networks.len(), 4);
    assert_eq!(world.alive, 4);
    assert_eq!(world.generation, 1);
    assert_eq!(world.score, 0);
    assert!(world.obstacles.is_empty());

    for agent in &world.agents {
        assert!(agent.alive);
        assert_eq!(agent.x, params.agent_x);
        assert_eq!(agent.y, params.agent_start_y);
    }
}

#[test]
fn test_first_step_spawns_obstacle_pair() {
    let params = test_params();
    let mut world = World::new(&params, test_config()).expect("valid config");

    world.step(&params).expect("step");

    assert_eq!(world.score, 1);
    assert_eq!(world.obstacles.len(), 2);

    let top = &world.obstacles[0];
    let bottom = &world.obstacles[1];
    assert_eq!(top.x, params.world_width);
    assert_eq!(top.y, 0.0);
    assert_eq!(bottom.x, params.world_width);
    assert_eq!(bottom.y, top.height + params.gap_height);

    // Gap stays inside the margins.
    assert!(top.height >= params.gap_margin);
    assert!(top.height <= params.world_height - params.gap_margin - params.gap_height);
}

#[test]
fn test_spawn_cadence() {
    let params = test_params();
    let mut world = World::new(&params, test_config()).expect("valid config");

    // Hold the agents in place so no generation rollover clears the obstacles.
    for _ in 0..=params.spawn_interval {
        world.step(&params).expect("step");
        for agent in &mut world.agents {
            agent.y = params.agent_start_y;
            agent.velocity = 0.0;
        }
    }
    // One pair on the first tick, a second once the interval wraps.
    assert_eq!(world.obstacles.len(), 4);
}

#[test]
fn test_obstacles_scroll_and_disappear() {
    let params = test_params();
    let mut world = World::new(&params, test_config()).expect("valid config");

    world.step(&params).expect("step");
    let x_after_spawn = world.obstacles[0].x;

    world.step(&params).expect("step");
    assert_eq!(world.obstacles[0].x, x_after_spawn - params.obstacle_speed);

    // Push the pair off the left edge; the next step must remove it.
    for obstacle in &mut world.obstacles {
        obstacle.x = -obstacle.width - 1.0;
    }
    world.step(&params).expect("step");
    assert!(world.obstacles.iter().all(|o| o.x > 0.0));
}

#[test]
fn test_collision_with_bottom_obstacle() {
    let params = test_params();

    // Gap spans 100..220; an agent at y 250 sits inside the bottom segment.
    let pair = vec![
        Obstacle::new(80.0, 0.0, 100.0, &params),
        Obstacle::new(80.0, 220.0, 400.0, &params),
    ];

    let agent = Agent::new(&params); // x 80, y 250, 50x50
    assert!(agent.is_dead(params.world_height, &pair));

    // Inside the gap the same agent survives.
    let mut gliding = Agent::new(&params);
    gliding.y = 150.0;
    assert!(!gliding.is_dead(params.world_height, &pair));
}

#[test]
fn test_out_of_bounds_deaths() {
    let params = test_params();

    let mut below = Agent::new(&params);
    below.y = params.world_height;
    assert!(below.is_dead(params.world_height, &[]));

    let mut above = Agent::new(&params);
    above.y = -below.height;
    assert!(above.is_dead(params.world_height, &[]));

    let mid = Agent::new(&params);
    assert!(!mid.is_dead(params.world_height, &[]));
}

#[test]
fn test_deaths_record_fitness_once() {
    let params = test_params();
    let mut world = World::new(&params, test_config()).expect("valid config");

    // Force three agents out of bounds.
    for agent in world.agents.iter_mut().take(3) {
        agent.y = params.world_height + 100.0;
    }
    world.step(&params).expect("step");

    assert_eq!(world.alive, 1);
    let open = world.history.generations().last().expect("open generation");
    assert_eq!(open.len(), 3);

    // Dead agents must not be scored again on later ticks.
    world.step(&params).expect("step");
    let open = world.history.generations().last().expect("open generation");
    assert_eq!(open.len(), 3);
}

#[test]
fn test_generation_advances_when_all_dead() {
    let params = test_params();
    let mut world = World::new(&params, test_config()).expect("valid config");

    for _ in 0..5 {
        world.step(&params).expect("step");
    }

    for agent in &mut world.agents {
        agent.y = params.world_height + 100.0;
    }
    world.step(&params).expect("step");

    assert_eq!(world.generation, 2);
    assert_eq!(world.alive, 4);
    assert!(world.agents.iter().all(|a| a.alive));
    // The tick that rolled the generation over still counts one tick.
    assert_eq!(world.score, 1);

    // Every agent of generation 1 was recorded exactly once.
    assert_eq!(world.history.generations().len(), 2);
    assert_eq!(world.history.generations()[0].len(), 4);
}

#[test]
fn test_restart_discards_progress() {
    let params = test_params();
    let mut world = World::new(&params, test_config()).expect("valid config");

    for _ in 0..10 {
        world.step(&params).expect("step");
    }

    world.restart(&params).expect("restart");
    assert_eq!(world.generation, 1);
    assert_eq!(world.score, 0);
    assert_eq!(world.max_score, 0);
    assert_eq!(world.alive, 4);
    assert!(world.obstacles.is_empty());
}

#[test]
fn test_snapshot_reports_counters() {
    let params = test_params();
    let mut world = World::new(&params, test_config()).expect("valid config");

    for _ in 0..3 {
        world.step(&params).expect("step");
    }

    let snapshot = world.snapshot();
    assert_eq!(snapshot.score, world.score);
    assert_eq!(snapshot.max_score, world.max_score);
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.population, 4);
    assert_eq!(snapshot.alive, world.alive);
    assert_eq!(snapshot.agents.len(), world.alive);
    assert_eq!(snapshot.obstacles.len(), world.obstacles.len());
}
