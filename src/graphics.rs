use macroquad::prelude::*;
use neuvol::simulation::params::SimParams;
use neuvol::simulation::snapshot::Snapshot;

fn world_to_screen_scale(params: &SimParams) -> (f32, f32) {
    (
        screen_width() / params.world_width,
        screen_height() / params.world_height,
    )
}

pub fn draw_world(snapshot: &Snapshot, params: &SimParams) {
    let (scale_x, scale_y) = world_to_screen_scale(params);

    // Backdrop stripes scrolled at half speed for a bit of parallax.
    let stripe_width = 100.0 * scale_x;
    let period = stripe_width * 2.0;
    let mut x = -((snapshot.background_x * scale_x) % period);
    while x < screen_width() {
        draw_rectangle(
            x,
            0.0,
            stripe_width,
            screen_height(),
            Color::new(0.45, 0.78, 0.95, 1.0),
        );
        x += period;
    }

    for obstacle in &snapshot.obstacles {
        draw_rectangle(
            obstacle.x * scale_x,
            obstacle.y * scale_y,
            obstacle.width * scale_x,
            obstacle.height * scale_y,
            DARKGREEN,
        );
    }

    for agent in &snapshot.agents {
        let center_x = (agent.x + agent.width / 2.0) * scale_x;
        let center_y = (agent.y + agent.height / 2.0) * scale_y;
        draw_rectangle_ex(
            center_x,
            center_y,
            agent.width * scale_x,
            agent.height * scale_y,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                // Tilt with the fall, like a diving bird.
                rotation: std::f32::consts::FRAC_PI_2 * agent.velocity / 20.0,
                color: GOLD,
            },
        );
    }
}

pub fn draw_hud(snapshot: &Snapshot) {
    let lines = [
        format!("Score: {}", snapshot.score),
        format!("Max score: {}", snapshot.max_score),
        format!("Generation: {}", snapshot.generation),
        format!("Alive: {} / {}", snapshot.alive, snapshot.population),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 25.0 + i as f32 * 25.0, 20.0, WHITE);
    }
}
