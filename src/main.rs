use macroquad::prelude::*;

mod graphics;
mod ui;

use neuvol::neuro::config::{EvolutionConfig, Topology};
use neuvol::simulation::params::SimParams;
use neuvol::simulation::scheduler::{FixedRate, Pacer, Turbo};
use neuvol::simulation::world::World;

const SAVE_PATH: &str = "neuvol_save.json";

#[macroquad::main("Flappy Neuroevolution")]
async fn main() {
    env_logger::init();

    let params = SimParams::default();
    let config = EvolutionConfig {
        population: 50,
        topology: Topology::new(2, vec![2], 1),
        ..EvolutionConfig::default()
    };

    let mut world: Option<World> = None;
    let mut ui_state = ui::UiState::new();
    let mut fixed = FixedRate::new(ui_state.ticks_per_second);
    let mut turbo = Turbo {
        steps_per_frame: 600,
    };

    log::info!("starting flappy neuroevolution");

    loop {
        if world.is_none() {
            clear_background(LIGHTGRAY);
            let text = "Start a new evolution by pressing Enter";
            let font_size = 30.0;

            let text_size = measure_text(text, None, font_size as _, 1.0);
            draw_text(
                text,
                screen_width() / 2. - text_size.width / 2.,
                screen_height() / 2. - text_size.height / 2.,
                font_size,
                DARKGRAY,
            );

            if is_key_down(KeyCode::Enter) {
                world = Some(
                    World::new(&params, config.clone()).expect("default configuration is valid"),
                );
            }
            next_frame().await;
            continue;
        }

        clear_background(SKYBLUE);

        if let Some(active) = world.as_mut() {
            let budget = if ui_state.turbo {
                turbo.budget(get_frame_time())
            } else {
                fixed.set_rate(ui_state.ticks_per_second);
                fixed.budget(get_frame_time())
            };

            for _ in 0..budget {
                if let Err(e) = active.step(&params) {
                    log::error!("simulation stopped: {e}");
                    ui_state.status_message = Some(format!("Error: {e}"));
                    break;
                }
            }

            let snapshot = active.snapshot();
            graphics::draw_world(&snapshot, &params);
            graphics::draw_hud(&snapshot);
            ui_state.update_history(&snapshot);
            ui::draw_ui(&mut ui_state, &snapshot);
            ui::process_egui();

            if ui_state.save_requested {
                ui_state.save_requested = false;
                ui_state.status_message = Some(match active.save_to_file(SAVE_PATH) {
                    Ok(()) => format!("Saved to {SAVE_PATH}"),
                    Err(e) => format!("Save failed: {e}"),
                });
            }

            if ui_state.restart_requested {
                ui_state.restart_requested = false;
                if let Err(e) = active.restart(&params) {
                    ui_state.status_message = Some(format!("Restart failed: {e}"));
                } else {
                    ui_state.status_message = Some("Evolution restarted".to_string());
                }
            }
        }

        if ui_state.load_requested {
            ui_state.load_requested = false;
            match World::load_from_file(SAVE_PATH) {
                Ok(loaded) => {
                    world = Some(loaded);
                    ui_state.status_message = Some(format!("Loaded {SAVE_PATH}"));
                }
                Err(e) => {
                    ui_state.status_message = Some(format!("Load failed: {e}"));
                }
            }
        }

        next_frame().await
    }
}
