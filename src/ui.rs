// UI module - control panel and evolution stats.

use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use neuvol::simulation::snapshot::Snapshot;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UiState {
    /// Simulation rate in ticks per second when not in turbo mode.
    pub ticks_per_second: f32,
    /// Run a fixed batch of steps per frame, as fast as possible.
    pub turbo: bool,
    pub save_requested: bool,
    pub load_requested: bool,
    pub restart_requested: bool,
    pub status_message: Option<String>,
    /// Running max score sampled at each generation turnover.
    score_history: VecDeque<[f64; 2]>,
    last_seen_generation: u32,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            ticks_per_second: 60.0,
            turbo: false,
            save_requested: false,
            load_requested: false,
            restart_requested: false,
            status_message: None,
            score_history: VecDeque::new(),
            last_seen_generation: 0,
        }
    }

    /// Samples the plot once per generation turnover.
    pub fn update_history(&mut self, snapshot: &Snapshot) {
        if snapshot.generation != self.last_seen_generation {
            if snapshot.generation < self.last_seen_generation {
                // Restart or load rolled the counter back.
                self.score_history.clear();
            }
            self.last_seen_generation = snapshot.generation;
            self.score_history
                .push_back([snapshot.generation as f64, snapshot.max_score as f64]);

            if self.score_history.len() > MAX_HISTORY_POINTS {
                self.score_history.pop_front();
            }
        }
    }
}

pub fn draw_ui(state: &mut UiState, snapshot: &Snapshot) {
    egui_macroquad::ui(|egui_ctx| {
        egui::SidePanel::right("stats_panel")
            .default_width(280.0)
            .resizable(true)
            .show(egui_ctx, |ui| {
                ui.heading("Evolution");
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        state.save_requested = true;
                    }
                    if ui.button("Load").clicked() {
                        state.load_requested = true;
                    }
                    if ui.button("Restart").clicked() {
                        state.restart_requested = true;
                    }
                });

                if let Some(ref msg) = state.status_message {
                    ui.label(msg);
                }

                ui.separator();
                ui.label("Simulation speed");
                ui.add(
                    egui::Slider::new(&mut state.ticks_per_second, 1.0..=1000.0)
                        .logarithmic(true)
                        .text("ticks/s"),
                );
                ui.checkbox(&mut state.turbo, "Turbo (as fast as possible)");

                ui.separator();
                ui.label(format!("Generation: {}", snapshot.generation));
                ui.label(format!("Score: {}", snapshot.score));
                ui.label(format!("Max score: {}", snapshot.max_score));
                ui.label(format!(
                    "Alive: {} / {}",
                    snapshot.alive, snapshot.population
                ));

                ui.separator();
                ui.label("Max score by generation");
                let points: PlotPoints = state.score_history.iter().copied().collect();
                Plot::new("score_plot")
                    .height(150.0)
                    .show_axes([true, true])
                    .label_formatter(|_name, value| {
                        format!("Generation: {:.0}\nScore: {:.0}", value.x, value.y)
                    })
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new(points));
                    });
            });
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
