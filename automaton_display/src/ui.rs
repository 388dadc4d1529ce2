// ui.rs - Controls, canvas and status line

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use grid_engine::{AutomatonType, PATTERNS, Rgb};
use std::time::Instant;
use crate::{AutomatonApp, SimulationControls, config};

fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

impl eframe::App for AutomatonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                if ui.button("Step").clicked() {
                    self.step_once();
                }
                if ui.button("▶ Run").clicked() {
                    self.run();
                }
                if ui.button("⏸ Pause").clicked() {
                    self.pause();
                }
                if ui.button("⏹ Stop").clicked() {
                    self.stop();
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                // Type selector is locked while the simulation runs
                let mut selected = self.grid.automaton_type();
                ui.add_enabled_ui(!self.is_running, |ui| {
                    egui::ComboBox::from_id_source("automaton_type")
                        .selected_text(selected.name())
                        .show_ui(ui, |ui| {
                            for kind in AutomatonType::ALL {
                                ui.selectable_value(&mut selected, kind, kind.name());
                            }
                        });
                });
                if selected != self.grid.automaton_type() {
                    self.select_type(selected);
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            // Canvas
            let size = Vec2::new(self.canvas_size[0], self.canvas_size[1]);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
            let canvas = response.rect;
            painter.rect_filled(canvas, 0.0, Color32::WHITE);

            let tile_width = canvas.width() / self.grid.width() as f32;
            let tile_height = canvas.height() / self.grid.height() as f32;
            let line = Stroke::new(1.0, Color32::LIGHT_GRAY);
            for row in 1..self.grid.height() {
                let y = canvas.top() + tile_height * row as f32;
                painter.line_segment([Pos2::new(canvas.left(), y), Pos2::new(canvas.right(), y)], line);
            }
            for col in 1..self.grid.width() {
                let x = canvas.left() + tile_width * col as f32;
                painter.line_segment([Pos2::new(x, canvas.top()), Pos2::new(x, canvas.bottom())], line);
            }

            for cell in self.grid.render_cells() {
                let min = Pos2::new(
                    canvas.left() + cell.col as f32 * tile_width,
                    canvas.top() + cell.row as f32 * tile_height,
                );
                let rect = Rect::from_min_size(min, Vec2::new(tile_width, tile_height));
                painter.rect_filled(rect, 0.0, to_color32(cell.color));
            }

            // Mouse press toggles the cell under the pointer
            if response.hovered() && ctx.input(|i| i.pointer.primary_pressed()) {
                if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                    let local = pos - canvas.min;
                    self.press_canvas(local.x, local.y);
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.grid.generation()));
                ui.separator();

                let population = self.grid.population();
                let total = (self.grid.width() * self.grid.height()) as f32;
                ui.label(format!("Alive: {}", population.alive));
                ui.label(format!("Dead: {}", population.dead));
                ui.label(format!("Population: {:.1}%", population.alive as f32 / total * 100.0));

                ui.separator();

                ui.label("Speed:");
                let mut speed = self.speed;
                let slider = egui::Slider::new(&mut speed, config::SPEED_MIN..=config::SPEED_MAX);
                if ui.add(slider).changed() {
                    self.set_speed(speed);
                }
            });
        });

        // Keep ticking while running
        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}
