// ui.rs - Controls, grid drawing and pointer input

use eframe::egui;
use egui::{Rect, Sense, Vec2};
use conway::{Pen, patterns};

use crate::ConwayApp;

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").resizable(false).show(ctx, |ui| {
            ui.heading("Game of Life");

            // Run / pause
            let button_text = if self.engine.is_running() { "⏸ Stop" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.engine.toggle_running();
            }

            let pen_text = match self.engine.pen() {
                Pen::Draw   => "✏ Draw boxes",
                Pen::Toggle => "🔀 Toggle boxes",
            };
            if ui.button(pen_text).clicked() {
                self.engine.toggle_pen();
            }

            ui.separator();

            // History navigation
            ui.horizontal(|ui| {
                if ui.button("⏮ Prev").clicked() && self.engine.step_history(-1) {
                    ctx.request_repaint();
                }
                if ui.button("Next ⏭").clicked() && self.engine.step_history(1) {
                    ctx.request_repaint();
                }
            });

            ui.separator();

            if ui.button("⏹ Clear").clicked() {
                self.engine.set_running(false);
                self.engine.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.engine.set_running(false);
                self.seed = self.seed.wrapping_add(1);
                self.engine.randomize(self.seed);
            }

            // Pattern dropdown
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.engine.set_running(false);
                self.engine.apply_pattern(&patterns::PATTERNS[self.selected_pattern]);
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            // Status, read in one lock
            let (dims, slot, capacity, live) = {
                let state = self.engine.lock();
                let grid = state.current();
                (grid.dimensions(), state.ring().position(), state.ring().capacity(), grid.live_cells())
            };
            ui.label(format!("Size: {},{}", dims.0, dims.1));
            ui.label(format!("History slot: {}/{}", slot + 1, capacity));
            ui.label(format!("Live cells: {}", live));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let cell = self.cell_size as f32;
            let available = ui.available_size();
            let width = ((available.x / cell) as usize).max(1);
            let height = ((available.y / cell) as usize).max(1);
            if self.engine.dimensions() != (width, height) {
                self.engine.resize(width, height);
            }

            let (response, painter) = ui.allocate_painter(
                Vec2::new(width as f32 * cell, height as f32 * cell),
                Sense::click_and_drag(),
            );
            let origin = response.rect.min;

            // Pointer input: draw while the button is held, once per cell
            if response.is_pointer_button_down_on() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let target = ((offset.x / cell) as usize, (offset.y / cell) as usize);
                        if self.last_painted != Some(target) && self.engine.paint(target.0, target.1) {
                            self.last_painted = Some(target);
                        }
                    }
                }
            } else {
                self.last_painted = None;
            }

            // Draw from a snapshot so the tick is never held up by painting
            let grid = self.engine.snapshot();
            painter.rect_filled(response.rect, 0.0, self.dead_color);
            for (x, y) in grid.iter_live() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(x as f32 * cell, y as f32 * cell),
                    Vec2::splat(cell),
                );
                painter.rect_filled(rect, 0.0, self.live_color);
            }
        });
    }
}
