// ui.rs - Control panel and board drawing for the Life viewer

use std::time::Instant;

use eframe::egui;
use egui::{Key, RichText, Sense, Stroke};
use life_engine::PATTERNS;

use crate::app::{Brush, Command, LifeApp};
use crate::layout::{self, Layout};

const SHORTCUTS: [(Key, Command); 6] = [
    (Key::Space, Command::ToggleRunning),
    (Key::N, Command::Step),
    (Key::C, Command::Clear),
    (Key::R, Command::Randomize),
    (Key::W, Command::ToggleWrap),
    (Key::P, Command::ApplyPattern),
];

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Catch up on generations before anything is drawn
        self.tick(Instant::now());

        let pressed: Vec<Command> = ctx.input(|i| {
            SHORTCUTS
                .iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .map(|&(_, command)| command)
                .collect()
        });
        for command in pressed {
            self.run(command);
        }

        egui::SidePanel::left("controls")
            .exact_width(self.viewer.panel_width)
            .resizable(false)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.background))
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| self.board(ui));
            });

        // Keep frames coming while the clock needs them
        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Game of Life");
        ui.separator();

        ui.horizontal(|ui| {
            let button_text = if self.sim.is_running() { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.run(Command::ToggleRunning);
            }
            if ui.button("⏭ Step").clicked() {
                self.run(Command::Step);
            }
            if ui.button("⏹ Clear").clicked() {
                self.run(Command::Clear);
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("🎲 Random").clicked() {
                self.run(Command::Randomize);
            }
            ui.add(egui::Slider::new(&mut self.random_density, 0.0..=1.0).text("density"));
        });

        let mut wrap = self.sim.is_wrapped();
        if ui.checkbox(&mut wrap, "Wrap edges (torus)").changed() {
            self.run(Command::ToggleWrap);
        }
        ui.checkbox(&mut self.viewer.highlight_neighbors, "Highlight neighbors");

        ui.separator();

        // Pattern dropdown
        ui.horizontal(|ui| {
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
        });
        if ui.button("Apply Pattern").clicked() {
            self.run(Command::ApplyPattern);
        }

        ui.separator();

        // Speed control
        let mut speed = self.sim.speed();
        let range = self.viewer.min_speed..=self.viewer.max_speed;
        if ui
            .add(egui::Slider::new(&mut speed, range).suffix(" gen/s").text("Speed"))
            .changed()
        {
            self.sim.set_speed(speed);
        }

        ui.separator();

        ui.label(self.status_line());
        if let Some((col, row)) = self.hovered {
            ui.label(format!(
                "Cell ({col}, {row}): {} live neighbors",
                self.sim.grid().live_neighbors(col, row)
            ));
        }

        ui.separator();

        ui.label(RichText::new("Left drag paints, right drag erases.").small());
        ui.label(RichText::new("Space start/pause · N step · C clear · R random · W wrap · P pattern").small());
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let grid = self.sim.grid();
        let origin = layout::board_origin(ui.max_rect(), &self.viewer);
        let layout = Layout::new(origin, &self.viewer, grid.cols(), grid.rows());

        let padding = egui::Vec2::splat(self.viewer.padding);
        let (response, painter) =
            ui.allocate_painter(layout.board_size() + padding * 2.0, Sense::click_and_drag());

        // Pointer to cell; positions off the board are passed through and ignored
        self.hovered = response
            .hover_pos()
            .map(|pos| layout.cell_at(pos))
            .filter(|&(col, row)| grid.contains(col, row));

        let brush = ui.input(|i| {
            if i.pointer.primary_down() {
                Some(Brush::Paint)
            } else if i.pointer.secondary_down() {
                Some(Brush::Erase)
            } else {
                None
            }
        });
        let pointer = response.interact_pointer_pos().or(response.hover_pos());
        if let (Some(brush), Some(pos)) = (brush, pointer) {
            if response.is_pointer_button_down_on() || response.dragged() {
                self.brush(brush, layout.cell_at(pos));
            }
        }

        let neighbors = self.highlighted_neighbors();
        let grid = self.sim.grid();

        painter.rect_filled(layout.board_rect(), 0.0, self.theme.grid_line);

        for cell in grid.cells() {
            let rect = layout.cell_rect(cell.col, cell.row);
            let hovered = self.hovered == Some((cell.col, cell.row));
            let neighbor = neighbors.contains(&(cell.col, cell.row));
            let fill = self.theme.cell_fill(cell.alive, hovered, neighbor);
            painter.rect_filled(rect, 1.0, fill);
        }

        painter.rect_stroke(layout.board_rect(), 0.0, Stroke::new(1.0, self.theme.grid_line));
    }
}
