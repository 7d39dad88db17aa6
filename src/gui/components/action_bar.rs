// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Draft:");
        ui.monospace(app.state.options.collect.draft_path.display().to_string());
        ui.separator();
        ui.label("Charts:");
        ui.monospace(app.state.options.report.out_dir.display().to_string());
        if ui.button("📁").on_hover_text("Open chart folder").clicked() {
            actions::open_output_folder(app);
        }
    });

    ui.horizontal(|ui| {
        let before = app.state.options.collect.min_score;
        ui.add_enabled(
            !app.running,
            egui::Slider::new(&mut app.state.options.collect.min_score, 0.0..=100.0)
                .text("Min match score"),
        );
        if app.state.options.collect.min_score != before {
            logd!("UI: min_score → {}", app.state.options.collect.min_score);
        }
    });

    ui.horizontal(|ui| {
        let gold = egui::Color32::from_rgb(255, 196, 0);
        let black = egui::Color32::BLACK;

        let button_collect = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("COLLECT").color(black).strong()).fill(gold),
        );
        if button_collect.clicked() {
            actions::collect(app);
        }

        if ui.add_enabled(!app.running, egui::Button::new("Report")).clicked() {
            actions::report(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
