// src/gui/components/tabs.rs
//
// Top tabs and the view under them.

use eframe::egui;

use crate::config::state::Tab;
use crate::gui::app::App;

use super::{movie_table, standings_table};

const TABS: &[(Tab, &str)] = &[(Tab::Movies, "Movies"), (Tab::Standings, "Standings")];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.current_tab;
        for &(tab, title) in TABS {
            let selected = tab == cur;
            if ui.selectable_label(selected, title).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, tab);
                app.state.gui.current_tab = tab;
            }
        }
    });
}

pub fn draw_current(ui: &mut egui::Ui, app: &mut App) {
    match app.state.gui.current_tab {
        Tab::Movies => movie_table::draw(ui, app),
        Tab::Standings => standings_table::draw(ui, app),
    }
}
