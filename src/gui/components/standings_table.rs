// src/gui/components/standings_table.rs

use eframe::egui::{self, Align, Color32, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::core::sanitize::fmt_dollars;
use crate::gui::app::App;
use crate::report::charts::owner_rgb;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let standings = &app.standings;
    if let (Some(first), Some(last)) = (standings.days.first(), standings.days.last()) {
        ui.label(format!("Season days {first} → {last} ({})", standings.days.len()));
    }

    let owners: Vec<(usize, &crate::report::OwnerAggregate)> = standings
        .owners
        .iter()
        .enumerate()
        .filter(|(_, o)| app.state.gui.selected_owners.contains(&o.owner))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .id_salt("standings_table")
        .column(Column::exact(44.0))
        .column(Column::initial(140.0).resizable(true))
        .column(Column::initial(140.0).resizable(true))
        .column(Column::initial(140.0).resizable(true))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for h in ["Rank", "Owner", "Domestic", "Worldwide", "Movies"] {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for (rank, o) in owners {
                let (r, g, b) = owner_rgb(&o.owner, rank);
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(format!("{}", rank + 1));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&o.owner).color(Color32::from_rgb(r, g, b)).strong());
                    });
                    for v in [o.latest(), o.worldwide] {
                        row.col(|ui| {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(fmt_dollars(v)).monospace());
                            });
                        });
                    }
                    row.col(|ui| {
                        ui.label(o.movies.to_string());
                    });
                });
            }
        });
}
