// src/gui/components/movie_table.rs
//
// One row per collected movie of the selected owners.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::core::sanitize::fmt_dollars;
use crate::gui::app::App;
use crate::model::MovieRecord;

const HEADERS: &[&str] = &["Owner", "Title", "Released", "Genre", "Rating", "Runtime", "Domestic", "Worldwide"];
const WIDTHS: &[f32] = &[90.0, 220.0, 90.0, 110.0, 60.0, 60.0, 120.0, 120.0];
// Right-aligned money columns
const FIRST_NUMERIC: usize = 5;

fn cells(r: &MovieRecord) -> [String; 8] {
    let dash = || s!("-");
    [
        r.owner.clone(),
        r.title.clone(),
        r.release_date.map(|d| d.to_string()).unwrap_or_else(dash),
        r.genre.clone().unwrap_or_else(dash),
        r.mpaa_rating.clone().unwrap_or_else(dash),
        r.runtime_minutes.map(|m| format!("{m} min")).unwrap_or_else(dash),
        fmt_dollars(r.domestic_total()),
        fmt_dollars(r.worldwide_gross),
    ]
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows: Vec<[String; 8]> = app.visible_records().map(cells).collect();
    if rows.is_empty() {
        ui.label("No movies for the current selection. Collect to fetch data.");
        return;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("movie_table");
    for &w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                for (ci, text) in r.iter().enumerate() {
                    row.col(|ui| {
                        if ci >= FIRST_NUMERIC {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(text).monospace());
                            });
                        } else {
                            ui.label(text.as_str());
                        }
                    });
                }
            });
        });
}
