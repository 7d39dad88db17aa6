// src/gui/components/owner_panel.rs
//
// Left owner list. Click selects one, ctrl toggles, shift selects a range.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Owners");

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_owners = app.owners.clone();
            logf!("UI: Selected all owners");
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_owners.clear();
            logf!("UI: Cleared owner selection");
        }
    });

    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.bar_outer_margin = -6.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("owners_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            ui.set_width(w);

            let mut clicked: Option<(usize, bool, bool)> = None;
            for (idx, owner) in app.owners.iter().enumerate() {
                let count = app.records.iter().filter(|r| &r.owner == owner).count();
                let label = format!("{owner} ({count})");
                if ui.selectable_label(app.is_selected(owner), label).clicked() {
                    let m = ui.input(|i| i.modifiers);
                    clicked = Some((idx, m.ctrl, m.shift));
                }
            }

            if let Some((idx, ctrl, shift)) = clicked {
                apply_click(app, idx, ctrl, shift);
                logf!(
                    "UI: Selection changed ({} owners) {:?}",
                    app.state.gui.selected_owners.len(),
                    &app.state.gui.selected_owners
                );
            }
        });
}

fn apply_click(app: &mut App, idx: usize, ctrl: bool, shift: bool) {
    let owner = app.owners[idx].clone();
    let was_selected = app.is_selected(&owner);
    let sel = &mut app.state.gui.selected_owners;

    match (ctrl, shift, app.last_clicked) {
        (_, true, Some(last)) => {
            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
            if !ctrl {
                sel.clear();
            }
            for o in &app.owners[lo..=hi] {
                if !sel.contains(o) {
                    sel.push(o.clone());
                }
            }
        }
        (true, _, _) => {
            if was_selected {
                sel.retain(|o| *o != owner);
            } else {
                sel.push(owner);
            }
        }
        _ => {
            sel.clear();
            sel.push(owner);
        }
    }
    app.last_clicked = Some(idx);
}
