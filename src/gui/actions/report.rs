// src/gui/actions/report.rs
use crate::{gui::app::App, gui::progress::GuiProgress, report};

pub fn report(app: &mut App) {
    if app.records.is_empty() {
        app.status("Nothing to report (no movies collected)");
        logd!("Report: Clicked, but there's no data");
        return;
    }

    let mut prog = GuiProgress::new(app.status.clone());
    match report::render(&app.records, &app.state.options.report, Some(&mut prog)) {
        Ok(rep) => {
            app.standings = rep.standings;
            let last = rep.files_written.last().map(|p| p.display().to_string()).unwrap_or_default();
            app.status(format!("Wrote {} file(s). Last: {}", rep.files_written.len(), last));
        }
        Err(e) => {
            loge!("Report: Error: {}", e);
            app.status(format!("Report error: {e}"));
        }
    }
}
