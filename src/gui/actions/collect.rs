// src/gui/actions/collect.rs
use std::thread;

use crate::{collect, gui::app::App, gui::progress::GuiProgress};

/// Run the collector on a worker thread; `App::update` picks up the result.
pub fn collect(app: &mut App) {
    if app.running {
        return;
    }
    let opts = app.state.options.collect.clone();
    logf!(
        "Collect: Begin draft={} out={}",
        opts.draft_path.display(),
        opts.out_path.display()
    );

    app.running = true;
    app.status("Collecting…");

    let status = app.status.clone();
    let pending = app.pending.clone();
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let result = collect::run(&opts, Some(&mut prog))
            .map(|summary| {
                for (owner, title, outcome) in summary.skipped() {
                    logd!("Collect: skipped {} ({}) {:?}", title, owner, outcome);
                }
                summary.records
            })
            .map_err(|e| e.to_string());
        if let Ok(mut slot) = pending.lock() {
            *slot = Some(result);
        }
    });
}
