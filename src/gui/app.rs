// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, GuiState},
    draft::Draft,
    model::MovieRecord,
    report::{aggregate, Standings},
    store,
};

use super::components;

/// Result slot a background collect fills in; the UI thread drains it.
pub type Pending = Arc<Mutex<Option<Result<Vec<MovieRecord>, String>>>>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Box Office Draft",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // owners shown in the side panel (selection lives inside state.gui)
    pub owners: Vec<String>,
    pub last_clicked: Option<usize>,

    // snapshot in memory + its standings
    pub records: Vec<MovieRecord>,
    pub standings: Standings,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Pending,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");

        let records = match store::load_records(&state.options.report.data_path) {
            Ok(v) => {
                logf!("Cache: Loaded {} movie(s)", v.len());
                status = s!("Loaded local data");
                v
            }
            Err(e) => {
                logd!("Cache: Missing snapshot ({})", e);
                Vec::new()
            }
        };

        // Draft owners when the draft exists, configured league otherwise.
        let owners = match Draft::load(&state.options.collect.draft_path) {
            Ok(d) if !d.is_empty() => d.owners().map(|o| s!(o)).collect(),
            _ => state.options.report.owners.clone(),
        };

        state.gui = GuiState {
            selected_owners: owners.clone(),
            ..GuiState::default()
        };

        logf!("Init: owners={}, movies={}", owners.len(), records.len());

        let mut app = Self {
            state,
            owners,
            last_clicked: None,
            records,
            standings: Standings::default(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            pending: Arc::new(Mutex::new(None)),
        };
        app.rebuild_standings();
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn is_selected(&self, owner: &str) -> bool {
        self.state.gui.selected_owners.iter().any(|o| o == owner)
    }

    /// Records of the selected owners, snapshot order.
    pub fn visible_records(&self) -> impl Iterator<Item = &MovieRecord> {
        self.records.iter().filter(|r| self.is_selected(&r.owner))
    }

    pub fn rebuild_standings(&mut self) {
        let opts = &self.state.options.report;
        self.standings = aggregate(&self.records, &opts.owners, opts.season_start);
    }

    /// Pick up a finished background collect, if any.
    fn poll_pending(&mut self) {
        let done = match self.pending.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        let Some(result) = done else { return };

        self.running = false;
        match result {
            Ok(records) => {
                logf!("Collect: OK movies={}", records.len());
                for r in &records {
                    if !self.owners.contains(&r.owner) {
                        self.owners.push(r.owner.clone());
                        self.state.gui.selected_owners.push(r.owner.clone());
                    }
                }
                self.records = records;
                self.rebuild_standings();
                self.status(format!("Ready ({} movies)", self.records.len()));
            }
            Err(e) => {
                loge!("Collect: Error: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        egui::SidePanel::left("owners")
            .resizable(false)
            .show(ctx, |ui| {
                components::owner_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_bar::draw(ui, self);

            ui.separator();

            components::tabs::draw_current(ui, self);
        });
    }
}
