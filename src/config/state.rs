// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Movies,
    Standings,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Which owners are selected in the left panel
    pub selected_owners: Vec<String>,

    pub window_w: u32,
    pub window_h: u32,

    pub current_tab: Tab,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_owners: Vec::new(),
            window_w: 1100,
            window_h: 700,
            current_tab: Tab::Movies,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
