// src/config/options.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub collect: CollectOptions,
    pub report: ReportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            collect: CollectOptions::default(),
            report: ReportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CollectOptions {
    /// Owner → titles JSON
    pub draft_path: PathBuf,
    /// Snapshot written after the run
    pub out_path: PathBuf,
    pub min_score: f64,
    pub pause_ms: u64,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            draft_path: PathBuf::from(DEFAULT_DRAFT_FILE),
            out_path: PathBuf::from(DEFAULT_DATA_FILE),
            min_score: MIN_MATCH_SCORE,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportOptions {
    pub data_path: PathBuf,
    pub out_dir: PathBuf,
    /// League owners, always charted even with no data yet.
    pub owners: Vec<String>,
    /// First charted day; earliest observed date when None.
    pub season_start: Option<NaiveDate>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            owners: default_owners(),
            season_start: None,
        }
    }
}

pub fn default_owners() -> Vec<String> {
    OWNER_COLORS.iter().map(|(name, _)| s!(*name)).collect()
}

impl AppOptions {
    /// `run` chains collect → report, so the report must read what collect wrote.
    pub fn chain_paths(&mut self) {
        self.report.data_path = self.collect.out_path.clone();
    }
}
