// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.the-numbers.com";
pub const SEARCH_PATH: &str = "/custom-search";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite

// Matching
pub const MIN_MATCH_SCORE: f64 = 20.0;

// Extraction
pub const CUTOFF_YEAR: i32 = 2024; // daily rows must be newer than this

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Files
pub const DEFAULT_DRAFT_FILE: &str = "movie_draft_list.json";
pub const DEFAULT_DATA_FILE: &str = "movie_data.json";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const LINE_PLOT_FILE: &str = "owner_domestic_line_plot.html";
pub const BAR_PLOT_FILE: &str = "owner_international_bar_plot.html";
pub const COMBINED_PLOT_FILE: &str = "owner_box_office_plots.html";

// League
pub const OWNER_COLORS: &[(&str, &str)] = &[
    ("David",    "#00FFFF"), // Electric Blue
    ("Dave",     "#FFA500"), // Bright Orange
    ("Noah",     "#39FF14"), // Neon Green
    ("Reid",     "#FF00FF"), // Magenta
    ("Seth",     "#00BFFF"), // Deep Sky Blue
    ("Jordan",   "#FFD700"), // Gold
    ("Thomas",   "#8A2BE2"), // Blue Violet
    ("Jon Reid", "#FF4500"), // Orange Red
];

// For owners outside the table above
pub const FALLBACK_COLORS: &[&str] = &[
    "#FF6F91", "#7CFFCB", "#F9F871", "#B39CD0", "#00C9A7", "#FF9671",
];
