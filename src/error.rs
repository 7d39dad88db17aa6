// src/error.rs
use thiserror::Error;

/// Per-title failures while searching or reading a movie page.
/// The collector logs these and moves on to the next title.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    Url(String),

    #[error("Date format not recognized: {0}")]
    DateFormat(String),

    #[error("Money value not recognized: {0:?}")]
    Money(String),

    #[error("Missing page section: {0}")]
    MissingSection(&'static str),
}

/// Draft / snapshot file problems.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid draft: {0}")]
    Draft(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Chart drawing failed: {0}")]
    Chart(String),

    #[error("Could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
