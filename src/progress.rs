// src/progress.rs

/// Status sink for the collector and the reporter. The CLI prints each call,
/// the GUI copies it into its status line. All methods default to no-ops.
pub trait Progress {
    /// Number of drafted titles (collect) or pages (report) about to be processed.
    fn begin(&mut self, _total: usize) {}

    /// One human-readable line, e.g. "Searching for Sinners (Owner: Seth)".
    fn log(&mut self, _msg: &str) {}

    /// A title or page is finished, whatever its outcome.
    fn item_done(&mut self, _title: &str) {}

    fn finish(&mut self) {}
}
