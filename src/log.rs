// src/log.rs
//
// File-backed sink for the `log` facade. Lines look like
//   [00:00:01.250][INFO] Collect: 3 record(s) → movie_data.json
// and land in .store/debug.log next to the working directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use ::log::{LevelFilter, Log, Metadata, Record};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: FileLogger = FileLogger;

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

struct FileLogger;

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= ::log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if let Ok(_guard) = LOG_LOCK.lock() {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(Path::new(STORE_DIR).join(LOG_FILE))
            {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger. Safe to call more than once; later calls are no-ops.
pub fn init() {
    start();
    let _ = fs::create_dir_all(STORE_DIR);
    if ::log::set_logger(&LOGGER).is_ok() {
        ::log::set_max_level(LevelFilter::Debug);
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
