//! Logging setup built on the `log` facade with `fern` as the backend.
//!
//! Every record is captured in a bounded in-memory [`LogBuffer`] so the UI can
//! show recent activity ("G" key). When file logging is enabled the same
//! records are appended to `marketplace.log` in the platform data directory.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared, bounded buffer of formatted log lines
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Add a log line, evicting the oldest once full
    pub fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Get all lines, newest first
    pub fn lines(&self) -> Vec<String> {
        if let Ok(lines) = self.lines.lock() {
            lines.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Path of the log file used when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("marketplace").join("marketplace.log"))
}

/// Install the global logger.
///
/// Returns the log file path when file logging is enabled.
pub fn init_logging(config: &LoggingConfig, buffer: LogBuffer) -> Result<Option<PathBuf>> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

    let mut log_path = None;
    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
        log_path = Some(path);
    }

    dispatch.apply().context("Logger already initialized")?;
    Ok(log_path)
}
