//! Append-only reminder log, one `<timestamp> - <message>` entry per
//! dispatched reminder. The file is opened and closed on every write.

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub fn format_entry(at: DateTime<Local>, message: &str) -> String {
    format!("{} - {}", at.format("%Y-%m-%d %H:%M:%S%.6f"), message)
}

pub fn append_entry(path: &Path, at: DateTime<Local>, message: &str) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::log(format!("Failed to open {}: {}", path.display(), e)))?;
    writeln!(file, "{}", format_entry(at, message))
        .map_err(|e| AppError::log(format!("Failed to write {}: {}", path.display(), e)))
}
