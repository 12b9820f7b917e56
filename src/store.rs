//! Task storage and collection helpers.
//!
//! The whole collection lives in one JSON file: every invocation reads it in
//! full, and every mutating operation rewrites it in full. Crash consistency
//! is best-effort by design.

use std::fs;
use std::path::PathBuf;

use chrono::SecondsFormat;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fields::format_status;
use crate::task::Task;

/// File-backed store for the task collection.
///
/// The backing path is fixed at construction and never read from anywhere
/// else.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Store { path }
    }

    /// Load the full task collection. A missing file is created holding an
    /// empty collection; a file that exists but does not parse is a terminal
    /// error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            self.save(&[])?;
            return Ok(Vec::new());
        }
        let buf = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&buf).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(count = tasks.len(), path = %self.path.display(), "loaded task database");
        Ok(tasks)
    }

    /// Overwrite the backing file with the full collection.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let data = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, data)?;
        debug!(count = tasks.len(), path = %self.path.display(), "saved task database");
        Ok(())
    }
}

/// Generate the next available task ID: max existing + 1, or 1 when empty.
/// Deleted IDs are never handed out again.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

/// Get a mutable reference to a task by ID.
pub fn get_mut(tasks: &mut [Task], id: u64) -> Option<&mut Task> {
    tasks.iter_mut().find(|t| t.id == id)
}

/// Print a task as labeled lines plus a separator.
pub fn print_task(t: &Task) {
    println!("ID: {}", t.id);
    println!("Description: {}", t.description);
    println!("Status: {}", format_status(t.status));
    println!(
        "Created At: {}",
        t.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    println!(
        "Updated At: {}",
        t.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    println!("----------------");
}
