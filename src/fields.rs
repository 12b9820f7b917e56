//! Enumerations shared between the CLI surface and the storage format.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task completion status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

/// Format a task status for display. Matches the on-disk spelling.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Todo => "todo",
        Status::InProgress => "in-progress",
        Status::Done => "done",
    }
}
