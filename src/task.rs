//! Task data structure.
//!
//! This module defines the core `Task` record. The serde attributes pin the
//! on-disk shape: camelCase keys, kebab-case status strings, and RFC 3339
//! timestamps, so the backing file stays usable as an interchange format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// A single tracked to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a fresh task. New tasks always start as `todo`, with both
    /// timestamps set to the same instant.
    pub fn new(id: u64, description: String) -> Self {
        let now = Utc::now();
        Task {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }
}
