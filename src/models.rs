//! Task Model
//!
//! The single entity of the application: one to-do record.

use serde::{Deserialize, Serialize};

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the current list (best-effort, see `TaskStore::add`)
    pub id: u32,
    /// Task text, non-empty at creation
    pub title: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}
