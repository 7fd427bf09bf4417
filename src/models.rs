//! Frontend Models
//!
//! Data structures matching the todo API wire format.

use serde::{Deserialize, Serialize};

/// Id carried by todos that have not been persisted yet.
/// The server assigns the real id when the create request resolves.
pub const UNSAVED_ID: u32 = 0;

/// Todo record (matches the API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub task: String,
    #[serde(rename = "isDone")]
    pub is_done: bool,
}

impl Todo {
    /// A not-yet-persisted todo, as sent in create requests.
    pub fn new_task(task: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            task: task.into(),
            is_done: false,
        }
    }
}
