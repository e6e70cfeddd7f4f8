//! Task records supplied by the caller.
//!
//! The core treats tasks as read-only input: only `status` ever changes over
//! a task's lifetime, and that mutation belongs to the surrounding CRUD
//! layer, not to the planner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Task completion status. Only `todo` tasks participate in classification
/// and scheduling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Pending task, eligible for scheduling
    Todo,
    /// Completed task, ignored by the planner
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

/// A to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, assigned at creation
    #[serde(default = "new_task_id")]
    pub id: String,
    /// Task title
    pub title: String,
    /// Estimated duration in minutes
    pub duration_min: u32,
    /// Importance rating, 1 (lowest) to 5 (highest)
    pub importance: u8,
    /// Optional due date (no time component)
    #[serde(default)]
    pub due: Option<NaiveDate>,
    /// Completion status
    #[serde(default)]
    pub status: TaskStatus,
}

fn new_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Task {
    /// Create a new pending task with a fresh id and no due date.
    pub fn new(title: impl Into<String>, duration_min: u32, importance: u8) -> Self {
        Task {
            id: new_task_id(),
            title: title.into(),
            duration_min,
            importance,
            due: None,
            status: TaskStatus::Todo,
        }
    }

    /// Set the due date.
    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    /// Check that the record is well formed.
    ///
    /// The planner assumes validated input; callers run this before handing
    /// tasks to the core.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is blank, the duration is zero, or the
    /// importance is outside 1..=5.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "title".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if self.duration_min == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_min".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(1..=5).contains(&self.importance) {
            return Err(ValidationError::InvalidValue {
                field: "importance".to_string(),
                message: format!("must be in 1..=5, got {}", self.importance),
            });
        }
        Ok(())
    }
}
