//! Task domain records and their progress fold.

use crate::progress::pct;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

/// A structured task, owned by the task service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    /// Timestamp of the most recent status change.
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Derived task counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TasksProgress {
    pub tasks_total: u32,
    pub tasks_completed: u32,
    /// Completed tasks over total tasks, 0-100.
    pub completion_pct: f64,
    pub last_status_change: Option<DateTime<Utc>>,
}

/// Fold a task snapshot into its progress counters.
pub fn tasks_progress(tasks: &[Task]) -> TasksProgress {
    let tasks_total = tasks.len() as u32;
    let tasks_completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count() as u32;

    TasksProgress {
        tasks_total,
        tasks_completed,
        completion_pct: pct(u64::from(tasks_completed), u64::from(tasks_total)),
        last_status_change: tasks.iter().map(|t| t.updated_at).max(),
    }
}
