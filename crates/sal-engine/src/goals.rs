//! Growth goal records, owned by the gravity/goals service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a growth goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Paused,
    Abandoned,
}

/// A self-set growth goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthGoal {
    pub id: Uuid,
    pub title: String,
    /// Self-reported progress 0-100.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub status: GoalStatus,
    pub updated_at: DateTime<Utc>,
}

impl GrowthGoal {
    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }
}
