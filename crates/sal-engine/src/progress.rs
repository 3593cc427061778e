//! JourneyProgress - the unified cross-domain progress snapshot.
//!
//! Recomputed on every aggregation call, never persisted. Every percentage
//! field is kept in [0,100] and `overall_completion` in [0,1] regardless of
//! what the domain snapshots contain.

use crate::arenas::LifeArenasProgress;
use crate::books::BooksProgress;
use crate::journal::JournalProgress;
use crate::tasks::TasksProgress;
use crate::vocabulary::VocabularyProgress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unified progress across all tracked domains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JourneyProgress {
    /// Weighted blend of the five domain completion ratios, 0.0-1.0.
    pub overall_completion: f64,
    /// Earliest recorded activity across all domains.
    pub start_date: Option<DateTime<Utc>>,
    /// Distinct calendar days with at least one activity.
    pub days_active: u32,
    /// Consecutive active days ending at today or yesterday.
    pub current_streak: u32,
    /// Longest consecutive run of active days ever recorded.
    pub best_streak: u32,
    /// Most recent recorded activity across all domains.
    pub last_activity_date: Option<DateTime<Utc>>,
    pub books: BooksProgress,
    pub journal: JournalProgress,
    pub tasks: TasksProgress,
    pub vocabulary: VocabularyProgress,
    pub life_arenas: LifeArenasProgress,
}

/// Percentage of `part` in `whole`, clamped to [0,100]. Zero when `whole` is zero.
pub(crate) fn pct(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
    }
}
