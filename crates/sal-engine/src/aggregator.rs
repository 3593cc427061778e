//! The aggregator - folds every domain snapshot into one JourneyProgress.
//!
//! Pure over its inputs: "now" is a parameter, never read from the clock,
//! and nothing here mutates domain records.

use crate::arenas::arenas_progress;
use crate::books::books_progress;
use crate::config::EngineConfig;
use crate::journal::journal_progress;
use crate::progress::JourneyProgress;
use crate::providers::{DomainSnapshots, SnapshotSources};
use crate::streaks::compute_streaks;
use crate::tasks::tasks_progress;
use crate::vocabulary::vocabulary_progress;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

/// Snapshot-to-progress aggregation engine.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: EngineConfig,
}

impl Aggregator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fold domain snapshots into the unified progress view.
    ///
    /// Empty snapshots yield zero-valued sub-progress; nothing errors on
    /// data shape.
    pub fn aggregate(&self, snapshots: &DomainSnapshots, now: DateTime<Utc>) -> JourneyProgress {
        let books = books_progress(&snapshots.books);
        let journal = journal_progress(
            &snapshots.journal,
            self.config.journal_entry_goal,
            self.config.words_per_page,
        );
        let tasks = tasks_progress(&snapshots.tasks);
        let vocabulary = vocabulary_progress(&snapshots.words);
        let life_arenas = arenas_progress(&snapshots.arenas);

        let activity = activity_timestamps(snapshots);
        let activity_days: Vec<NaiveDate> = activity.iter().map(|ts| ts.date_naive()).collect();
        let streaks = compute_streaks(&activity_days, now.date_naive());

        let weights = &self.config.weights;
        let blended = (weights.books * books.completion_pct
            + weights.journal * journal.completion_pct
            + weights.tasks * tasks.completion_pct
            + weights.vocabulary * vocabulary.completion_pct
            + weights.arenas * life_arenas.completion_pct)
            / (100.0 * weights.total());

        let progress = JourneyProgress {
            overall_completion: blended.clamp(0.0, 1.0),
            start_date: activity.iter().min().copied(),
            days_active: streaks.days_active,
            current_streak: streaks.current_streak,
            best_streak: streaks.best_streak,
            last_activity_date: activity.iter().max().copied(),
            books,
            journal,
            tasks,
            vocabulary,
            life_arenas,
        };

        debug!(
            overall = progress.overall_completion,
            days_active = progress.days_active,
            current_streak = progress.current_streak,
            "aggregated journey progress"
        );
        progress
    }

    /// Fetch all six domains concurrently, then aggregate.
    pub async fn aggregate_from_sources(
        &self,
        sources: &SnapshotSources,
        now: DateTime<Utc>,
    ) -> JourneyProgress {
        let snapshots = sources.fetch_all().await;
        self.aggregate(&snapshots, now)
    }
}

/// Union of activity timestamps across domains: journal entry dates,
/// reading-session dates and task status-change dates.
fn activity_timestamps(snapshots: &DomainSnapshots) -> Vec<DateTime<Utc>> {
    let mut activity: Vec<DateTime<Utc>> = Vec::new();
    activity.extend(snapshots.journal.iter().map(|e| e.date));
    activity.extend(snapshots.books.iter().filter_map(|b| b.last_read));
    activity.extend(snapshots.tasks.iter().map(|t| t.updated_at));
    activity
}
