//! Progress & growth aggregation engine for the SAL personal-development
//! tracker.
//!
//! The engine owns no domain data. It reads immutable snapshots from the
//! six domain services (journal, reading, tasks, vocabulary, life arenas,
//! gravity/goals), folds them into a unified [`JourneyProgress`] view,
//! evaluates the achievement registry, scores gravity and growth
//! trajectory, recommends a rung on the 9-level ladder and schedules
//! vocabulary reviews. Everything it produces is derived and disposable;
//! nothing is persisted here.

pub mod achievements;
pub mod aggregator;
pub mod arenas;
pub mod books;
pub mod config;
pub mod error;
pub mod goals;
pub mod gravity;
pub mod journal;
pub mod levels;
pub mod progress;
pub mod providers;
pub mod spaced_repetition;
pub mod streaks;
pub mod tasks;
pub mod trajectory;
pub mod vocabulary;

pub use achievements::{evaluate_achievements, newly_earned, Achievement, AchievementCategory};
pub use aggregator::Aggregator;
pub use arenas::{LifeArena, LifeArenasProgress};
pub use books::{Book, BooksProgress};
pub use config::{AchievementThresholds, CompletionWeights, EngineConfig};
pub use error::{EngineError, SnapshotError};
pub use goals::{GoalStatus, GrowthGoal};
pub use gravity::{gravity_score, GravityItem, GravityStatus};
pub use journal::{JournalEntry, JournalProgress};
pub use levels::{
    default_ladder, recommend_for_progress, recommend_level, validate_ladder, ExistentialLevel,
    LevelCriteria,
};
pub use progress::JourneyProgress;
pub use providers::{
    ArenaSource, DomainSnapshots, GravitySource, JournalSource, ReadingSource, SnapshotSources,
    StaticSources, TaskSource, VocabularySource,
};
pub use spaced_repetition::ReviewScheduler;
pub use streaks::{compute_streaks, StreakStats};
pub use tasks::{Task, TaskStatus, TasksProgress};
pub use trajectory::{growth_trajectory, GrowthTrajectory};
pub use vocabulary::{MasteryLevel, VocabularyProgress, VocabularyWord};
