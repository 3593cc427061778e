//! Engine configuration.
//!
//! Every threshold the derivation layer gates on lives here so the numbers
//! are testable and editable without touching orchestration code.

use serde::{Deserialize, Serialize};

/// Words per journal page when deriving page counts.
pub const DEFAULT_WORDS_PER_PAGE: u32 = 250;

/// Journal entries needed for the journal domain to read as complete.
pub const DEFAULT_JOURNAL_ENTRY_GOAL: u32 = 100;

/// Fixed spaced-repetition review interval.
pub const DEFAULT_REVIEW_INTERVAL_DAYS: i64 = 7;

/// Relative weight of each domain in the overall completion blend.
///
/// Weights are normalized by their sum at blend time, so a table that does
/// not add up to exactly 1.0 still produces a completion in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionWeights {
    pub books: f64,
    pub journal: f64,
    pub tasks: f64,
    pub vocabulary: f64,
    pub arenas: f64,
}

impl Default for CompletionWeights {
    fn default() -> Self {
        Self {
            books: 0.25,
            journal: 0.25,
            tasks: 0.20,
            vocabulary: 0.15,
            arenas: 0.15,
        }
    }
}

impl CompletionWeights {
    /// Sum of all weights, guarded against a zeroed table.
    pub fn total(&self) -> f64 {
        let total = self.books + self.journal + self.tasks + self.vocabulary + self.arenas;
        if total > 0.0 {
            total
        } else {
            1.0
        }
    }
}

/// Thresholds for the achievement rule registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementThresholds {
    /// Vocabulary words collected for the lexicon badge.
    pub vocabulary_words: u32,
    /// Mastered words for the mastery badge.
    pub mastered_words: u32,
    /// Completed books for the first-summit badge.
    pub completed_books: u32,
    /// Completed books for the bookshelf badge.
    pub bookshelf_books: u32,
    /// Streak length for the weekly streak badge.
    pub streak_days: u32,
    /// Streak length for the monthly streak badge.
    pub long_streak_days: u32,
    /// Completed tasks for the executor badge.
    pub completed_tasks: u32,
    /// Completed tasks for the marathon badge.
    pub task_marathon: u32,
    /// Journal pages for the chronicler badge.
    pub journal_pages: u32,
}

impl Default for AchievementThresholds {
    fn default() -> Self {
        Self {
            vocabulary_words: 100,
            mastered_words: 50,
            completed_books: 1,
            bookshelf_books: 5,
            streak_days: 7,
            long_streak_days: 30,
            completed_tasks: 10,
            task_marathon: 50,
            journal_pages: 50,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Domain weighting for the overall completion blend.
    pub weights: CompletionWeights,
    /// Journal entry count treated as 100% journal completion.
    pub journal_entry_goal: u32,
    /// Words per derived journal page.
    pub words_per_page: u32,
    /// Spaced-repetition review interval in days.
    pub review_interval_days: i64,
    /// Achievement rule thresholds.
    pub achievements: AchievementThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: CompletionWeights::default(),
            journal_entry_goal: DEFAULT_JOURNAL_ENTRY_GOAL,
            words_per_page: DEFAULT_WORDS_PER_PAGE,
            review_interval_days: DEFAULT_REVIEW_INTERVAL_DAYS,
            achievements: AchievementThresholds::default(),
        }
    }
}
