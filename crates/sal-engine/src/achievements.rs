//! Achievement badges over the aggregated journey progress.
//!
//! The registry is a declarative table of predicate rules; evaluation
//! re-derives the earned set from the current progress on every call, and
//! the engine keeps no unlock memory. `date_earned` is borrowed from the
//! matching domain's own timestamp. Badges use plain ASCII symbols.

use crate::config::AchievementThresholds;
use crate::progress::JourneyProgress;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Badge grouping by source domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Journal,
    Reading,
    Vocabulary,
    Tasks,
    Streak,
}

/// An earned achievement badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    /// Stable rule key.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// ASCII badge symbol (e.g. "[j1]", "<7d>").
    pub icon: &'static str,
    pub category: AchievementCategory,
    /// Borrowed from the matching domain's progress timestamp.
    pub date_earned: Option<DateTime<Utc>>,
}

/// A single declarative achievement rule.
pub struct AchievementRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    /// Whether the rule currently holds.
    pub earned: fn(&JourneyProgress, &AchievementThresholds) -> bool,
    /// Which domain timestamp dates the badge.
    pub earned_date: fn(&JourneyProgress) -> Option<DateTime<Utc>>,
}

fn journal_date(p: &JourneyProgress) -> Option<DateTime<Utc>> {
    p.journal.last_entry_date
}

fn reading_date(p: &JourneyProgress) -> Option<DateTime<Utc>> {
    p.books.last_read
}

fn vocabulary_date(p: &JourneyProgress) -> Option<DateTime<Utc>> {
    p.vocabulary.last_review
}

fn tasks_date(p: &JourneyProgress) -> Option<DateTime<Utc>> {
    p.tasks.last_status_change
}

fn activity_date(p: &JourneyProgress) -> Option<DateTime<Utc>> {
    p.last_activity_date
}

/// The full rule registry.
pub fn registry() -> Vec<AchievementRule> {
    vec![
        AchievementRule {
            id: "first_entry",
            title: "First Reflection",
            description: "Write your first journal entry",
            icon: "[j1]",
            category: AchievementCategory::Journal,
            earned: |p, _| p.journal.entries_count >= 1,
            earned_date: journal_date,
        },
        AchievementRule {
            id: "chronicler",
            title: "Chronicler",
            description: "Fill fifty pages of journal",
            icon: "[50p]",
            category: AchievementCategory::Journal,
            earned: |p, t| p.journal.pages >= t.journal_pages,
            earned_date: journal_date,
        },
        AchievementRule {
            id: "first_summit",
            title: "First Summit",
            description: "Finish your first book",
            icon: "[b1]",
            category: AchievementCategory::Reading,
            earned: |p, t| p.books.books_completed >= t.completed_books,
            earned_date: reading_date,
        },
        AchievementRule {
            id: "bookshelf",
            title: "Bookshelf",
            description: "Finish five books",
            icon: "[b5]",
            category: AchievementCategory::Reading,
            earned: |p, t| p.books.books_completed >= t.bookshelf_books,
            earned_date: reading_date,
        },
        AchievementRule {
            id: "lexicon_builder",
            title: "Lexicon Builder",
            description: "Collect one hundred vocabulary words",
            icon: "[100w]",
            category: AchievementCategory::Vocabulary,
            earned: |p, t| p.vocabulary.words_total >= t.vocabulary_words,
            earned_date: vocabulary_date,
        },
        AchievementRule {
            id: "word_master",
            title: "Word Master",
            description: "Master fifty words",
            icon: "[50m]",
            category: AchievementCategory::Vocabulary,
            earned: |p, t| p.vocabulary.words_mastered >= t.mastered_words,
            earned_date: vocabulary_date,
        },
        AchievementRule {
            id: "executor",
            title: "Executor",
            description: "Complete ten tasks",
            icon: "[t10]",
            category: AchievementCategory::Tasks,
            earned: |p, t| p.tasks.tasks_completed >= t.completed_tasks,
            earned_date: tasks_date,
        },
        AchievementRule {
            id: "task_marathon",
            title: "Task Marathon",
            description: "Complete fifty tasks",
            icon: "[t50]",
            category: AchievementCategory::Tasks,
            earned: |p, t| p.tasks.tasks_completed >= t.task_marathon,
            earned_date: tasks_date,
        },
        AchievementRule {
            id: "week_of_fire",
            title: "Week of Fire",
            description: "Keep a seven-day streak",
            icon: "<7d>",
            category: AchievementCategory::Streak,
            earned: |p, t| p.current_streak >= t.streak_days,
            earned_date: activity_date,
        },
        AchievementRule {
            id: "monthly_devotion",
            title: "Monthly Devotion",
            description: "Keep a thirty-day streak",
            icon: "<30d>",
            category: AchievementCategory::Streak,
            earned: |p, t| p.current_streak >= t.long_streak_days,
            earned_date: activity_date,
        },
    ]
}

/// Evaluate the full registry against a progress view.
///
/// Only currently-true rules produce achievements. Sorted newest first;
/// badges with no datable timestamp sort last.
pub fn evaluate_achievements(
    progress: &JourneyProgress,
    thresholds: &AchievementThresholds,
) -> Vec<Achievement> {
    let mut earned: Vec<Achievement> = registry()
        .into_iter()
        .filter(|rule| (rule.earned)(progress, thresholds))
        .map(|rule| Achievement {
            id: rule.id,
            title: rule.title,
            description: rule.description,
            icon: rule.icon,
            category: rule.category,
            date_earned: (rule.earned_date)(progress),
        })
        .collect();

    // Option<DateTime> orders None first, so a descending sort puts undated
    // badges (treated as earliest) at the end.
    earned.sort_by(|a, b| b.date_earned.cmp(&a.date_earned));
    earned
}

/// Badges present in `current` but not in `previous`, for notifications.
pub fn newly_earned<'a>(
    previous: &[Achievement],
    current: &'a [Achievement],
) -> Vec<&'a Achievement> {
    current
        .iter()
        .filter(|a| !previous.iter().any(|p| p.id == a.id))
        .collect()
}
