//! Spaced-repetition scheduling for vocabulary review.
//!
//! The interval is fixed per scheduler instance. Keeping it a field rather
//! than a constant is the extension point for per-word adaptive intervals;
//! the `due_words`/`mark_reviewed` contract does not change.

use crate::config::DEFAULT_REVIEW_INTERVAL_DAYS;
use crate::vocabulary::{MasteryLevel, VocabularyWord};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A review at this difficulty or below counts as easy.
pub const EASY_DIFFICULTY_MAX: u8 = 2;

/// Easy reviews required before a word can promote to mastered.
pub const MASTERY_REVIEW_FLOOR: u32 = 3;

/// Review scheduler with a fixed day interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewScheduler {
    pub interval_days: i64,
}

impl Default for ReviewScheduler {
    fn default() -> Self {
        Self {
            interval_days: DEFAULT_REVIEW_INTERVAL_DAYS,
        }
    }
}

impl ReviewScheduler {
    pub fn new(interval_days: i64) -> Self {
        Self { interval_days }
    }

    /// Whether a word is due for review at `as_of`.
    ///
    /// Due when at least `interval_days` whole days have elapsed since the
    /// last review (boundary inclusive). Never-reviewed words are always due.
    pub fn is_due(&self, word: &VocabularyWord, as_of: DateTime<Utc>) -> bool {
        match word.last_reviewed {
            None => true,
            Some(last) => (as_of - last).num_days() >= self.interval_days,
        }
    }

    /// The due and overdue subset of a vocabulary snapshot.
    pub fn due_words(
        &self,
        words: &[VocabularyWord],
        as_of: DateTime<Utc>,
    ) -> Vec<VocabularyWord> {
        words
            .iter()
            .filter(|w| self.is_due(w, as_of))
            .cloned()
            .collect()
    }

    /// Next review date derived from the last review.
    pub fn next_review(&self, word: &VocabularyWord) -> Option<DateTime<Utc>> {
        word.last_reviewed
            .map(|last| last + Duration::days(self.interval_days))
    }

    /// Record a review outcome on a word.
    ///
    /// Mastery promotes only on an easy review of an already-practiced word
    /// (at least `MASTERY_REVIEW_FLOOR` reviews before this one), and never
    /// demotes.
    pub fn mark_reviewed(&self, word: &mut VocabularyWord, difficulty: u8, now: DateTime<Utc>) {
        if difficulty <= EASY_DIFFICULTY_MAX && word.review_count >= MASTERY_REVIEW_FLOOR {
            word.mastery_level = MasteryLevel::Mastered;
        }
        word.review_count += 1;
        word.last_reviewed = Some(now);
        word.next_review = Some(now + Duration::days(self.interval_days));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn word(last_reviewed: Option<DateTime<Utc>>, review_count: u32) -> VocabularyWord {
        VocabularyWord {
            id: Uuid::new_v4(),
            word: "sonder".to_string(),
            definition: String::new(),
            last_reviewed,
            review_count,
            mastery_level: MasteryLevel::Learning,
            next_review: None,
        }
    }

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, day, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_due_boundary_inclusive() {
        let scheduler = ReviewScheduler::default();
        let reviewed = word(Some(ts(1)), 1);
        assert!(!scheduler.is_due(&reviewed, ts(7))); // 6 days elapsed
        assert!(scheduler.is_due(&reviewed, ts(8))); // exactly 7 days
    }

    #[test]
    fn test_never_reviewed_is_due() {
        let scheduler = ReviewScheduler::default();
        assert!(scheduler.is_due(&word(None, 0), ts(1)));
    }

    #[test]
    fn test_due_words_filters() {
        let scheduler = ReviewScheduler::default();
        let words = vec![word(Some(ts(1)), 1), word(Some(ts(10)), 1), word(None, 0)];
        let due = scheduler.due_words(&words, ts(12));
        assert_eq!(due.len(), 2);
    }

    #[test]
    fn test_mark_reviewed_updates_fields() {
        let scheduler = ReviewScheduler::default();
        let mut w = word(Some(ts(1)), 1);
        scheduler.mark_reviewed(&mut w, 3, ts(8));
        assert_eq!(w.review_count, 2);
        assert_eq!(w.last_reviewed, Some(ts(8)));
        assert_eq!(w.next_review, Some(ts(15)));
        assert_eq!(w.mastery_level, MasteryLevel::Learning);
    }

    #[test]
    fn test_mastery_requires_easy_and_practice() {
        let scheduler = ReviewScheduler::default();

        // Easy review but only 2 prior reviews: no promotion.
        let mut young = word(Some(ts(1)), 2);
        scheduler.mark_reviewed(&mut young, 1, ts(8));
        assert_eq!(young.mastery_level, MasteryLevel::Learning);

        // Hard review with enough practice: no promotion.
        let mut hard = word(Some(ts(1)), 5);
        scheduler.mark_reviewed(&mut hard, 4, ts(8));
        assert_eq!(hard.mastery_level, MasteryLevel::Learning);

        // Easy review with enough practice: promoted.
        let mut ready = word(Some(ts(1)), 3);
        scheduler.mark_reviewed(&mut ready, 2, ts(8));
        assert_eq!(ready.mastery_level, MasteryLevel::Mastered);
    }

    #[test]
    fn test_mastery_never_demotes() {
        let scheduler = ReviewScheduler::default();
        let mut w = word(Some(ts(1)), 10);
        w.mastery_level = MasteryLevel::Mastered;
        scheduler.mark_reviewed(&mut w, 5, ts(8));
        assert_eq!(w.mastery_level, MasteryLevel::Mastered);
    }

    #[test]
    fn test_custom_interval() {
        let scheduler = ReviewScheduler::new(3);
        let w = word(Some(ts(1)), 1);
        assert!(scheduler.is_due(&w, ts(4)));
        assert_eq!(scheduler.next_review(&w), Some(ts(4)));
    }
}
