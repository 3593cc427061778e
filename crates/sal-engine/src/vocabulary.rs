//! Vocabulary domain records and their progress fold.

use crate::progress::pct;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Study classification for a vocabulary word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    #[default]
    New,
    Learning,
    Familiar,
    Mastered,
}

/// A studied vocabulary word, owned by the vocabulary service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyWord {
    pub id: Uuid,
    pub word: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub mastery_level: MasteryLevel,
    /// Derived by the review scheduler, carried for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
}

/// Derived vocabulary counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyProgress {
    pub words_total: u32,
    pub words_mastered: u32,
    /// Words somewhere between new and mastered.
    pub words_learning: u32,
    /// Mastered words over total words, 0-100.
    pub completion_pct: f64,
    pub last_review: Option<DateTime<Utc>>,
}

/// Fold a vocabulary snapshot into its progress counters.
pub fn vocabulary_progress(words: &[VocabularyWord]) -> VocabularyProgress {
    let words_total = words.len() as u32;
    let words_mastered = words
        .iter()
        .filter(|w| w.mastery_level == MasteryLevel::Mastered)
        .count() as u32;
    let words_learning = words
        .iter()
        .filter(|w| {
            matches!(
                w.mastery_level,
                MasteryLevel::Learning | MasteryLevel::Familiar
            )
        })
        .count() as u32;

    VocabularyProgress {
        words_total,
        words_mastered,
        words_learning,
        completion_pct: pct(u64::from(words_mastered), u64::from(words_total)),
        last_review: words.iter().filter_map(|w| w.last_reviewed).max(),
    }
}
