//! Journal domain records and their progress fold.

use crate::progress::pct;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single journal entry, owned by the journal service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// Word count of the entry body.
    #[serde(default)]
    pub words: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// Derived journal counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalProgress {
    pub entries_count: u32,
    pub total_words: u64,
    /// Derived page count (words / words-per-page, rounded up).
    pub pages: u32,
    /// Entries against the configured entry goal, 0-100.
    pub completion_pct: f64,
    pub first_entry_date: Option<DateTime<Utc>>,
    pub last_entry_date: Option<DateTime<Utc>>,
}

/// Fold a journal snapshot into its progress counters.
///
/// An empty snapshot yields the zero-valued progress.
pub fn journal_progress(
    entries: &[JournalEntry],
    entry_goal: u32,
    words_per_page: u32,
) -> JournalProgress {
    let entries_count = entries.len() as u32;
    let total_words: u64 = entries.iter().map(|e| u64::from(e.words)).sum();
    let pages = total_words.div_ceil(u64::from(words_per_page.max(1))) as u32;

    JournalProgress {
        entries_count,
        total_words,
        pages,
        completion_pct: pct(
            u64::from(entries_count.min(entry_goal)),
            u64::from(entry_goal.max(1)),
        ),
        first_entry_date: entries.iter().map(|e| e.date).min(),
        last_entry_date: entries.iter().map(|e| e.date).max(),
    }
}
