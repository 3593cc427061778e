//! Reading domain records and their progress fold.
//!
//! Books are structured into sections (the reading modules); section
//! completion drives the domain ratio.

use crate::progress::pct;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked book, owned by the reading service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub sections_total: u32,
    #[serde(default)]
    pub sections_completed: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_read: Option<DateTime<Utc>>,
}

impl Book {
    /// A book counts as completed when flagged, or when every section is done.
    pub fn is_completed(&self) -> bool {
        self.completed || (self.sections_total > 0 && self.sections_completed >= self.sections_total)
    }
}

/// Derived reading counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooksProgress {
    pub books_total: u32,
    pub books_completed: u32,
    pub sections_total: u32,
    pub sections_completed: u32,
    /// Completed sections over total sections, 0-100.
    pub completion_pct: f64,
    pub last_read: Option<DateTime<Utc>>,
}

/// Fold a reading snapshot into its progress counters.
pub fn books_progress(books: &[Book]) -> BooksProgress {
    let sections_total: u32 = books.iter().map(|b| b.sections_total).sum();
    // Per-book clamp so a malformed record cannot push the ratio past 100%.
    let sections_completed: u32 = books
        .iter()
        .map(|b| b.sections_completed.min(b.sections_total))
        .sum();

    BooksProgress {
        books_total: books.len() as u32,
        books_completed: books.iter().filter(|b| b.is_completed()).count() as u32,
        sections_total,
        sections_completed,
        completion_pct: pct(u64::from(sections_completed), u64::from(sections_total)),
        last_read: books.iter().filter_map(|b| b.last_read).max(),
    }
}
