//! The existential level ladder - 9 fixed developmental milestones.
//!
//! Recommendation is a pure scan over declarative per-level criteria: every
//! rung is evaluated and the highest fully-satisfied rung wins. The ladder
//! is configuration; an ill-formed ladder is the engine's only fatal error.

use crate::error::EngineError;
use crate::progress::JourneyProgress;
use serde::{Deserialize, Serialize};

/// Threshold set a level requires. Absent criteria always pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCriteria {
    pub min_books: Option<u32>,
    pub min_journal_entries: Option<u32>,
    pub min_trajectory: Option<u8>,
    pub min_tasks: Option<u32>,
}

impl LevelCriteria {
    /// Whether every declared threshold is met.
    pub fn satisfied(
        &self,
        trajectory: u8,
        completed_books: u32,
        journal_entries: u32,
        completed_tasks: u32,
    ) -> bool {
        self.min_books.map_or(true, |m| completed_books >= m)
            && self
                .min_journal_entries
                .map_or(true, |m| journal_entries >= m)
            && self.min_trajectory.map_or(true, |m| trajectory >= m)
            && self.min_tasks.map_or(true, |m| completed_tasks >= m)
    }
}

/// One rung of the developmental ladder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExistentialLevel {
    /// Rung number, 1-9.
    pub level: u8,
    pub name: &'static str,
    pub criteria: LevelCriteria,
}

const fn rung(
    level: u8,
    name: &'static str,
    min_books: Option<u32>,
    min_journal_entries: Option<u32>,
    min_trajectory: Option<u8>,
    min_tasks: Option<u32>,
) -> ExistentialLevel {
    ExistentialLevel {
        level,
        name,
        criteria: LevelCriteria {
            min_books,
            min_journal_entries,
            min_trajectory,
            min_tasks,
        },
    }
}

/// The standard 9-rung ladder.
pub fn default_ladder() -> Vec<ExistentialLevel> {
    vec![
        rung(1, "Survival", None, None, None, None),
        rung(2, "Awakening", None, Some(1), Some(10), None),
        rung(3, "Discipline", None, Some(10), Some(20), Some(5)),
        rung(4, "Momentum", Some(1), Some(25), Some(30), Some(15)),
        rung(5, "Clarity", Some(3), Some(50), Some(45), Some(30)),
        rung(6, "Purpose", Some(5), Some(100), Some(60), Some(50)),
        rung(7, "Mastery", Some(8), Some(200), Some(70), Some(100)),
        rung(8, "Service", Some(12), Some(365), Some(80), Some(200)),
        rung(9, "Transcendence", Some(20), Some(500), Some(90), Some(365)),
    ]
}

/// Validate that a ladder is well-formed: rungs numbered 1..=n with no gaps.
pub fn validate_ladder(ladder: &[ExistentialLevel]) -> Result<(), EngineError> {
    if ladder.is_empty() {
        return Err(EngineError::InvalidLadder("ladder is empty".to_string()));
    }
    for (index, level) in ladder.iter().enumerate() {
        let expected = index as u8 + 1;
        if level.level != expected {
            return Err(EngineError::InvalidLadder(format!(
                "expected rung {} at position {}, found rung {}",
                expected, index, level.level
            )));
        }
    }
    Ok(())
}

/// Recommend the highest rung whose full threshold set is satisfied.
///
/// Every rung is evaluated; satisfying a higher rung does not require the
/// lower ones, so the scan keeps the maximum satisfied index. Defaults to 1.
pub fn recommend_level(
    ladder: &[ExistentialLevel],
    trajectory: u8,
    completed_books: u32,
    journal_entries: u32,
    completed_tasks: u32,
) -> u8 {
    ladder
        .iter()
        .filter(|l| {
            l.criteria
                .satisfied(trajectory, completed_books, journal_entries, completed_tasks)
        })
        .map(|l| l.level)
        .max()
        .unwrap_or(1)
}

/// Recommend a level from an aggregated progress view.
pub fn recommend_for_progress(
    ladder: &[ExistentialLevel],
    progress: &JourneyProgress,
    trajectory: u8,
) -> u8 {
    recommend_level(
        ladder,
        trajectory,
        progress.books.books_completed,
        progress.journal.entries_count,
        progress.tasks.tasks_completed,
    )
}
