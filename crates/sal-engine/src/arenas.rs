//! Life-arena domain records and their progress fold.
//!
//! Arenas are the self-rated areas of life (health, relationships, work,
//! and so on), scored 1-10 by the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A self-rated life arena, owned by the arenas service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeArena {
    pub id: Uuid,
    pub name: String,
    /// Self-rating 1-10.
    #[serde(default)]
    pub score: u8,
    pub updated_at: DateTime<Utc>,
}

impl LifeArena {
    /// Score clamped to the 1-10 rating scale.
    pub fn clamped_score(&self) -> u8 {
        self.score.clamp(1, 10)
    }
}

/// Derived arena counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifeArenasProgress {
    pub arenas_count: u32,
    /// Mean arena rating on the 1-10 scale.
    pub average_score: f64,
    /// Average score projected onto 0-100.
    pub completion_pct: f64,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Fold an arena snapshot into its progress counters.
pub fn arenas_progress(arenas: &[LifeArena]) -> LifeArenasProgress {
    if arenas.is_empty() {
        return LifeArenasProgress::default();
    }

    let average_score = arenas
        .iter()
        .map(|a| f64::from(a.clamped_score()))
        .sum::<f64>()
        / arenas.len() as f64;

    LifeArenasProgress {
        arenas_count: arenas.len() as u32,
        average_score,
        completion_pct: (average_score / 10.0 * 100.0).clamp(0.0, 100.0),
        last_updated: arenas.iter().map(|a| a.updated_at).max(),
    }
}
