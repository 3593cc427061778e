//! Gravity items - self-identified limiting behaviors - and their scorer.
//!
//! The gravity score is a liability index: 0 means nothing is holding the
//! user down, 100 means every active item sits at maximum severity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resolution state of a gravity item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityStatus {
    #[default]
    Active,
    Improving,
    Resolved,
}

/// A limiting behavior or belief, owned by the gravity service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravityItem {
    pub id: Uuid,
    pub category_id: Uuid,
    /// Severity rating 1-5.
    #[serde(default)]
    pub severity: u8,
    #[serde(default)]
    pub status: GravityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maximum severity rating for a single item.
pub const MAX_SEVERITY: u8 = 5;

/// Reduce active gravity items to a 0-100 liability score.
///
/// Only `Active` items count; improving and resolved items no longer weigh.
/// No active items means a score of 0.
pub fn gravity_score(items: &[GravityItem]) -> u8 {
    let active: Vec<&GravityItem> = items
        .iter()
        .filter(|i| i.status == GravityStatus::Active)
        .collect();
    if active.is_empty() {
        return 0;
    }

    let total: u32 = active
        .iter()
        .map(|i| u32::from(i.severity.clamp(1, MAX_SEVERITY)))
        .sum();
    let ceiling = active.len() as f64 * f64::from(MAX_SEVERITY);

    (f64::from(total) / ceiling * 100.0).round() as u8
}
