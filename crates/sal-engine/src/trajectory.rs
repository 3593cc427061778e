//! Growth trajectory - the composite 0-100 growth score.
//!
//! Blends goal completion, arena ratings and the inverted gravity score.
//! Gravity is inverted because lower liability is better.

use crate::arenas::LifeArena;
use crate::goals::GrowthGoal;
use serde::{Deserialize, Serialize};

/// Weight of the arena-score component.
pub const ARENA_WEIGHT: f64 = 0.4;
/// Weight of the goal-completion component.
pub const GOAL_WEIGHT: f64 = 0.3;
/// Weight of the inverted gravity component.
pub const GRAVITY_WEIGHT: f64 = 0.3;

/// Composite growth score with its components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthTrajectory {
    /// Weighted composite, 0-100.
    pub trajectory: u8,
    /// Liability index carried through for display, 0-100.
    pub gravity_score: u8,
    /// Completed goals over all goals, 0-100.
    pub goal_completion: u8,
    /// Average arena rating projected onto 0-100.
    pub arena_score: u8,
}

/// Combine goals, arena ratings and the gravity score into one trajectory.
pub fn growth_trajectory(
    goals: &[GrowthGoal],
    arenas: &[LifeArena],
    gravity_score: u8,
) -> GrowthTrajectory {
    let completed = goals.iter().filter(|g| g.is_completed()).count() as f64;
    let goal_completion = (completed / goals.len().max(1) as f64 * 100.0).clamp(0.0, 100.0);

    let arena_score = if arenas.is_empty() {
        0.0
    } else {
        let average = arenas
            .iter()
            .map(|a| f64::from(a.clamped_score()))
            .sum::<f64>()
            / arenas.len() as f64;
        (average / 10.0 * 100.0).clamp(0.0, 100.0)
    };

    let gravity = f64::from(gravity_score.min(100));
    let raw = arena_score * ARENA_WEIGHT
        + goal_completion * GOAL_WEIGHT
        + (100.0 - gravity) * GRAVITY_WEIGHT;

    GrowthTrajectory {
        trajectory: raw.round().clamp(0.0, 100.0) as u8,
        gravity_score: gravity_score.min(100),
        goal_completion: goal_completion.round() as u8,
        arena_score: arena_score.round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::GoalStatus;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn goal(status: GoalStatus) -> GrowthGoal {
        GrowthGoal {
            id: Uuid::new_v4(),
            title: "Daily walk".to_string(),
            progress: 0,
            status,
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn arena(score: u8) -> LifeArena {
        LifeArena {
            id: Uuid::new_v4(),
            name: "health".to_string(),
            score,
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_worked_example() {
        // 1 of 2 goals complete, arena average 6/10, gravity 80:
        // 60*0.4 + 50*0.3 + 20*0.3 = 45
        let goals = vec![goal(GoalStatus::Completed), goal(GoalStatus::Active)];
        let arenas = vec![arena(6)];
        let result = growth_trajectory(&goals, &arenas, 80);
        assert_eq!(result.goal_completion, 50);
        assert_eq!(result.arena_score, 60);
        assert_eq!(result.gravity_score, 80);
        assert_eq!(result.trajectory, 45);
    }

    #[test]
    fn test_empty_inputs_stay_in_bounds() {
        let result = growth_trajectory(&[], &[], 0);
        assert_eq!(result.goal_completion, 0);
        assert_eq!(result.arena_score, 0);
        assert_eq!(result.trajectory, 30); // only the inverted-gravity term
    }

    #[test]
    fn test_perfect_inputs_cap_at_100() {
        let goals = vec![goal(GoalStatus::Completed)];
        let arenas = vec![arena(10)];
        let result = growth_trajectory(&goals, &arenas, 0);
        assert_eq!(result.trajectory, 100);
    }

    #[test]
    fn test_gravity_above_scale_clamped() {
        let result = growth_trajectory(&[], &[], 200);
        assert_eq!(result.gravity_score, 100);
        assert_eq!(result.trajectory, 0);
    }
}
