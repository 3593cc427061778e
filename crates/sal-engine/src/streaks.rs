//! Streak calculation over day-granularity activity dates.
//!
//! All comparison happens on calendar days, never raw timestamps. A streak
//! survives a missing "today" (it is not broken until a full day with zero
//! activity has elapsed) and collapses to 0 after that.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Streak statistics derived from activity dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    /// Distinct calendar days with at least one activity.
    pub days_active: u32,
    /// Consecutive active days ending at today or yesterday.
    pub current_streak: u32,
    /// Longest consecutive run anywhere in the history.
    pub best_streak: u32,
}

/// Compute streak statistics from a set of activity dates.
///
/// `today` is injected by the caller; the function never reads the clock.
pub fn compute_streaks(dates: &[NaiveDate], today: NaiveDate) -> StreakStats {
    if dates.is_empty() {
        return StreakStats::default();
    }

    let mut days: Vec<i32> = dates.iter().map(|d| d.num_days_from_ce()).collect();
    days.sort_unstable();
    days.dedup();

    let days_active = days.len() as u32;

    let mut best_streak = 1u32;
    let mut run = 1u32;
    for window in days.windows(2) {
        if window[1] == window[0] + 1 {
            run += 1;
            best_streak = best_streak.max(run);
        } else {
            run = 1;
        }
    }

    // The streak is current while its last day is today or yesterday.
    let today_num = today.num_days_from_ce();
    let last_day = *days.last().unwrap_or(&0);
    let current_streak = if last_day == today_num || last_day == today_num - 1 {
        let mut current = 1u32;
        for i in (0..days.len().saturating_sub(1)).rev() {
            if days[i] + 1 == days[i + 1] {
                current += 1;
            } else {
                break;
            }
        }
        current
    } else {
        0
    };

    StreakStats {
        days_active,
        current_streak,
        best_streak,
    }
}
