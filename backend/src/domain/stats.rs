//! Goal statistics.
//!
//! Pure, single-pass computations over a goal's date range and completion
//! set, against a caller-supplied reference "today". Nothing here touches
//! storage or the clock, which keeps every rule directly testable.
//!
//! ## Rules
//!
//! - `total_days` counts the full inclusive range, regardless of today.
//! - `completed_days` counts every recorded completion, even ones outside
//!   the current range (edits that narrow the range keep history).
//! - `missed_days` compares completions against the days elapsed so far,
//!   clamped at the end date and never negative.
//! - `streak` is a contiguous backward scan from today; the first missing
//!   day ends it. There is no skip-one-day leniency.

use chrono::NaiveDate;
use shared::{GoalProgress, GoalStats};

use crate::domain::dates::{add_days, date_key, days_between_inclusive};
use crate::domain::models::Goal;

/// Compute the full statistics block for a goal.
///
/// Assumes `goal.start_date <= goal.end_date`; the range is validated before
/// a goal ever reaches this function.
pub fn compute_stats(goal: &Goal, today: NaiveDate) -> GoalStats {
    let total_days = days_between_inclusive(goal.start_date, goal.end_date);
    let completed_days = goal.completed_dates.len() as i64;

    // Days that should have been completed by now: start through today,
    // capped at the end date. Nothing is expected before the goal starts.
    let last_counted_day = today.min(goal.end_date);
    let expected_completions = if today < goal.start_date {
        0
    } else {
        days_between_inclusive(goal.start_date, last_counted_day)
    };

    let missed_days = (expected_completions - completed_days).max(0);

    let days_left = (goal.end_date - today).num_days().max(0);

    GoalStats {
        completed_days: completed_days as u32,
        total_days: total_days as u32,
        missed_days: missed_days as u32,
        streak: current_streak(goal, today),
        days_left: days_left as u32,
    }
}

/// Count consecutive completed days ending at `today`.
///
/// Walks backward one day at a time and stops at the first day whose key is
/// not in the completion set. A today that is not yet completed means a
/// streak of zero, even if yesterday was.
pub fn current_streak(goal: &Goal, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while goal.completed_dates.contains(&date_key(day)) {
        streak += 1;
        day = add_days(day, -1);
    }
    streak
}

/// Dashboard progress summary: completion percentage over the whole range
/// and whether the goal is currently active.
pub fn compute_progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
    let total_days = days_between_inclusive(goal.start_date, goal.end_date);
    let completed_days = goal.completed_dates.len() as i64;
    let progress_percentage =
        ((completed_days as f64 / total_days as f64) * 100.0).round() as u32;

    GoalProgress {
        total_days: total_days as u32,
        completed_days: completed_days as u32,
        progress_percentage,
        is_active: today >= goal.start_date && today <= goal.end_date,
    }
}
