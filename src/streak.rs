//! Consecutive-day streaks over a habit's completion history.

use crate::window::parse_day;
use chrono::{Duration, NaiveDate};

/// Streak ending today or yesterday.
///
/// A history whose latest entry is yesterday is seeded with 0, not 1: today
/// has no completion yet, so only the run of days before yesterday counts.
/// Duplicate entries neither extend nor break the run.
pub fn current_streak_at(today: NaiveDate, completion_dates: &[String]) -> u32 {
    let mut sorted: Vec<NaiveDate> = completion_dates
        .iter()
        .filter_map(|raw| parse_day(raw))
        .collect();
    sorted.sort_unstable();

    let Some(&latest) = sorted.last() else {
        return 0;
    };

    let yesterday = today - Duration::days(1);
    let mut streak = if latest == today {
        1
    } else if latest == yesterday {
        0
    } else {
        return 0;
    };

    for pair in sorted.windows(2).rev() {
        match (pair[1] - pair[0]).num_days() {
            0 => continue,
            1 => streak += 1,
            _ => break,
        }
    }

    streak
}

/// Longest run of consecutive distinct days anywhere in the history.
pub fn longest_streak(completion_dates: &[String]) -> u32 {
    let mut sorted: Vec<NaiveDate> = completion_dates
        .iter()
        .filter_map(|raw| parse_day(raw))
        .collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for date in sorted {
        run = match previous {
            Some(prev) if date - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(date);
    }
    best
}
