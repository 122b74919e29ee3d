//! Streak derivation from a habit's check-in history.
//!
//! Streaks are always recomputed in full from the check-in set. A persisted
//! [`Streak`] record is a cache of the latest computed value -- any check-in
//! mutation invalidates it and the caller runs this module again.
//!
//! The current streak walks backward from `today` with a one-day grace
//! window: a day counts if a completed check-in exists on it or on the day
//! before, so a habit last checked in yesterday still holds its streak. A
//! gap of two or more days before `today` breaks it.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::model::{CheckIn, Streak};

/// Recompute the streak facts for one habit.
///
/// `today` is the caller-supplied current calendar day; the function is a
/// pure map of `(check_ins, today)` and calling it twice with identical
/// inputs yields identical output.
pub fn calculate_streak(habit_id: Uuid, check_ins: &[CheckIn], today: NaiveDate) -> Streak {
    let mut completed_days: Vec<NaiveDate> = check_ins
        .iter()
        .filter(|ci| ci.completed)
        .map(|ci| ci.date)
        .collect();
    completed_days.sort_unstable();
    completed_days.dedup();

    let Some(&last) = completed_days.last() else {
        return Streak::empty(habit_id);
    };

    let mut current_streak: u32 = 0;
    // A most recent completion more than 1 day back breaks the streak
    // outright; otherwise walk back one expected day per step, accepting a
    // completion on the expected day or the day before it.
    if (today - last).num_days() <= 1 {
        for &day in completed_days.iter().rev() {
            let expected = today - Duration::days(i64::from(current_streak));
            if day == expected || day == expected - Duration::days(1) {
                current_streak += 1;
            } else {
                break;
            }
        }
    }

    let mut longest_streak: u32 = 1;
    let mut run: u32 = 1;
    for pair in completed_days.windows(2) {
        if (pair[1] - pair[0]).num_days() <= 1 {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 1;
        }
    }
    // The grace window can credit the current streak with more steps than
    // any literal consecutive run contains; the longest streak is floored
    // at the current one so `longest >= current` always holds.
    longest_streak = longest_streak.max(current_streak);

    Streak {
        habit_id,
        current_streak,
        longest_streak,
        last_check_in_date: Some(last),
    }
}
