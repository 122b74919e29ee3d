//! Period progress aggregation.
//!
//! Derives a habit's completion rate and a dense day-by-day series for the
//! week, month or year containing a reference day. Like the streak math,
//! everything here is a batch recomputation over the full check-in set --
//! deterministic, re-derivable, and safe to throw away.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;
use crate::model::{CheckIn, Frequency, Habit};
use crate::streak::calculate_streak;

/// Reporting period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(ConfigError::UnknownPeriod(other.to_string())),
        }
    }
}

/// One day of the dense progress series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub completed: bool,
    pub value: f64,
}

/// Transient progress view for one habit and period. Not persisted;
/// re-derivable at any time from the same inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressData {
    pub habit_id: Uuid,
    pub period: Period,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Completed check-ins inside the period.
    pub completed: u32,
    /// Expected occurrences per the habit's cadence.
    pub expected: u32,
    /// Rounded percentage, 0 when nothing is expected, capped at 100.
    pub completion_rate: u8,
    /// One entry per calendar day of the period, in order.
    pub daily_data: Vec<DailyEntry>,
}

/// Inclusive calendar bounds of the period containing `today`.
///
/// Weeks are ISO weeks (Monday through Sunday); months and years are
/// calendar months and years.
pub fn period_bounds(period: Period, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        Period::Week => {
            let start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
            (start, start + Duration::days(6))
        }
        Period::Month => {
            let start = today.with_day(1).unwrap_or(today);
            (start, Frequency::Monthly.increment_day(start) - Duration::days(1))
        }
        Period::Year => {
            let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            let end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
            (start, end)
        }
    }
}

/// Aggregate a habit's progress over the period containing `today`.
pub fn calculate_progress(
    habit: &Habit,
    check_ins: &[CheckIn],
    period: Period,
    today: NaiveDate,
) -> ProgressData {
    let (start_date, end_date) = period_bounds(period, today);
    let expected = habit.frequency.expected_occurrences(start_date, end_date);

    let completed = check_ins
        .iter()
        .filter(|ci| ci.completed && ci.date >= start_date && ci.date <= end_date)
        .count() as u32;

    let daily_data: Vec<DailyEntry> = start_date
        .iter_days()
        .take_while(|d| *d <= end_date)
        .map(|date| {
            let entry = check_ins.iter().find(|ci| ci.date == date);
            DailyEntry {
                date,
                completed: entry.is_some_and(|ci| ci.completed),
                value: entry.map_or(0.0, |ci| ci.value),
            }
        })
        .collect();

    ProgressData {
        habit_id: habit.id,
        period,
        start_date,
        end_date,
        completed,
        expected,
        completion_rate: rate(completed, expected),
        daily_data,
    }
}

/// Lifetime completion rate across the whole history: completed check-ins
/// over all check-ins, rounded. Empty history yields 0.
pub fn lifetime_completion_rate(check_ins: &[CheckIn]) -> u8 {
    let completed = check_ins.iter().filter(|ci| ci.completed).count() as u32;
    rate(completed, check_ins.len() as u32)
}

fn rate(completed: u32, expected: u32) -> u8 {
    if expected == 0 {
        return 0;
    }
    let pct = (f64::from(completed) / f64::from(expected) * 100.0).round();
    pct.min(100.0) as u8
}

/// Cross-habit dashboard aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_habits: usize,
    /// Habits not archived.
    pub active_habits: usize,
    /// Sum of current streaks across all habits.
    pub total_streaks: u32,
    /// Lifetime completion rate across every check-in.
    pub completion_rate: u8,
    /// Most recent check-ins, newest first.
    pub recent_check_ins: Vec<CheckIn>,
}

const RECENT_CHECK_INS: usize = 5;

/// Aggregate the dashboard view over every habit and check-in.
pub fn dashboard_stats(habits: &[Habit], check_ins: &[CheckIn], today: NaiveDate) -> DashboardStats {
    let total_streaks = habits
        .iter()
        .map(|h| {
            let own: Vec<CheckIn> = check_ins
                .iter()
                .filter(|ci| ci.habit_id == h.id)
                .cloned()
                .collect();
            calculate_streak(h.id, &own, today).current_streak
        })
        .sum();

    let mut recent: Vec<CheckIn> = check_ins.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_CHECK_INS);

    DashboardStats {
        total_habits: habits.len(),
        active_habits: habits.iter().filter(|h| !h.archived).count(),
        total_streaks,
        completion_rate: lifetime_completion_rate(check_ins),
        recent_check_ins: recent,
    }
}
