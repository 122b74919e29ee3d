//! Cadence calendar arithmetic.
//!
//! Two deliberately different notions of "how often" live here:
//!
//! - [`Frequency::increment`] steps by true calendar units and is what
//!   scheduling uses (next reminder occurrence).
//! - [`Frequency::expected_occurrences`] estimates how many occurrences fall
//!   in a day window using day-count division (30-day months, 365-day
//!   years) and is what progress aggregation uses.
//!
//! The two disagree near 28-31 day month boundaries; callers pick the one
//! matching their question. Month and year steps clamp to the last valid
//! day of the target month (Jan 31 + 1 month = Feb 28/29).

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};

use crate::model::Frequency;

impl Frequency {
    /// Advance a calendar day by one cadence unit.
    pub fn increment_day(self, date: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => date + Duration::days(1),
            Frequency::Weekly => date + Duration::days(7),
            Frequency::Monthly => add_months_clamped(date, 1),
            Frequency::Quarterly => add_months_clamped(date, 3),
            Frequency::Yearly => add_months_clamped(date, 12),
        }
    }

    /// Advance a timestamp by one cadence unit, preserving time of day.
    pub fn increment(self, at: NaiveDateTime) -> NaiveDateTime {
        self.increment_day(at.date()).and_time(at.time())
    }

    /// Estimate how many occurrences fall in the inclusive window
    /// `[start, end]` by day-count division. An inverted window yields 0.
    pub fn expected_occurrences(self, start: NaiveDate, end: NaiveDate) -> u32 {
        if end < start {
            return 0;
        }
        let days = (end - start).num_days() as u32 + 1;
        match self {
            Frequency::Daily => days,
            Frequency::Weekly => days.div_ceil(7),
            Frequency::Monthly => days.div_ceil(30),
            Frequency::Quarterly => days.div_ceil(90),
            Frequency::Yearly => days.div_ceil(365),
        }
    }
}

fn add_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    // Only fails past year 262143; fall back to the input rather than panic.
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_day;

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    #[test]
    fn daily_and_weekly_steps() {
        assert_eq!(Frequency::Daily.increment_day(day("2026-03-31")), day("2026-04-01"));
        assert_eq!(Frequency::Weekly.increment_day(day("2026-12-28")), day("2027-01-04"));
    }

    #[test]
    fn monthly_step_clamps_to_month_end() {
        assert_eq!(Frequency::Monthly.increment_day(day("2026-01-31")), day("2026-02-28"));
        assert_eq!(Frequency::Monthly.increment_day(day("2024-01-31")), day("2024-02-29"));
        assert_eq!(Frequency::Monthly.increment_day(day("2026-04-30")), day("2026-05-30"));
    }

    #[test]
    fn quarterly_step_follows_calendar_months() {
        assert_eq!(Frequency::Quarterly.increment_day(day("2026-10-31")), day("2027-01-31"));
        assert_eq!(Frequency::Quarterly.increment_day(day("2026-11-30")), day("2027-02-28"));
    }

    #[test]
    fn yearly_step_clamps_leap_day() {
        assert_eq!(Frequency::Yearly.increment_day(day("2024-02-29")), day("2025-02-28"));
        assert_eq!(Frequency::Yearly.increment_day(day("2026-07-04")), day("2027-07-04"));
    }

    #[test]
    fn increment_preserves_time_of_day() {
        let at = day("2026-03-05").and_hms_opt(9, 30, 0).unwrap();
        let next = Frequency::Monthly.increment(at);
        assert_eq!(next, day("2026-04-05").and_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn expected_daily_counts_whole_days() {
        assert_eq!(Frequency::Daily.expected_occurrences(day("2026-03-02"), day("2026-03-08")), 7);
        assert_eq!(Frequency::Daily.expected_occurrences(day("2026-03-02"), day("2026-03-02")), 1);
    }

    #[test]
    fn expected_weekly_over_one_week_is_one() {
        assert_eq!(Frequency::Weekly.expected_occurrences(day("2026-03-02"), day("2026-03-08")), 1);
        assert_eq!(Frequency::Weekly.expected_occurrences(day("2026-03-01"), day("2026-03-31")), 5);
    }

    // Day-count division diverges from calendar stepping at month
    // boundaries: a 28-day February expects 1 monthly occurrence, a 31-day
    // month expects 2, even though stepping lands exactly once in each.
    #[test]
    fn expected_monthly_diverges_from_calendar_stepping() {
        assert_eq!(
            Frequency::Monthly.expected_occurrences(day("2026-02-01"), day("2026-02-28")),
            1
        );
        assert_eq!(
            Frequency::Monthly.expected_occurrences(day("2026-04-01"), day("2026-04-30")),
            1
        );
        assert_eq!(
            Frequency::Monthly.expected_occurrences(day("2026-01-01"), day("2026-01-31")),
            2
        );
    }

    #[test]
    fn expected_quarterly_and_yearly() {
        assert_eq!(
            Frequency::Quarterly.expected_occurrences(day("2026-01-01"), day("2026-03-31")),
            1
        );
        assert_eq!(
            Frequency::Yearly.expected_occurrences(day("2026-01-01"), day("2026-12-31")),
            1
        );
    }

    #[test]
    fn inverted_window_yields_zero() {
        assert_eq!(Frequency::Daily.expected_occurrences(day("2026-03-08"), day("2026-03-02")), 0);
    }
}
