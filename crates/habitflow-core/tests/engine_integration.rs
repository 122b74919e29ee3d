//! Integration tests for the full recompute cycle.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use habitflow_core::model::{parse_day, parse_time, parse_timestamp};
use habitflow_core::{
    calculate_progress, calculate_streak, dashboard_stats, due_reminders, recompute, templates,
    CheckIn, Frequency, Habit, Period, Reminder, TargetType, UnlockLog,
};

fn day(s: &str) -> NaiveDate {
    parse_day(s).unwrap()
}

fn at(s: &str) -> NaiveDateTime {
    parse_timestamp(s).unwrap()
}

/// A habit is created from a template, checked in daily for ten days, and
/// every derived fact falls out of one recompute per mutation.
#[test]
fn test_checkin_stream_drives_streaks_and_badges() {
    let template = templates::find("template-meditate").unwrap();
    let habit = template.instantiate(at("2026-03-01T08:00:00")).unwrap();
    assert_eq!(habit.target_type, TargetType::Minutes);

    let mut check_ins: Vec<CheckIn> = Vec::new();
    let mut log = UnlockLog::new();
    let mut unlock_days: Vec<(String, NaiveDate)> = Vec::new();

    for offset in 0..10 {
        let date = day("2026-03-01") + Duration::days(offset);
        check_ins.push(CheckIn::record(&habit, date, 10.0, None).unwrap());

        // The caller's cycle: re-read history, recompute, persist results.
        let now = date.and_hms_opt(21, 0, 0).unwrap();
        let out = recompute(&habit, &check_ins, &log, date, now);
        for badge in &out.newly_unlocked {
            assert!(log.record(&badge.id, now));
            unlock_days.push((badge.id.clone(), date));
        }
    }

    // streak-7 on the seventh day, checkin-10 on the tenth, each exactly once.
    assert_eq!(
        unlock_days,
        vec![
            ("streak-7".to_string(), day("2026-03-07")),
            ("checkin-10".to_string(), day("2026-03-10")),
        ]
    );

    let streak = calculate_streak(habit.id, &check_ins, day("2026-03-10"));
    assert_eq!(streak.current_streak, 10);
    assert_eq!(streak.longest_streak, 10);
    assert_eq!(streak.last_check_in_date, Some(day("2026-03-10")));
}

/// Deleting a check-in invalidates the cached streak; a fresh recompute
/// over the remaining history is the source of truth.
#[test]
fn test_recompute_after_deletion_shrinks_the_streak() {
    let habit = Habit::new(
        "Journal",
        Frequency::Daily,
        TargetType::Boolean,
        1,
        at("2026-03-01T08:00:00"),
    )
    .unwrap();

    let mut check_ins: Vec<CheckIn> = (0..5)
        .map(|i| {
            CheckIn::record(&habit, day("2026-03-02") + Duration::days(i), 1.0, None).unwrap()
        })
        .collect();

    let today = day("2026-03-06");
    assert_eq!(calculate_streak(habit.id, &check_ins, today).current_streak, 5);

    // Remove the 2026-03-04 entry; the grace window bridges one missing
    // day, so the walk still reaches the older entries.
    check_ins.retain(|ci| ci.date != day("2026-03-04"));
    let streak = calculate_streak(habit.id, &check_ins, today);
    assert_eq!(streak.current_streak, 4);

    // Remove two adjacent days and the chain truly breaks.
    check_ins.retain(|ci| ci.date != day("2026-03-03"));
    let streak = calculate_streak(habit.id, &check_ins, today);
    assert_eq!(streak.current_streak, 2);
    assert_eq!(streak.longest_streak, 2);
}

/// The weekly progress scenario: one completed check-in inside a Mon-Sun
/// window fully satisfies a weekly habit.
#[test]
fn test_weekly_progress_scenario() {
    let habit = Habit::new(
        "Call parents",
        Frequency::Weekly,
        TargetType::Boolean,
        1,
        at("2026-03-01T08:00:00"),
    )
    .unwrap();
    let check_ins = vec![CheckIn::record(&habit, day("2026-03-11"), 1.0, None).unwrap()];

    let progress = calculate_progress(&habit, &check_ins, Period::Week, day("2026-03-12"));
    assert_eq!((progress.start_date, progress.end_date), (day("2026-03-09"), day("2026-03-15")));
    assert_eq!(progress.expected, 1);
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.completion_rate, 100);
    assert_eq!(progress.daily_data.len(), 7);
}

/// Reminder lifecycle across a day: enable after the hour, come due the
/// next morning, snooze, acknowledge.
#[test]
fn test_reminder_lifecycle() {
    let habit = Habit::new(
        "Stretch",
        Frequency::Daily,
        TargetType::Boolean,
        1,
        at("2026-03-01T08:00:00"),
    )
    .unwrap();
    let mut reminder = Reminder::new(habit.id, parse_time("09:00").unwrap());

    // Enabled at 10:00 -- today's 09:00 has passed, so tomorrow it is.
    let next = reminder.enable(habit.frequency, at("2026-03-11T10:00:00"));
    assert_eq!(next, at("2026-03-12T09:00:00"));
    assert!(due_reminders([&reminder], at("2026-03-11T12:00:00")).is_empty());

    // Next morning it shows up in the due query.
    let now = at("2026-03-12T09:01:00");
    assert_eq!(due_reminders([&reminder], now).len(), 1);

    // Snoozed for 30 minutes, then acknowledged for the next cadence day.
    reminder.snooze(30, now);
    assert!(!reminder.is_due(now));
    assert!(reminder.is_due(at("2026-03-12T09:31:00")));

    let next = reminder.mark_done(habit.frequency, at("2026-03-12T09:35:00"));
    assert_eq!(next, at("2026-03-13T09:35:00"));
}

/// Dashboard numbers agree with per-habit recomputation.
#[test]
fn test_dashboard_rollup() {
    let reading = Habit::new(
        "Read",
        Frequency::Daily,
        TargetType::Minutes,
        30,
        at("2026-03-01T08:00:00"),
    )
    .unwrap();
    let water = Habit::new(
        "Drink Water",
        Frequency::Daily,
        TargetType::Count,
        8,
        at("2026-03-01T08:00:00"),
    )
    .unwrap();

    let mut check_ins = Vec::new();
    for offset in 0..3 {
        let date = day("2026-03-09") + Duration::days(offset);
        check_ins.push(CheckIn::record(&reading, date, 45.0, None).unwrap());
    }
    // Water only half-done today: 4 of 8 glasses.
    check_ins.push(CheckIn::record(&water, day("2026-03-11"), 4.0, None).unwrap());

    let stats = dashboard_stats(
        &[reading.clone(), water.clone()],
        &check_ins,
        day("2026-03-11"),
    );
    assert_eq!(stats.total_habits, 2);
    assert_eq!(stats.active_habits, 2);
    assert_eq!(stats.total_streaks, 3); // reading 3, water 0
    assert_eq!(stats.completion_rate, 75); // 3 of 4 check-ins completed
    assert_eq!(stats.recent_check_ins[0].date, day("2026-03-11"));
}

/// Derived output survives a serialization round-trip unchanged, as the
/// persistence collaborator requires.
#[test]
fn test_derived_records_serialize_for_persistence() {
    let habit = Habit::new(
        "Read",
        Frequency::Daily,
        TargetType::Minutes,
        30,
        at("2026-03-01T08:00:00"),
    )
    .unwrap();
    let check_ins = vec![CheckIn::record(&habit, day("2026-03-11"), 40.0, None).unwrap()];
    let out = recompute(
        &habit,
        &check_ins,
        &UnlockLog::new(),
        day("2026-03-11"),
        at("2026-03-11T21:00:00"),
    );

    let json = serde_json::to_string(&out.streak).unwrap();
    let back: habitflow_core::Streak = serde_json::from_str(&json).unwrap();
    assert_eq!(back, out.streak);
}
