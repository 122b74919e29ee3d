//! Per-habit reminder scheduling.
//!
//! A reminder is a small state machine over wall-clock time. `Disabled` and
//! `Pending` are stored; `Due` is a read-time evaluation
//! (`next_reminder_date <= now`), never written back. The caller owns the
//! polling loop and the notification delivery -- this module only computes
//! schedules and exposes the due predicate.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Frequency;

/// Observable state of a reminder at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderState {
    Disabled,
    /// Enabled with a schedule in the future (or none yet).
    Pending,
    /// Enabled and the scheduled instant has arrived or passed.
    Due,
}

/// A habit's reminder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub habit_id: Uuid,
    /// Governs every due-check; a disabled reminder is never due no matter
    /// what `next_reminder_date` says.
    pub enabled: bool,
    /// Wall-clock time of day the user wants to be reminded at.
    pub time: NaiveTime,
    pub next_reminder_date: Option<NaiveDateTime>,
}

impl Reminder {
    /// A fresh, disabled reminder with no schedule.
    pub fn new(habit_id: Uuid, time: NaiveTime) -> Self {
        Self {
            habit_id,
            enabled: false,
            time,
            next_reminder_date: None,
        }
    }

    /// Enable the reminder and schedule the next occurrence of its time of
    /// day: today if that instant is still ahead of `now`, otherwise one
    /// cadence unit later. Returns the scheduled instant.
    pub fn enable(&mut self, frequency: Frequency, now: NaiveDateTime) -> NaiveDateTime {
        let next = next_occurrence(self.time, frequency, now);
        self.enabled = true;
        self.next_reminder_date = Some(next);
        next
    }

    /// Disable the reminder. The old schedule is retained for inspection
    /// but ignored by all due-checks.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Push the schedule `minutes` into the future from `now`.
    pub fn snooze(&mut self, minutes: i64, now: NaiveDateTime) -> NaiveDateTime {
        let next = now + Duration::minutes(minutes);
        self.next_reminder_date = Some(next);
        next
    }

    /// Acknowledge the reminder and schedule the next cadence occurrence
    /// from `now`.
    pub fn mark_done(&mut self, frequency: Frequency, now: NaiveDateTime) -> NaiveDateTime {
        let next = frequency.increment(now);
        self.next_reminder_date = Some(next);
        next
    }

    /// Evaluate the state machine at `now`.
    pub fn state(&self, now: NaiveDateTime) -> ReminderState {
        if !self.enabled {
            return ReminderState::Disabled;
        }
        match self.next_reminder_date {
            Some(next) if next <= now => ReminderState::Due,
            _ => ReminderState::Pending,
        }
    }

    /// Whether the reminder should fire at `now`.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.state(now) == ReminderState::Due
    }
}

/// The next occurrence of `time`-of-day strictly after `now`, stepping by
/// `frequency` when today's instant has already passed.
pub fn next_occurrence(time: NaiveTime, frequency: Frequency, now: NaiveDateTime) -> NaiveDateTime {
    let candidate = now.date().and_time(time);
    if candidate <= now {
        frequency.increment(candidate)
    } else {
        candidate
    }
}

/// Discovery query for the polling collaborator: every enabled reminder
/// whose schedule is not in the future.
pub fn due_reminders<'a, I>(reminders: I, now: NaiveDateTime) -> Vec<&'a Reminder>
where
    I: IntoIterator<Item = &'a Reminder>,
{
    reminders.into_iter().filter(|r| r.is_due(now)).collect()
}
