//! Domain model for habits, check-ins and streaks.
//!
//! These are the records the surrounding application persists. The engine
//! consumes them as plain values and never owns their lifecycle: habits and
//! check-ins come from the store, derived records (streaks, badges) go back
//! to it. All calendar values are local wall-clock (`NaiveDate` /
//! `NaiveDateTime`) -- the engine has no timezone concept.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ConfigError, ParseError, ValidationError};

/// Repeat cadence governing how often a habit is expected to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(ConfigError::UnknownFrequency(other.to_string())),
        }
    }
}

/// What a check-in value is measured in.
///
/// `Boolean` habits are done-or-not; the other kinds carry a magnitude
/// compared against the habit's target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Boolean,
    Times,
    Minutes,
    Pages,
    Count,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Boolean => "boolean",
            TargetType::Times => "times",
            TargetType::Minutes => "minutes",
            TargetType::Pages => "pages",
            TargetType::Count => "count",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(TargetType::Boolean),
            "times" => Ok(TargetType::Times),
            "minutes" => Ok(TargetType::Minutes),
            "pages" => Ok(TargetType::Pages),
            "count" => Ok(TargetType::Count),
            other => Err(ConfigError::UnknownTargetType(other.to_string())),
        }
    }
}

/// A recurring habit and its cadence/target configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Frequency,
    pub target_type: TargetType,
    /// Positive magnitude required for completion; ignored for boolean targets.
    pub target_value: u32,
    pub archived: bool,
    pub created_at: NaiveDateTime,
}

impl Habit {
    /// Build a habit after validating its target configuration.
    pub fn new(
        name: impl Into<String>,
        frequency: Frequency,
        target_type: TargetType,
        target_value: u32,
        created_at: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        validate_target(frequency, target_type, target_value)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            category: None,
            frequency,
            target_type,
            target_value,
            archived: false,
            created_at,
        })
    }
}

/// A single dated record asserting a habit was performed on a calendar day.
///
/// At most one check-in exists per `(habit_id, date)`; enforcing that
/// uniqueness is the store's job, and the streak math deduplicates
/// defensively on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub date: NaiveDate,
    /// Recorded magnitude (times, minutes, pages, ...); 1.0 is customary
    /// for boolean habits.
    pub value: f64,
    /// Derived once at write time; the engine trusts this flag and never
    /// re-derives it from `value`.
    pub completed: bool,
    pub notes: Option<String>,
}

impl CheckIn {
    /// Record a check-in for `habit` on `date`, deriving `completed` from
    /// the habit's target: any positive value completes a boolean habit,
    /// otherwise the value must reach the target.
    pub fn record(
        habit: &Habit,
        date: NaiveDate,
        value: f64,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        if value < 0.0 {
            return Err(ValidationError::NegativeCheckInValue(value));
        }
        let completed = match habit.target_type {
            TargetType::Boolean => value > 0.0,
            _ => value >= f64::from(habit.target_value),
        };
        Ok(Self {
            id: Uuid::new_v4(),
            habit_id: habit.id,
            date,
            value,
            completed,
            notes,
        })
    }
}

/// Derived streak facts for one habit.
///
/// Fully recomputed from the check-in set on every mutation -- persisted
/// copies are caches of the latest computed value, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub habit_id: Uuid,
    pub current_streak: u32,
    /// Invariant: `longest_streak >= current_streak`.
    pub longest_streak: u32,
    pub last_check_in_date: Option<NaiveDate>,
}

impl Streak {
    /// The zero streak for a habit with no completed check-ins.
    pub fn empty(habit_id: Uuid) -> Self {
        Self {
            habit_id,
            current_streak: 0,
            longest_streak: 0,
            last_check_in_date: None,
        }
    }
}

/// Per-frequency bounds on non-boolean target values.
fn target_bounds(frequency: Frequency) -> (u32, u32) {
    match frequency {
        Frequency::Daily => (1, 100),
        Frequency::Weekly => (1, 50),
        Frequency::Monthly => (1, 100),
        Frequency::Quarterly => (1, 200),
        Frequency::Yearly => (1, 1000),
    }
}

/// Validate a frequency/target combination.
///
/// Boolean targets are always valid. Other target values must be positive,
/// inside the per-frequency bounds, and minutes targets cannot exceed a
/// full day.
pub fn validate_target(
    frequency: Frequency,
    target_type: TargetType,
    target_value: u32,
) -> Result<(), ValidationError> {
    if target_type == TargetType::Boolean {
        return Ok(());
    }
    if target_value == 0 {
        return Err(ValidationError::ZeroTarget);
    }
    let (min, max) = target_bounds(frequency);
    if target_value < min || target_value > max {
        return Err(ValidationError::TargetOutOfRange {
            frequency,
            value: target_value,
            min,
            max,
        });
    }
    if target_type == TargetType::Minutes && target_value > 1440 {
        return Err(ValidationError::MinutesExceedDay);
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_day(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate {
        value: s.to_string(),
    })
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` local timestamp.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map_err(|_| {
        ParseError::InvalidTimestamp {
            value: s.to_string(),
        }
    })
}

/// Parse an `HH:MM` wall-clock time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ParseError::InvalidTime {
        value: s.to_string(),
    })
}
