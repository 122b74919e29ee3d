//! # Habitflow Core Library
//!
//! This library provides the progress-and-reward computation core of the
//! Habitflow habit tracker: pure, stateless functions that turn a raw
//! check-in history plus a habit's cadence configuration into derived
//! temporal facts -- streaks, period completion rates, badge unlocks, and
//! next-reminder schedules.
//!
//! ## Architecture
//!
//! - **Cadence calendar**: calendar-accurate stepping and day-count
//!   occurrence estimates for daily through yearly habits
//! - **Streak calculator**: batch recomputation of current/longest streaks
//!   with a one-day grace window
//! - **Progress aggregator**: week/month/year completion rates and dense
//!   daily series for charting
//! - **Badge evaluator**: a fixed milestone catalog against an append-only
//!   unlock log
//! - **Reminder scheduler**: a per-habit state machine over wall-clock time
//!
//! The engine performs no I/O. The surrounding application owns the store,
//! supplies check-in snapshots and the current instant, and persists what
//! the engine returns. All calendar values are local wall-clock; there is
//! no timezone concept.
//!
//! ## Key Components
//!
//! - [`engine::recompute`]: the full per-mutation compute cycle
//! - [`streak::calculate_streak`] / [`progress::calculate_progress`]
//! - [`badges::evaluate`] and [`badges::UnlockLog`]
//! - [`reminder::Reminder`]: enable/snooze/done transitions
//! - [`engine::HabitLocks`]: per-habit serialization of mutating cycles

pub mod badges;
pub mod cadence;
pub mod engine;
pub mod error;
pub mod goal;
pub mod model;
pub mod progress;
pub mod reminder;
pub mod streak;
pub mod templates;

pub use badges::{Badge, BadgeRequirement, BadgeSpec, UnlockEntry, UnlockLog, CATALOG};
pub use engine::{recompute, HabitLocks, Recomputation};
pub use error::{ConfigError, CoreError, ParseError, Result, ValidationError};
pub use goal::{Goal, SubTask};
pub use model::{CheckIn, Frequency, Habit, Streak, TargetType};
pub use progress::{
    calculate_progress, dashboard_stats, lifetime_completion_rate, DailyEntry, DashboardStats,
    Period, ProgressData,
};
pub use reminder::{due_reminders, next_occurrence, Reminder, ReminderState};
pub use streak::calculate_streak;
pub use templates::{HabitTemplate, PRE_BUILT};
