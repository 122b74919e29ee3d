//! The recompute cycle and its concurrency discipline.
//!
//! On every check-in mutation the caller re-reads the habit's full history
//! and runs [`recompute`]: streak facts, completed totals and badge
//! evaluation in one pass. The results go back to the store as cache
//! records -- nothing here is incremental.
//!
//! The computation itself is pure and safe under any concurrency. The
//! hazard is the surrounding read-compute-write cycle against the store,
//! which is not atomic: two racing mutations for the same habit can
//! produce a lost update. [`HabitLocks`] serializes those cycles per habit
//! identity while leaving distinct habits fully parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::badges::{self, Badge, UnlockLog};
use crate::model::{CheckIn, Habit, Streak};
use crate::streak::calculate_streak;

/// Everything a mutation-triggered recompute derives for one habit.
#[derive(Debug, Clone)]
pub struct Recomputation {
    pub streak: Streak,
    /// Completed check-ins across the habit's whole history.
    pub total_completed: u32,
    /// Badges whose requirements are newly satisfied; the caller persists
    /// them and appends their ids to the unlock log.
    pub newly_unlocked: Vec<Badge>,
}

/// Run one full compute cycle for a habit.
///
/// `today` drives the day-level streak walk; `now` timestamps any badge
/// unlocks. Both are injected so the cycle is deterministic and testable.
pub fn recompute(
    habit: &Habit,
    check_ins: &[CheckIn],
    unlock_log: &UnlockLog,
    today: NaiveDate,
    now: NaiveDateTime,
) -> Recomputation {
    let streak = calculate_streak(habit.id, check_ins, today);
    let total_completed = check_ins.iter().filter(|ci| ci.completed).count() as u32;
    let newly_unlocked = badges::evaluate(&streak, total_completed, unlock_log, now);
    Recomputation {
        streak,
        total_completed,
        newly_unlocked,
    }
}

/// Keyed mutex registry serializing mutating cycles per habit.
///
/// Locks are created on first use and kept for the registry's lifetime;
/// the set of habits a process touches is small.
#[derive(Debug, Default)]
pub struct HabitLocks {
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl HabitLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, habit_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks.entry(habit_id).or_default().clone()
    }

    /// Run `f` holding the habit's lock, so read-compute-write cycles for
    /// one habit never interleave. Cycles for different habits proceed in
    /// parallel.
    pub fn serialized<T>(&self, habit_id: Uuid, f: impl FnOnce() -> T) -> T {
        let lock = self.lock_for(habit_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }
}
