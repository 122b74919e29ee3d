//! Milestone badge evaluation.
//!
//! The catalog is fixed: three streak-length badges and three cumulative
//! check-in badges. Unlocked state lives in an append-only [`UnlockLog`]
//! rather than mutable flags -- once an id is in the log it is permanent,
//! which makes the unlock transition one-way by construction and keeps
//! replay and audit straightforward.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::Streak;

/// What it takes to unlock a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRequirement {
    /// Current or longest streak reaches the threshold.
    Streak(u32),
    /// Cumulative completed check-ins reach the threshold.
    CheckIns(u32),
}

impl BadgeRequirement {
    fn satisfied(self, streak: &Streak, total_completed: u32) -> bool {
        match self {
            BadgeRequirement::Streak(n) => {
                streak.current_streak >= n || streak.longest_streak >= n
            }
            BadgeRequirement::CheckIns(n) => total_completed >= n,
        }
    }
}

/// A catalog entry: identity, display data and unlock requirement.
#[derive(Debug, Clone, Copy)]
pub struct BadgeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: BadgeRequirement,
}

/// The fixed badge catalog. Thresholds are encoded in the ids.
pub const CATALOG: &[BadgeSpec] = &[
    BadgeSpec {
        id: "streak-7",
        name: "Week Warrior",
        description: "Maintain a 7-day streak",
        icon: "\u{1f525}",
        requirement: BadgeRequirement::Streak(7),
    },
    BadgeSpec {
        id: "streak-30",
        name: "Month Master",
        description: "Maintain a 30-day streak",
        icon: "\u{2b50}",
        requirement: BadgeRequirement::Streak(30),
    },
    BadgeSpec {
        id: "streak-100",
        name: "Century Club",
        description: "Maintain a 100-day streak",
        icon: "\u{1f4af}",
        requirement: BadgeRequirement::Streak(100),
    },
    BadgeSpec {
        id: "checkin-10",
        name: "Getting Started",
        description: "Complete 10 check-ins",
        icon: "\u{1f331}",
        requirement: BadgeRequirement::CheckIns(10),
    },
    BadgeSpec {
        id: "checkin-50",
        name: "Consistent",
        description: "Complete 50 check-ins",
        icon: "\u{1f4c8}",
        requirement: BadgeRequirement::CheckIns(50),
    },
    BadgeSpec {
        id: "checkin-100",
        name: "Dedicated",
        description: "Complete 100 check-ins",
        icon: "\u{1f3c6}",
        requirement: BadgeRequirement::CheckIns(100),
    },
];

/// Look up a catalog entry by id.
pub fn find_spec(id: &str) -> Option<&'static BadgeSpec> {
    CATALOG.iter().find(|spec| spec.id == id)
}

/// An unlocked badge, ready for the caller to persist and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: Option<NaiveDateTime>,
}

impl BadgeSpec {
    fn unlock(&self, at: NaiveDateTime) -> Badge {
        Badge {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            unlocked_at: Some(at),
        }
    }
}

/// One permanent unlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockEntry {
    pub badge_id: String,
    pub unlocked_at: NaiveDateTime,
}

/// Append-only record of every badge the user has unlocked, global across
/// habits. Ids never leave the log, so an unlock can never revert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockLog {
    entries: Vec<UnlockEntry>,
}

impl UnlockLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from persisted entries, dropping duplicate ids while
    /// keeping the earliest unlock for each.
    pub fn from_entries(entries: impl IntoIterator<Item = UnlockEntry>) -> Self {
        let mut log = Self::new();
        for entry in entries {
            log.record(&entry.badge_id, entry.unlocked_at);
        }
        log
    }

    pub fn contains(&self, badge_id: &str) -> bool {
        self.entries.iter().any(|e| e.badge_id == badge_id)
    }

    /// Append an unlock. Returns false (and changes nothing) when the id is
    /// already present.
    pub fn record(&mut self, badge_id: &str, unlocked_at: NaiveDateTime) -> bool {
        if self.contains(badge_id) {
            return false;
        }
        self.entries.push(UnlockEntry {
            badge_id: badge_id.to_string(),
            unlocked_at,
        });
        true
    }

    pub fn entries(&self) -> &[UnlockEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Evaluate the catalog against current facts and return the badges not yet
/// in the log whose requirement is now satisfied.
///
/// The evaluation itself never mutates the log; the caller records the
/// returned badges (see [`UnlockLog::record`]) after persisting them.
/// Feeding a call's results back into the log makes the next call with the
/// same facts return nothing.
pub fn evaluate(
    streak: &Streak,
    total_completed: u32,
    log: &UnlockLog,
    now: NaiveDateTime,
) -> Vec<Badge> {
    CATALOG
        .iter()
        .filter(|spec| !log.contains(spec.id))
        .filter(|spec| spec.requirement.satisfied(streak, total_completed))
        .map(|spec| spec.unlock(now))
        .collect()
}
