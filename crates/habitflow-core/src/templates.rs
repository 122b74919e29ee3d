//! Pre-built habit templates.
//!
//! A fixed catalog of starter configurations the application can offer
//! instead of a blank form. Instantiation runs the same target validation
//! as any hand-made habit.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::model::{validate_target, Frequency, Habit, TargetType};

/// A starter habit configuration.
#[derive(Debug, Clone, Copy)]
pub struct HabitTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub frequency: Frequency,
    pub target_type: TargetType,
    pub target_value: u32,
}

/// The pre-built template catalog.
pub const PRE_BUILT: &[HabitTemplate] = &[
    HabitTemplate {
        id: "template-read",
        name: "Read Daily",
        description: "Read for at least 30 minutes every day",
        category: "Learning",
        frequency: Frequency::Daily,
        target_type: TargetType::Minutes,
        target_value: 30,
    },
    HabitTemplate {
        id: "template-exercise",
        name: "Exercise",
        description: "Exercise for at least 30 minutes",
        category: "Health",
        frequency: Frequency::Daily,
        target_type: TargetType::Minutes,
        target_value: 30,
    },
    HabitTemplate {
        id: "template-meditate",
        name: "Meditate",
        description: "Meditate for 10 minutes daily",
        category: "Wellness",
        frequency: Frequency::Daily,
        target_type: TargetType::Minutes,
        target_value: 10,
    },
    HabitTemplate {
        id: "template-water",
        name: "Drink Water",
        description: "Drink 8 glasses of water per day",
        category: "Health",
        frequency: Frequency::Daily,
        target_type: TargetType::Count,
        target_value: 8,
    },
    HabitTemplate {
        id: "template-study",
        name: "Study",
        description: "Study for 90 minutes daily",
        category: "Learning",
        frequency: Frequency::Daily,
        target_type: TargetType::Minutes,
        target_value: 90,
    },
    HabitTemplate {
        id: "template-journal",
        name: "Journal",
        description: "Write in journal daily",
        category: "Wellness",
        frequency: Frequency::Daily,
        target_type: TargetType::Boolean,
        target_value: 1,
    },
    HabitTemplate {
        id: "template-walk",
        name: "Walk",
        description: "Take a 30-minute walk",
        category: "Health",
        frequency: Frequency::Daily,
        target_type: TargetType::Minutes,
        target_value: 30,
    },
    HabitTemplate {
        id: "template-gratitude",
        name: "Gratitude Practice",
        description: "Write down 3 things you are grateful for",
        category: "Wellness",
        frequency: Frequency::Daily,
        target_type: TargetType::Count,
        target_value: 3,
    },
];

/// Look up a pre-built template by id.
pub fn find(id: &str) -> Option<&'static HabitTemplate> {
    PRE_BUILT.iter().find(|t| t.id == id)
}

impl HabitTemplate {
    /// Clone the template into a fresh habit record.
    pub fn instantiate(&self, created_at: NaiveDateTime) -> Result<Habit, ValidationError> {
        validate_target(self.frequency, self.target_type, self.target_value)?;
        Ok(Habit {
            id: Uuid::new_v4(),
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            category: Some(self.category.to_string()),
            frequency: self.frequency,
            target_type: self.target_type,
            target_value: self.target_value,
            archived: false,
            created_at,
        })
    }
}
