//! Goal progress derived from sub-task completion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One step toward a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

/// A milestone made of sub-tasks, optionally tied to a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub habit_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub sub_tasks: Vec<SubTask>,
}

impl Goal {
    pub fn completed_sub_tasks(&self) -> usize {
        self.sub_tasks.iter().filter(|st| st.completed).count()
    }

    pub fn total_sub_tasks(&self) -> usize {
        self.sub_tasks.len()
    }

    /// Rounded completion percentage; a goal with no sub-tasks is at 0.
    pub fn progress_percent(&self) -> u8 {
        if self.sub_tasks.is_empty() {
            return 0;
        }
        let ratio = self.completed_sub_tasks() as f64 / self.total_sub_tasks() as f64;
        (ratio * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_goal(done: usize, total: usize) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            habit_id: None,
            title: "Run a 10k".to_string(),
            description: None,
            target_date: None,
            sub_tasks: (0..total)
                .map(|i| SubTask {
                    id: Uuid::new_v4(),
                    title: format!("Step {}", i + 1),
                    completed: i < done,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_goal_is_at_zero() {
        assert_eq!(make_goal(0, 0).progress_percent(), 0);
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        assert_eq!(make_goal(1, 3).progress_percent(), 33);
        assert_eq!(make_goal(2, 3).progress_percent(), 67);
        assert_eq!(make_goal(3, 3).progress_percent(), 100);
    }

    #[test]
    fn counts_match_sub_task_flags() {
        let goal = make_goal(2, 5);
        assert_eq!(goal.completed_sub_tasks(), 2);
        assert_eq!(goal.total_sub_tasks(), 5);
    }
}
