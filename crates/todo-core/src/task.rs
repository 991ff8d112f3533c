use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a task by its store.
///
/// Ids start at 1 and are never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Returns the raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single todo item.
///
/// Tasks are only created through [`TaskStore::add`](crate::TaskStore::add);
/// values handed out by the store are copies, so editing one never reaches
/// back into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier
    pub id: TaskId,
    /// Trimmed, non-empty description
    pub description: String,
    /// Whether the task has been marked done
    pub completed: bool,
    /// When the task is due
    pub due_date: DateTime<Utc>,
}

impl Task {
    pub(crate) fn new(id: TaskId, description: String, due_date: DateTime<Utc>) -> Self {
        Self {
            id,
            description,
            completed: false,
            due_date,
        }
    }

    /// Returns true if the task is still open and its due day is before
    /// the day of `now`. A task due today is never overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.date_naive() < now.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new(TaskId(1), "Buy milk".to_string(), Utc::now());
        assert!(!task.completed);
    }

    #[test]
    fn test_is_overdue() {
        let now = Utc::now();
        let mut task = Task::new(TaskId(1), "Pay rent".to_string(), now - Duration::days(1));
        assert!(task.is_overdue(now));

        task.completed = true;
        assert!(!task.is_overdue(now));

        let future = Task::new(TaskId(2), "Plan trip".to_string(), now + Duration::days(3));
        assert!(!future.is_overdue(now));
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let now = Utc.with_ymd_and_hms(2030, 1, 15, 18, 30, 0).unwrap();

        let midnight = Task::new(
            TaskId(1),
            "Dentist".to_string(),
            Utc.with_ymd_and_hms(2030, 1, 15, 0, 0, 0).unwrap(),
        );
        assert!(!midnight.is_overdue(now));

        let earlier_today = Task::new(TaskId(2), "Call back".to_string(), now - Duration::hours(3));
        assert!(!earlier_today.is_overdue(now));

        let yesterday = Task::new(
            TaskId(3),
            "Late".to_string(),
            Utc.with_ymd_and_hms(2030, 1, 14, 23, 59, 0).unwrap(),
        );
        assert!(yesterday.is_overdue(now));
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(42).to_string(), "42");
        assert_eq!(TaskId::from(7).get(), 7);
    }
}
