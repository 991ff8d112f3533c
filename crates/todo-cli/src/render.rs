//! Plain-text rendering for tasks and persons.

use chrono::{DateTime, Utc};
use todo_core::{DisplayConfig, Person, Task};

/// Renders one task as a single listing line, e.g. `[ ] #3 Buy milk (due 2026-01-15)`.
pub fn task_line(task: &Task, display: &DisplayConfig, now: DateTime<Utc>) -> String {
    let check = if task.completed { "x" } else { " " };
    let mut line = format!(
        "[{check}] #{} {} (due {})",
        task.id,
        task.description,
        task.due_date.format(&display.date_format)
    );
    if display.show_overdue && task.is_overdue(now) {
        line.push_str(" OVERDUE");
    }
    line
}

/// Renders a titled task list, or a placeholder when empty.
pub fn task_list(title: &str, tasks: &[Task], display: &DisplayConfig, now: DateTime<Utc>) -> String {
    if tasks.is_empty() {
        return format!("{title}: no tasks.");
    }
    let mut out = format!("{title} ({}):", tasks.len());
    for task in tasks {
        out.push_str("\n  ");
        out.push_str(&task_line(task, display, now));
    }
    out
}

/// Renders a person as `Name (age) - occupation` or `Name (age) - role`.
pub fn person_line(person: &Person) -> String {
    format!("{} ({}) - {}", person.name(), person.age(), person.detail())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use todo_core::{seed_persons, TaskStore};

    fn due(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_task_line() {
        let mut store = TaskStore::new();
        let task = store.add("Buy milk", Some(due(2030, 1, 15))).unwrap();

        let line = task_line(&task, &DisplayConfig::default(), due(2029, 12, 31));
        assert_eq!(line, "[ ] #1 Buy milk (due 2030-01-15)");
    }

    #[test]
    fn test_overdue_marker() {
        let mut store = TaskStore::new();
        let now = Utc::now();
        let task = store.add("Pay rent", Some(now - Duration::days(2))).unwrap();

        let mut display = DisplayConfig::default();
        assert!(task_line(&task, &display, now).ends_with("OVERDUE"));

        display.show_overdue = false;
        assert!(!task_line(&task, &display, now).contains("OVERDUE"));
    }

    #[test]
    fn test_empty_list() {
        let out = task_list("Pending", &[], &DisplayConfig::default(), Utc::now());
        assert_eq!(out, "Pending: no tasks.");
    }

    #[test]
    fn test_person_line() {
        let people = seed_persons();
        assert_eq!(person_line(&people[3]), "Raj Patel (41) - Security Manager");
    }
}
