//! Interactive menu loop driving a [`TaskStore`].
//!
//! The loop is generic over its input and output so it can run against
//! stdin/stdout or in-memory buffers.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use todo_core::{Config, StoreError, TaskId, TaskStore};

use crate::render;

const MENU: &str = "\
1) Add task
2) List all tasks
3) List pending tasks
4) List completed tasks
5) Complete task
6) Update description
7) Update due date
8) Remove task
9) Clear completed tasks
0) Exit";

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    ListAll,
    ListPending,
    ListCompleted,
    Complete,
    UpdateDescription,
    UpdateDueDate,
    Remove,
    ClearCompleted,
    Exit,
}

impl Action {
    fn parse(input: &str) -> Option<Self> {
        let action = match input.trim().to_ascii_lowercase().as_str() {
            "1" | "add" => Action::Add,
            "2" | "list" => Action::ListAll,
            "3" | "pending" => Action::ListPending,
            "4" | "completed" => Action::ListCompleted,
            "5" | "complete" | "done" => Action::Complete,
            "6" | "edit" => Action::UpdateDescription,
            "7" | "due" => Action::UpdateDueDate,
            "8" | "remove" | "rm" => Action::Remove,
            "9" | "clear" => Action::ClearCompleted,
            "0" | "q" | "quit" | "exit" => Action::Exit,
            _ => return None,
        };
        Some(action)
    }
}

/// Parses a due date typed by the user.
///
/// Accepts either a full date-time or a bare date in `format`; bare dates
/// resolve to midnight UTC.
pub fn parse_due_date(input: &str, format: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
        return Some(Utc.from_utc_datetime(&naive));
    }
    let date = NaiveDate::parse_from_str(input, format).ok()?;
    let naive = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

fn parse_task_id(input: &str) -> Option<TaskId> {
    input.trim().parse::<u64>().ok().map(TaskId)
}

/// One interactive session over a task store.
pub struct Session<'a, R, W> {
    store: TaskStore,
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: TaskStore, config: &'a Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    /// Runs until the user picks Exit or input reaches EOF.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "todo - in-memory task manager")?;
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("> ")? else {
                break;
            };
            let Some(action) = Action::parse(&choice) else {
                writeln!(self.output, "Unknown option: {}", choice.trim())?;
                continue;
            };
            if action == Action::Exit {
                break;
            }
            if !self.dispatch(action)? {
                break;
            }
        }
        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    /// Consumes the session, returning the store for inspection.
    #[cfg(test)]
    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Handles one action. Returns `false` when input ran out mid-action.
    fn dispatch(&mut self, action: Action) -> io::Result<bool> {
        tracing::debug!(?action, "menu action");
        match action {
            Action::Add => self.add(),
            Action::ListAll => {
                let tasks = self.store.list();
                self.print_list("All tasks", &tasks)?;
                Ok(true)
            }
            Action::ListPending => {
                let tasks = self.store.filter_by_status(false);
                self.print_list("Pending tasks", &tasks)?;
                Ok(true)
            }
            Action::ListCompleted => {
                let tasks = self.store.filter_by_status(true);
                self.print_list("Completed tasks", &tasks)?;
                Ok(true)
            }
            Action::Complete => self.with_task_id(|store, id| {
                store.complete(id)?;
                Ok(format!("Task {id} marked as completed."))
            }),
            Action::Remove => self.with_task_id(|store, id| {
                store.remove(id)?;
                Ok(format!("Task {id} removed."))
            }),
            Action::UpdateDescription => self.update_description(),
            Action::UpdateDueDate => self.update_due_date(),
            Action::ClearCompleted => {
                let removed = self.store.clear_completed();
                writeln!(self.output, "Removed {removed} completed task(s).")?;
                Ok(true)
            }
            Action::Exit => Ok(false),
        }
    }

    fn add(&mut self) -> io::Result<bool> {
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(false);
        };
        let label = self.due_prompt(true);
        let Some(raw_date) = self.prompt(&label)? else {
            return Ok(false);
        };
        let due_date = if raw_date.trim().is_empty() {
            None
        } else {
            match self.parse_date(&raw_date)? {
                Some(date) => Some(date),
                None => return Ok(true),
            }
        };

        match self.store.add(&description, due_date) {
            Ok(task) => writeln!(self.output, "Added task {}: {}", task.id, task.description)?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn update_description(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_task_id()? else {
            return Ok(false);
        };
        let Some(id) = id else {
            return Ok(true);
        };
        let Some(description) = self.prompt("New description: ")? else {
            return Ok(false);
        };
        match self.store.update_description(id, &description) {
            Ok(()) => writeln!(self.output, "Task {id} updated.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn update_due_date(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_task_id()? else {
            return Ok(false);
        };
        let Some(id) = id else {
            return Ok(true);
        };
        let label = self.due_prompt(false);
        let Some(raw_date) = self.prompt(&label)? else {
            return Ok(false);
        };
        let Some(due_date) = self.parse_date(&raw_date)? else {
            return Ok(true);
        };
        match self.store.update_due_date(id, due_date) {
            Ok(()) => writeln!(self.output, "Task {id} due date updated.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn with_task_id(
        &mut self,
        op: impl FnOnce(&mut TaskStore, TaskId) -> Result<String, StoreError>,
    ) -> io::Result<bool> {
        let Some(id) = self.prompt_task_id()? else {
            return Ok(false);
        };
        let Some(id) = id else {
            return Ok(true);
        };
        match op(&mut self.store, id) {
            Ok(message) => writeln!(self.output, "{message}")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    /// Outer `None` means EOF; inner `None` means the id was unparseable.
    fn prompt_task_id(&mut self) -> io::Result<Option<Option<TaskId>>> {
        let Some(raw) = self.prompt("Task id: ")? else {
            return Ok(None);
        };
        let id = parse_task_id(&raw);
        if id.is_none() {
            writeln!(self.output, "Error: '{}' is not a valid task id", raw.trim())?;
        }
        Ok(Some(id))
    }

    fn parse_date(&mut self, raw: &str) -> io::Result<Option<DateTime<Utc>>> {
        let format = &self.config.input.date_format;
        let parsed = parse_due_date(raw, format);
        if parsed.is_none() {
            writeln!(
                self.output,
                "Error: '{}' is not a valid date (expected {format})",
                raw.trim()
            )?;
        }
        Ok(parsed)
    }

    fn due_prompt(&self, optional: bool) -> String {
        let format = &self.config.input.date_format;
        if optional {
            format!("Due date ({format}, empty for now): ")
        } else {
            format!("Due date ({format}): ")
        }
    }

    fn print_list(&mut self, title: &str, tasks: &[todo_core::Task]) -> io::Result<()> {
        let text = render::task_list(title, tasks, &self.config.display, Utc::now());
        writeln!(self.output, "{text}")
    }

    fn report(&mut self, error: &StoreError) -> io::Result<()> {
        tracing::debug!(%error, "operation rejected");
        writeln!(self.output, "Error: {error}")
    }

    /// Writes `label` and reads one line. Returns `None` on EOF.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> (String, TaskStore) {
        let config = Config::default();
        let mut output = Vec::new();
        let mut session = Session::new(
            TaskStore::new(),
            &config,
            Cursor::new(script.as_bytes().to_vec()),
            &mut output,
        );
        session.run().unwrap();
        let store = session.into_store();
        (String::from_utf8(output).unwrap(), store)
    }

    #[test]
    fn test_parse_due_date() {
        let date = parse_due_date("2030-01-15", "%Y-%m-%d").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2030, 1, 15, 0, 0, 0).unwrap());

        let date = parse_due_date("15.01.2030 09:30", "%d.%m.%Y %H:%M").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2030, 1, 15, 9, 30, 0).unwrap());

        assert!(parse_due_date("tomorrow", "%Y-%m-%d").is_none());
        assert!(parse_due_date("2030-02-30", "%Y-%m-%d").is_none());
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(Action::parse("1"), Some(Action::Add));
        assert_eq!(Action::parse(" Q "), Some(Action::Exit));
        assert_eq!(Action::parse("42"), None);
    }

    #[test]
    fn test_add_complete_clear() {
        let (out, store) = run_session("1\nBuy milk\n\n5\n1\n9\n2\n0\n");

        assert!(out.contains("Added task 1: Buy milk"));
        assert!(out.contains("Task 1 marked as completed."));
        assert!(out.contains("Removed 1 completed task(s)."));
        assert!(out.contains("All tasks: no tasks."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_with_due_date() {
        let (out, store) = run_session("1\nDentist\n2030-03-01\n2\n");

        assert!(out.contains("[ ] #1 Dentist (due 2030-03-01)"));
        assert_eq!(
            store.list()[0].due_date,
            Utc.with_ymd_and_hms(2030, 3, 1, 0, 0, 0).unwrap()
        );
        // EOF ends the session cleanly
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_bad_input_is_reported_and_loop_continues() {
        let (out, store) = run_session("1\n   \n\n1\nTask\nnot-a-date\n5\nabc\n5\n7\nx\n0\n");

        assert!(out.contains("Error: Invalid input: Task description cannot be empty"));
        assert!(out.contains("Error: 'not-a-date' is not a valid date"));
        assert!(out.contains("Error: 'abc' is not a valid task id"));
        assert!(out.contains("Error: Task not found: 7"));
        assert!(out.contains("Unknown option: x"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_description_and_due_date() {
        let (out, store) = run_session("1\nDraft\n\n6\n1\nFinal report\n7\n1\n2031-12-24\n0\n");

        assert!(out.contains("Task 1 updated."));
        assert!(out.contains("Task 1 due date updated."));
        let task = store.get(TaskId(1)).unwrap();
        assert_eq!(task.description, "Final report");
        assert_eq!(
            task.due_date,
            Utc.with_ymd_and_hms(2031, 12, 24, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_default_due_is_not_overdue() {
        let (out, _) = run_session("1\nBuy milk\n\n2\n0\n");

        assert!(out.contains("[ ] #1 Buy milk (due "));
        assert!(!out.contains("OVERDUE"));
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let (out, _) = run_session(&format!("1\nDentist\n{today}\n2\n0\n"));

        assert!(out.contains(&format!("[ ] #1 Dentist (due {today})")));
        assert!(!out.contains("OVERDUE"));
    }

    #[test]
    fn test_past_due_is_flagged() {
        let (out, _) = run_session("1\nTaxes\n2001-04-15\n2\n0\n");

        assert!(out.contains("[ ] #1 Taxes (due 2001-04-15) OVERDUE"));
    }

    #[test]
    fn test_pending_and_completed_listings() {
        let (out, _) = run_session("1\nA\n2030-01-01\n1\nB\n2030-01-01\n5\n2\n3\n4\nq\n");

        assert!(out.contains("Pending tasks (1):\n  [ ] #1 A (due 2030-01-01)"));
        assert!(out.contains("Completed tasks (1):\n  [x] #2 B (due 2030-01-01)"));
    }
}
