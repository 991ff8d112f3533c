mod error;
mod shared;

pub use error::{StoreError, ValidationError};
pub use shared::SharedTaskStore;

use chrono::{DateTime, Utc};

use crate::task::{Task, TaskId};

/// In-memory task collection.
///
/// Tasks are kept in insertion order and looked up by id with a linear scan.
/// The id counter starts at 1 and only ever moves forward, so an id is never
/// handed out twice even after the task holding it is removed.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a task and returns a copy of what was stored.
    ///
    /// The description is trimmed; `due_date` defaults to now.
    pub fn add(
        &mut self,
        description: &str,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Task, StoreError> {
        let description = validate_description(description)?;

        let id = TaskId(self.next_id);
        self.next_id += 1;

        let task = Task::new(id, description, due_date.unwrap_or_else(Utc::now));
        self.tasks.push(task.clone());
        tracing::debug!(task_id = %id, "task added");
        Ok(task)
    }

    /// Marks a task as completed. Completing a done task is a no-op.
    pub fn complete(&mut self, id: TaskId) -> Result<(), StoreError> {
        let task = self.find_mut(id)?;
        task.completed = true;
        tracing::debug!(task_id = %id, "task completed");
        Ok(())
    }

    /// Removes a task permanently.
    pub fn remove(&mut self, id: TaskId) -> Result<(), StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        tracing::debug!(task_id = %id, "task removed");
        Ok(())
    }

    /// Returns a snapshot of every task in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns the tasks whose `completed` flag equals `completed`.
    pub fn filter_by_status(&self, completed: bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.completed == completed)
            .cloned()
            .collect()
    }

    /// Replaces a task's description.
    ///
    /// The new text is validated before the lookup, so an empty description
    /// is reported as a validation error even for an unknown id.
    pub fn update_description(&mut self, id: TaskId, description: &str) -> Result<(), StoreError> {
        let description = validate_description(description)?;
        let task = self.find_mut(id)?;
        task.description = description;
        tracing::debug!(task_id = %id, "task description updated");
        Ok(())
    }

    /// Replaces a task's due date.
    pub fn update_due_date(&mut self, id: TaskId, due_date: DateTime<Utc>) -> Result<(), StoreError> {
        let task = self.find_mut(id)?;
        task.due_date = due_date;
        tracing::debug!(task_id = %id, due = %due_date, "task due date updated");
        Ok(())
    }

    /// Drops every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            tracing::debug!(removed, "completed tasks cleared");
        }
        removed
    }

    /// Gets a copy of a task by id.
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

fn validate_description(description: &str) -> Result<String, ValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}
