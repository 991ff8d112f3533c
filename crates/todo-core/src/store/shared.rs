use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use super::{StoreError, TaskStore};
use crate::task::{Task, TaskId};

/// Cloneable handle to a [`TaskStore`] that can be shared between threads.
///
/// Each call takes the one lock guarding both the collection and the id
/// counter, so at most one mutation is ever in flight.
#[derive(Debug, Clone, Default)]
pub struct SharedTaskStore {
    inner: Arc<Mutex<TaskStore>>,
}

impl SharedTaskStore {
    pub fn new(store: TaskStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add(&self, description: &str, due_date: Option<DateTime<Utc>>) -> Result<Task, StoreError> {
        self.inner.lock().add(description, due_date)
    }

    pub fn complete(&self, id: TaskId) -> Result<(), StoreError> {
        self.inner.lock().complete(id)
    }

    pub fn remove(&self, id: TaskId) -> Result<(), StoreError> {
        self.inner.lock().remove(id)
    }

    pub fn list(&self) -> Vec<Task> {
        self.inner.lock().list()
    }

    pub fn filter_by_status(&self, completed: bool) -> Vec<Task> {
        self.inner.lock().filter_by_status(completed)
    }

    pub fn update_description(&self, id: TaskId, description: &str) -> Result<(), StoreError> {
        self.inner.lock().update_description(id, description)
    }

    pub fn update_due_date(&self, id: TaskId, due_date: DateTime<Utc>) -> Result<(), StoreError> {
        self.inner.lock().update_due_date(id, due_date)
    }

    pub fn clear_completed(&self) -> usize {
        self.inner.lock().clear_completed()
    }

    /// Runs `f` with exclusive access to the underlying store.
    ///
    /// Use this to group several operations into one atomic step.
    pub fn with<R>(&self, f: impl FnOnce(&mut TaskStore) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}
