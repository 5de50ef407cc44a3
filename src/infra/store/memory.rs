//! In-memory task store for development, tests and single-process deployments.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::{ReminderError, Task, TaskId, TaskSource};
use crate::runtime::api::{normalize_description, CreateTask, UpdateTask};

/// Task store backed by a vector guarded by a read/write lock.
///
/// Tasks are kept in insertion order, which is the order scans see them in.
/// Deletes are soft: the task stays stored with `is_active = false`.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `tasks`.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }

    /// Validate and insert a new active, undone task.
    pub fn create(&self, req: CreateTask) -> Result<Task, ReminderError> {
        req.validate()?;
        let mut task = Task::new(req.title.trim(), req.due_date);
        task.description = normalize_description(req.description);
        task.reminder_at = req.reminder_at;

        self.tasks.write().push(task.clone());
        tracing::debug!("created task {}", task.id);
        Ok(task)
    }

    /// Insert an already built task as-is.
    pub fn insert(&self, task: Task) {
        self.tasks.write().push(task);
    }

    /// Look up a task by id, including soft-deleted ones.
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.read().iter().find(|t| t.id == id).cloned()
    }

    /// Every stored task, including done and soft-deleted ones.
    pub fn list_all(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    /// Replace a task's editable fields.
    pub fn update(&self, id: TaskId, req: UpdateTask) -> Result<Task, ReminderError> {
        req.validate()?;
        self.modify(id, |task| {
            task.title = req.title.trim().to_string();
            task.description = normalize_description(req.description);
            task.is_done = req.is_done;
            task.due_date = req.due_date;
            task.reminder_at = req.reminder_at;
        })
    }

    /// Mark a task done.
    pub fn complete(&self, id: TaskId) -> Result<Task, ReminderError> {
        self.modify(id, |task| task.is_done = true)
    }

    /// Soft-delete a task.
    pub fn delete(&self, id: TaskId) -> Result<(), ReminderError> {
        self.modify(id, |task| task.is_active = false).map(|_| ())
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }

    fn modify<F>(&self, id: TaskId, apply: F) -> Result<Task, ReminderError>
    where
        F: FnOnce(&mut Task),
    {
        let mut tasks = self.tasks.write();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ReminderError::NotFound(id))?;
        apply(task);
        task.touch();
        Ok(task.clone())
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskStore {
    async fn list_active_undone(&self) -> Result<Vec<Task>, ReminderError> {
        Ok(self
            .tasks
            .read()
            .iter()
            .filter(|t| t.is_pending())
            .cloned()
            .collect())
    }
}
