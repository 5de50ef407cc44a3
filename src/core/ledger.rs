//! Optional memory of which reminders were already pushed.
//!
//! Scans are stateless by default, so a task that stays inside the window is
//! notified on every cycle. When de-duplication is switched on the worker
//! consults this ledger: a task is notified once per reminder instant, and
//! moving the reminder re-arms it.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use super::task::{Task, TaskId};

/// Tracks the reminder instant last notified for each task.
#[derive(Debug, Default)]
pub struct NotificationLedger {
    notified: Mutex<HashMap<TaskId, DateTime<Utc>>>,
}

impl NotificationLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a reminder for `task` at its current reminder instant was already sent.
    pub fn already_notified(&self, task: &Task) -> bool {
        let Some(reminder) = task.reminder_at else {
            return false;
        };
        self.notified.lock().get(&task.id) == Some(&reminder)
    }

    /// Remember that `task` was notified at its current reminder instant.
    pub fn mark_notified(&self, task: &Task) {
        if let Some(reminder) = task.reminder_at {
            self.notified.lock().insert(task.id, reminder);
        }
    }

    /// Drop entries for tasks absent from the latest active snapshot.
    pub fn retain_active(&self, active: &[Task]) {
        let live: HashSet<TaskId> = active.iter().map(|t| t.id).collect();
        self.notified.lock().retain(|id, _| live.contains(id));
    }

    /// Number of tracked tasks.
    pub fn len(&self) -> usize {
        self.notified.lock().len()
    }

    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.notified.lock().is_empty()
    }
}
