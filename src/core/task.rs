//! Task records as seen by the reminder subsystem, and the event pushed to subscribers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier.
pub type TaskId = Uuid;

/// A tracked task.
///
/// The reminder worker only reads these fields. A task with no
/// `reminder_at` is never eligible for a reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identifier.
    #[serde(rename = "guid")]
    pub id: TaskId,
    /// Short human-readable title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Calendar day the task is due.
    pub due_date: NaiveDate,
    /// Instant at which a reminder should fire, if any.
    pub reminder_at: Option<DateTime<Utc>>,
    /// Completion flag.
    pub is_done: bool,
    /// Soft-delete marker; inactive tasks are hidden from scans.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create an active, undone task with a fresh identifier.
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            due_date,
            reminder_at: None,
            is_done: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Set the reminder instant.
    #[must_use]
    pub fn with_reminder(mut self, reminder_at: DateTime<Utc>) -> Self {
        self.reminder_at = Some(reminder_at);
        self
    }

    /// Whether the task shows up in "active, undone" listings.
    pub const fn is_pending(&self) -> bool {
        self.is_active && !self.is_done
    }

    /// Record a modification.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Payload broadcast to subscribers when a task is due soon.
///
/// Serialized as `{"guid": .., "title": .., "dueDate": "YYYY-MM-DD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderEvent {
    /// Identifier of the task being reminded about.
    pub guid: TaskId,
    /// Task title.
    pub title: String,
    /// Task due date.
    pub due_date: NaiveDate,
}

impl From<&Task> for ReminderEvent {
    fn from(task: &Task) -> Self {
        Self {
            guid: task.id,
            title: task.title.clone(),
            due_date: task.due_date,
        }
    }
}
