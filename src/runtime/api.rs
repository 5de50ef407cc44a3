//! API-facing request models and the wire envelope pushed to subscribers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{ReminderError, ReminderEvent};

/// Event name subscribers listen on.
pub const REMINDER_EVENT: &str = "Reminder";
/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Message framing for persistent-connection transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubMessage {
    /// Client-side handler name.
    pub target: String,
    /// Handler arguments.
    pub arguments: Vec<ReminderEvent>,
}

impl HubMessage {
    /// Wrap a reminder under the [`REMINDER_EVENT`] target.
    pub fn reminder(event: ReminderEvent) -> Self {
        Self {
            target: REMINDER_EVENT.to_string(),
            arguments: vec![event],
        }
    }

    /// Serialize to a JSON text frame.
    pub fn to_json(&self) -> Result<String, ReminderError> {
        serde_json::to_string(self).map_err(|e| ReminderError::Send(format!("encode error: {e}")))
    }
}

/// Human-readable line a client shows for a reminder.
pub fn render_reminder(event: &ReminderEvent) -> String {
    format!("Reminder: {} is due on {}", event.title, event.due_date)
}

/// Task creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    /// Title; trimmed, required.
    pub title: String,
    /// Optional description; blank becomes `None`.
    #[serde(default)]
    pub description: Option<String>,
    /// Due day.
    pub due_date: NaiveDate,
    /// Optional reminder instant.
    #[serde(default)]
    pub reminder_at: Option<DateTime<Utc>>,
}

/// Full replacement of a task's editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    /// Title; trimmed, required.
    pub title: String,
    /// Optional description; blank becomes `None`.
    #[serde(default)]
    pub description: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub is_done: bool,
    /// Due day.
    pub due_date: NaiveDate,
    /// Reminder instant; `None` clears it.
    #[serde(default)]
    pub reminder_at: Option<DateTime<Utc>>,
}

impl CreateTask {
    /// Check title and description limits.
    pub fn validate(&self) -> Result<(), ReminderError> {
        validate_fields(&self.title, self.description.as_deref())
    }
}

impl UpdateTask {
    /// Check title and description limits.
    pub fn validate(&self) -> Result<(), ReminderError> {
        validate_fields(&self.title, self.description.as_deref())
    }
}

fn validate_fields(title: &str, description: Option<&str>) -> Result<(), ReminderError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ReminderError::Validation("Title is required.".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ReminderError::Validation(format!(
            "Title must not exceed {MAX_TITLE_LEN} characters."
        )));
    }
    if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN) {
        return Err(ReminderError::Validation(format!(
            "Description must not exceed {MAX_DESCRIPTION_LEN} characters."
        )));
    }
    Ok(())
}

/// Trim a description, mapping blank input to `None`.
pub(crate) fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
