//! Error types for reminder operations.

use thiserror::Error;

use super::task::TaskId;

/// Errors produced by reminder components and their collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReminderError {
    /// The task source could not produce a snapshot.
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// The notification sink rejected an event.
    #[error("send failed: {0}")]
    Send(String),
    /// The operation observed a shutdown request.
    #[error("cancelled")]
    Cancelled,
    /// Worker options failed validation or could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A task create/update request was rejected.
    #[error("validation failed: {0}")]
    Validation(String),
    /// No task with the given identifier exists.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The background worker task panicked or was aborted.
    #[error("worker failed: {0}")]
    Worker(String),
}

impl ReminderError {
    /// Whether this error represents a shutdown rather than a failure.
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
