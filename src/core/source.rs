//! Collaborator traits consumed by the reminder worker.

use std::sync::Arc;

use async_trait::async_trait;

use super::error::ReminderError;
use super::task::{ReminderEvent, Task};

/// Read-only view over the task store.
///
/// Implementations return a snapshot of tasks that are active (not soft
/// deleted) and not yet done. The worker never assumes the snapshot is
/// sorted by reminder instant. Consistency with concurrent writers is the
/// implementation's responsibility.
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use task_reminders::core::{ReminderError, Task, TaskSource};
///
/// struct PostgresTasks { pool: sqlx::PgPool }
///
/// #[async_trait]
/// impl TaskSource for PostgresTasks {
///     async fn list_active_undone(&self) -> Result<Vec<Task>, ReminderError> {
///         load_pending(&self.pool)
///             .await
///             .map_err(|e| ReminderError::Fetch(e.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait TaskSource: Send + Sync + 'static {
    /// Fetch every active, undone task.
    async fn list_active_undone(&self) -> Result<Vec<Task>, ReminderError>;
}

/// Push channel toward every currently connected subscriber.
///
/// Delivery is fire-and-forget from each subscriber's point of view; the
/// worker only learns whether the broadcast as a whole was accepted.
#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    /// Broadcast one reminder event.
    async fn broadcast(&self, event: ReminderEvent) -> Result<(), ReminderError>;
}

#[async_trait]
impl<T: TaskSource + ?Sized> TaskSource for Arc<T> {
    async fn list_active_undone(&self) -> Result<Vec<Task>, ReminderError> {
        (**self).list_active_undone().await
    }
}

#[async_trait]
impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    async fn broadcast(&self, event: ReminderEvent) -> Result<(), ReminderError> {
        (**self).broadcast(event).await
    }
}
