//! Tokio runtime spawner for the reminder worker.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::core::{ReminderError, ReminderWorker, WorkerExit};

/// Tokio-based spawner that runs the worker as a background task.
#[derive(Clone)]
pub struct TokioSpawner {
    handle: Arc<tokio::runtime::Handle>,
}

impl TokioSpawner {
    /// Create a `TokioSpawner` from a tokio runtime handle.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Spawner bound to the runtime the caller is running on.
    ///
    /// Panics outside a tokio runtime, like [`tokio::runtime::Handle::current`].
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }

    /// Start the worker loop with a fresh shutdown token.
    pub fn spawn_worker(&self, worker: ReminderWorker) -> WorkerHandle {
        self.spawn_worker_with_token(worker, CancellationToken::new())
    }

    /// Start the worker loop observing `shutdown`, e.g. a child of a process-wide token.
    pub fn spawn_worker_with_token(
        &self,
        worker: ReminderWorker,
        shutdown: CancellationToken,
    ) -> WorkerHandle {
        let token = shutdown.clone();
        let join = self.handle.spawn(async move { worker.run(token).await });
        WorkerHandle { shutdown, join }
    }
}

impl std::fmt::Debug for TokioSpawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioSpawner").finish_non_exhaustive()
    }
}

/// Handle to a running worker: signal with [`WorkerHandle::cancel`], then join.
#[derive(Debug)]
pub struct WorkerHandle {
    shutdown: CancellationToken,
    join: JoinHandle<WorkerExit>,
}

impl WorkerHandle {
    /// Token the worker observes.
    pub fn token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Request shutdown without waiting.
    pub fn cancel(&self) {
        self.shutdown.cancel();
    }

    /// Whether the worker task has returned.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the worker to return on its own (disabled, or cancelled elsewhere).
    pub async fn join(self) -> Result<WorkerExit, ReminderError> {
        self.join
            .await
            .map_err(|e| ReminderError::Worker(e.to_string()))
    }

    /// Signal shutdown and wait for the loop to exit.
    pub async fn shutdown(self) -> Result<WorkerExit, ReminderError> {
        self.cancel();
        self.join().await
    }
}
