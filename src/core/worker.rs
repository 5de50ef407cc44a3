//! Background reminder loop.
//!
//! One long-lived worker repeats a cycle until shutdown:
//!
//! 1. fetch a fresh snapshot of active, undone tasks from the [`TaskSource`]
//! 2. keep the ones whose reminder falls inside the horizon
//! 3. broadcast one [`ReminderEvent`] per due task, in selector order, awaiting each send
//! 4. sleep for the configured interval
//!
//! Every suspension point (fetch, each send, the sleep) races the shutdown
//! token, so cancellation is observed promptly. A failed cycle is logged and
//! the loop carries on; only cancellation ends it.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use task_reminders::config::WorkerOptions;
//! use task_reminders::core::ReminderWorker;
//! use task_reminders::infra::{BroadcastHub, InMemoryTaskStore};
//! use task_reminders::util::SystemClock;
//!
//! let store = Arc::new(InMemoryTaskStore::new());
//! let hub = Arc::new(BroadcastHub::default());
//! let worker = ReminderWorker::new(WorkerOptions::default(), Arc::new(SystemClock), store, hub)?;
//!
//! let shutdown = CancellationToken::new();
//! let exit = worker.run(shutdown.clone()).await;
//! ```

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::error::ReminderError;
use super::ledger::NotificationLedger;
use super::selector::DueSoonSelector;
use super::source::{NotificationSink, TaskSource};
use super::task::{ReminderEvent, Task};
use crate::config::WorkerOptions;
use crate::util::clock::Clock;

/// Why the worker loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// Configuration disabled the worker; no scan ever ran.
    Disabled,
    /// Shutdown was requested.
    Cancelled,
}

/// Outcome of a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Tasks returned by the source.
    pub scanned: usize,
    /// Tasks inside the reminder window.
    pub due: usize,
    /// Reminders broadcast successfully.
    pub sent: usize,
    /// Reminders the sink rejected.
    pub failed: usize,
    /// Reminders suppressed because they were already sent (de-duplication only).
    pub skipped: usize,
}

/// Periodic due-soon scanner with push fan-out.
pub struct ReminderWorker {
    options: WorkerOptions,
    selector: DueSoonSelector,
    source: Arc<dyn TaskSource>,
    sink: Arc<dyn NotificationSink>,
    ledger: Option<NotificationLedger>,
}

impl ReminderWorker {
    /// Wire a worker from its options and collaborators.
    ///
    /// Fails with [`ReminderError::InvalidConfig`] when `options` do not pass
    /// [`WorkerOptions::validate`], so a zero interval never reaches the loop.
    pub fn new(
        options: WorkerOptions,
        clock: Arc<dyn Clock>,
        source: Arc<dyn TaskSource>,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, ReminderError> {
        options
            .validate()
            .map_err(|e| ReminderError::InvalidConfig(format!("worker options invalid: {e}")))?;

        let ledger = options.dedupe.then(NotificationLedger::new);
        Ok(Self {
            options,
            selector: DueSoonSelector::new(clock),
            source,
            sink,
            ledger,
        })
    }

    /// Options the worker was built with.
    pub const fn options(&self) -> &WorkerOptions {
        &self.options
    }

    /// Run until `shutdown` fires, or return immediately when disabled.
    pub async fn run(&self, shutdown: CancellationToken) -> WorkerExit {
        if !self.options.enabled {
            tracing::info!("reminder worker is disabled");
            return WorkerExit::Disabled;
        }

        tracing::info!(
            horizon_minutes = self.options.horizon_minutes,
            interval_seconds = self.options.interval_seconds,
            dedupe = self.options.dedupe,
            "reminder worker started at {}",
            self.selector.now()
        );

        loop {
            match self.run_cycle(&shutdown).await {
                Ok(report) => tracing::debug!(
                    scanned = report.scanned,
                    due = report.due,
                    sent = report.sent,
                    failed = report.failed,
                    skipped = report.skipped,
                    "reminder cycle finished"
                ),
                Err(ReminderError::Cancelled) => break,
                Err(e) => tracing::error!("reminder worker error: {}", e),
            }

            if self.wait_interval(&shutdown).await.is_err() {
                break;
            }
        }

        tracing::info!("reminder worker is stopping");
        WorkerExit::Cancelled
    }

    /// Execute one fetch, select, notify pass.
    ///
    /// A fetch failure aborts the cycle before any send. A failed send is
    /// logged and counted, and the remaining due tasks are still attempted.
    /// Returns [`ReminderError::Cancelled`] if shutdown interrupts the cycle.
    pub async fn run_cycle(&self, shutdown: &CancellationToken) -> Result<CycleReport, ReminderError> {
        let tasks = until_cancelled(shutdown, self.source.list_active_undone()).await?;

        if let Some(ledger) = &self.ledger {
            ledger.retain_active(&tasks);
        }

        let scanned = tasks.len();
        let due = self.selector.due_soon(tasks, self.options.horizon());
        let mut report = CycleReport {
            scanned,
            due: due.len(),
            ..CycleReport::default()
        };

        for task in &due {
            if self.ledger.as_ref().is_some_and(|l| l.already_notified(task)) {
                report.skipped += 1;
                continue;
            }
            match self.notify(shutdown, task).await {
                Ok(()) => report.sent += 1,
                Err(ReminderError::Cancelled) => return Err(ReminderError::Cancelled),
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!("failed to send reminder for task {}: {}", task.id, e);
                }
            }
        }

        Ok(report)
    }

    async fn notify(&self, shutdown: &CancellationToken, task: &Task) -> Result<(), ReminderError> {
        until_cancelled(shutdown, self.sink.broadcast(ReminderEvent::from(task))).await?;
        if let Some(ledger) = &self.ledger {
            ledger.mark_notified(task);
        }
        tracing::info!(
            "sent reminder for task {} due at {}",
            task.title,
            task.due_date
        );
        Ok(())
    }

    /// Sleep for the interval; `Err(Cancelled)` if shutdown fires first.
    async fn wait_interval(&self, shutdown: &CancellationToken) -> Result<(), ReminderError> {
        tokio::select! {
            biased;
            () = shutdown.cancelled() => Err(ReminderError::Cancelled),
            () = tokio::time::sleep(self.options.interval()) => Ok(()),
        }
    }
}

impl std::fmt::Debug for ReminderWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReminderWorker")
            .field("options", &self.options)
            .field("dedupe_entries", &self.ledger.as_ref().map(NotificationLedger::len))
            .finish_non_exhaustive()
    }
}

async fn until_cancelled<F, T>(shutdown: &CancellationToken, fut: F) -> Result<T, ReminderError>
where
    F: Future<Output = Result<T, ReminderError>>,
{
    tokio::select! {
        biased;
        () = shutdown.cancelled() => Err(ReminderError::Cancelled),
        res = fut => res,
    }
}
