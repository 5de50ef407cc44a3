//! Builders to construct a reminder worker from configuration.

use std::sync::Arc;

use crate::config::WorkerOptions;
use crate::core::{NotificationSink, ReminderError, ReminderWorker, TaskSource};
use crate::util::clock::Clock;

/// Validate `options` and wire a worker around the provided collaborators.
///
/// Validation itself happens in [`ReminderWorker::new`].
pub fn build_reminder_worker(
    options: WorkerOptions,
    clock: Arc<dyn Clock>,
    source: Arc<dyn TaskSource>,
    sink: Arc<dyn NotificationSink>,
) -> Result<ReminderWorker, ReminderError> {
    tracing::debug!(
        "building reminder worker (enabled={}, horizon={}m, interval={}s, dedupe={})",
        options.enabled,
        options.horizon_minutes,
        options.interval_seconds,
        options.dedupe
    );
    ReminderWorker::new(options, clock, source, sink)
}
