//! Due-soon selection: which tasks have a reminder inside the look-ahead window.
//!
//! A task is due soon when its reminder instant lies in `(now, now + horizon]`:
//! strictly after "now" and no later than the deadline. A zero horizon
//! collapses the window to nothing. Horizons are unsigned, so a negative
//! window cannot be expressed; a horizon too large for the calendar
//! saturates at the latest representable instant.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use super::task::Task;
use crate::util::clock::Clock;

/// Filters task snapshots against a reminder window anchored at the clock's "now".
#[derive(Clone)]
pub struct DueSoonSelector {
    clock: Arc<dyn Clock>,
}

impl DueSoonSelector {
    /// Create a selector reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Current instant according to the selector's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Select the tasks whose reminder falls inside `horizon`, preserving input order.
    pub fn due_soon<I>(&self, tasks: I, horizon: Duration) -> Vec<Task>
    where
        I: IntoIterator<Item = Task>,
    {
        due_soon_at(tasks, horizon, self.clock.now())
    }
}

impl std::fmt::Debug for DueSoonSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DueSoonSelector").finish_non_exhaustive()
    }
}

/// Select due-soon tasks relative to an explicit `now`.
pub fn due_soon_at<I>(tasks: I, horizon: Duration, now: DateTime<Utc>) -> Vec<Task>
where
    I: IntoIterator<Item = Task>,
{
    let deadline = window_deadline(now, horizon);
    tasks
        .into_iter()
        .filter(|task| in_window(task, now, deadline))
        .collect()
}

/// Upper (inclusive) bound of the window starting at `now`.
pub fn window_deadline(now: DateTime<Utc>, horizon: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(horizon)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn in_window(task: &Task, now: DateTime<Utc>, deadline: DateTime<Utc>) -> bool {
    task.reminder_at
        .is_some_and(|reminder| reminder > now && reminder <= deadline)
}
