//! Reminder core: task model, due-soon selection, collaborator traits and the worker loop.

pub mod error;
pub mod ledger;
pub mod selector;
pub mod source;
pub mod task;
pub mod worker;

pub use error::ReminderError;
pub use ledger::NotificationLedger;
pub use selector::{due_soon_at, window_deadline, DueSoonSelector};
pub use source::{NotificationSink, TaskSource};
pub use task::{ReminderEvent, Task, TaskId};
pub use worker::{CycleReport, ReminderWorker, WorkerExit};
