//! Runtime adapters and the API surface toward clients.

pub mod api;
pub mod tokio_spawner;

pub use api::{render_reminder, CreateTask, HubMessage, UpdateTask, REMINDER_EVENT};
pub use tokio_spawner::{TokioSpawner, WorkerHandle};
