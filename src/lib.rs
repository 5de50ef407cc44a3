//! # Task Reminders
//!
//! The reminder subsystem of a task-tracking service: a background worker that
//! periodically scans active tasks, picks the ones whose reminder is about to
//! fire, and pushes a live notification to every connected client.
//!
//! ## How a scan works
//!
//! - **Due-soon window**: a task is due soon when its reminder instant lies
//!   strictly after "now" and no later than "now + horizon"
//! - **Stateless cycles**: every scan recomputes the due set from the live task
//!   snapshot, so a missed or delayed cycle heals on the next one
//! - **Serialized fan-out**: reminders of one cycle are broadcast one at a time,
//!   in the order the task source returned them
//! - **Fault isolation**: a failed fetch or send is logged; the loop keeps going
//! - **Prompt shutdown**: fetch, sends and the inter-cycle sleep all observe a
//!   [`tokio_util::sync::CancellationToken`]
//!
//! Because cycles are stateless a task that stays inside the window is
//! notified on every scan. Set [`config::WorkerOptions::dedupe`] to notify once
//! per reminder instant instead.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use task_reminders::builders::build_reminder_worker;
//! use task_reminders::config::WorkerOptions;
//! use task_reminders::infra::{BroadcastHub, InMemoryTaskStore};
//! use task_reminders::runtime::TokioSpawner;
//! use task_reminders::util::{init_tracing, SystemClock};
//!
//! init_tracing();
//! let store = Arc::new(InMemoryTaskStore::new());
//! let hub = Arc::new(BroadcastHub::default());
//! let mut reminders = hub.subscribe();
//!
//! let worker = build_reminder_worker(
//!     WorkerOptions::from_env()?,
//!     Arc::new(SystemClock),
//!     store.clone(),
//!     hub.clone(),
//! )?;
//! let handle = TokioSpawner::current().spawn_worker(worker);
//!
//! // ... serve requests, forward `reminders` to websocket clients ...
//!
//! handle.shutdown().await?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Task model, due-soon selection, collaborator traits and the worker loop.
pub mod core;
/// Worker options and how they are loaded.
pub mod config;
/// Builders to construct the worker from configuration.
pub mod builders;
/// In-memory task store and broadcast notification hub.
pub mod infra;
/// Tokio spawner, worker handle and wire-level API models.
pub mod runtime;
/// Clocks and telemetry.
pub mod util;
