//! Builders to construct reminder components from configuration.

pub mod worker_builder;

pub use worker_builder::build_reminder_worker;
