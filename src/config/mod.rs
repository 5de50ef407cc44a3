//! Configuration models for the reminder worker.

pub mod worker;

pub use worker::WorkerOptions;
