//! Shared utilities: time sources and telemetry.

pub mod clock;
pub mod telemetry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use telemetry::init_tracing;
