//! Infrastructure adapters for task storage and notification fan-out.

pub mod hub;
pub mod store;

pub use hub::BroadcastHub;
pub use store::InMemoryTaskStore;
