//! Notification hubs.

pub mod broadcast;

pub use broadcast::BroadcastHub;
