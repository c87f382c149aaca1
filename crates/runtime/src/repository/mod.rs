//! Storage for what a session did.

mod action_log;

pub use action_log::{ActionLog, ActionLogEntry};
