//! Action provider implementations.

mod autopilot;

pub use autopilot::Autopilot;
