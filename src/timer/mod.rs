//! Virtual-time timers.
//!
//! Sessions own `TimerId` handles for everything they schedule and cancel
//! them when the session is replaced.

pub mod scheduler;

pub use scheduler::{Fired, Recurrence, Scheduler, TimerId};
