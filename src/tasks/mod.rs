//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Page cleanup: Removes stale pages at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
