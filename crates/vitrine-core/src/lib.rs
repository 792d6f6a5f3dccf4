#![forbid(unsafe_code)]

//! Core: geometry, tween primitives, and canonical input events.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
