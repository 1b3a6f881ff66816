//! epochms Core - wall-clock time in milliseconds since the Unix epoch
//!
//! This crate contains the timestamp domain type, the clock port and the
//! time source built on top of it. The only outside state it touches is the
//! platform realtime clock, reached through [`ports::Clock`] so callers and
//! tests can inject their own.

pub mod domain;
pub mod ports;
pub mod source;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
pub use source::{now_millis, now_millis_from};
