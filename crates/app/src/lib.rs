//! epochms application library
//!
//! CLI parsing, config file handling, logging setup and the sampling loop,
//! exposed for the binary and for testing.

pub mod cli;
pub mod config;
pub mod logging;
pub mod sample;
