pub mod timestamp;

// Re-exports for convenience
pub use timestamp::*;
