pub mod clock;

// Re-exports
pub use clock::*;
