//! # innkeep Shared
//!
//! Configuration and error types used across all innkeep crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
