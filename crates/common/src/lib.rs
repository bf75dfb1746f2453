//! Ghosthand Common Utilities
//!
//! Shared infrastructure for all Ghosthand crates:
//! - Error types and result aliases
//! - Clock and timestamp utilities for movement scheduling
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
