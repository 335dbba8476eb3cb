//! # Autotune Library
//!
//! This library exposes the Autotune CLI commands for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export autotune_core for convenience
pub use autotune_core;
