//! # Autotune Core
//!
//! Settings value objects for the Autotune recommendation engine.
//!
//! This crate contains:
//! - [`RecommendationSettings`], the threshold holder handed to the engine
//! - [`formats`], JSON and binary encodings for external collaborators
//!
//! The crate is pure and synchronous. File I/O and logging remain in the
//! app layer (apps/autotune).

pub mod formats;
pub mod settings;

pub use formats::{FormatError, SettingsFormat};
pub use settings::RecommendationSettings;
