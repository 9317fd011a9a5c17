//! Data models for typographic scales.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of UI and output formats.

pub mod curve;
pub mod scale_config;
pub mod step;
pub mod viewport;

// Re-export all model types
pub use curve::{CurveType, Generation, ScaleMode};
pub use scale_config::ScaleConfig;
pub use step::{Step, MAX_STEPS, MIN_STEPS, PIVOT_INDEX, STEP_LABELS};
pub use viewport::ViewportParams;
