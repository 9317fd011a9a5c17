//! Typescale Library
//!
//! This library provides the core functionality for Typescale: generating
//! typographic size scales from a base size and a growth curve, reconciling
//! them with manual overrides, and deriving responsive CSS `clamp()`
//! expressions for every step.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod logging;
pub mod models;
pub mod scale;
#[cfg(feature = "ratatui")]
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
