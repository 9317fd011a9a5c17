//! Size-scale generation and responsive clamp derivation.
//!
//! This is the numeric core of the application. Everything here is pure:
//! no I/O, no global state. The CLI, TUI and web API all drive the same
//! three entry points:
//!
//! - [`generate_sizes`] expands a base size into an ordered size sequence
//! - [`ScaleState`] owns a sequence plus its manual overrides and reconciles
//!   them when parameters change
//! - [`clamp_for_size`] turns one size into a viewport-responsive
//!   `clamp()` expression

pub mod clamp;
pub mod error;
pub mod generator;
pub mod state;

pub use clamp::{clamp_for_size, derive_clamp, ClampExpression};
pub use error::{ScaleError, ScaleResult};
pub use generator::{generate_sizes, uniform_step_size};
pub use state::ScaleState;
