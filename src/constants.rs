//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Typescale";

/// The binary name of the application (used as the CLI command name).
pub const APP_BINARY_NAME: &str = "typescale";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "Typescale";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TYPESCALE_CONFIG_DIR";
