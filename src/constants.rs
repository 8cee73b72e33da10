//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Shortkeys";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "shortkeys";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "Shortkeys";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SHORTKEYS_CONFIG_DIR";
