//! Default values for todo configuration.
//!
//! All hardcoded defaults are centralized here.

// ============================================================================
// Logging Defaults
// ============================================================================

/// Log filter used when neither `RUST_LOG` nor a config value is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ============================================================================
// Input Defaults
// ============================================================================

/// `chrono` format string used to parse due dates typed at the prompt.
pub const DEFAULT_INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Display Defaults
// ============================================================================

/// `chrono` format string used to render due dates in listings.
pub const DEFAULT_DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether listings flag open tasks whose due date has passed.
pub const DEFAULT_SHOW_OVERDUE: bool = true;

// ============================================================================
// File Locations
// ============================================================================

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "todo.toml";

/// Directory under the user's config dir holding `config.toml`.
pub const USER_CONFIG_DIR: &str = "todo";

/// User config file name.
pub const USER_CONFIG_FILE: &str = "config.toml";
