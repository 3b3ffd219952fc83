/// Named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "UsbSleuth";

/// Application identifier used for the platform config directory.
pub const APP_ID: &str = "UsbSleuth";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Activity log
// =============================================================================

/// Default activity log destination, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "usb_activity_log.txt";

/// `chrono` format for the bracketed timestamp prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the dashed separator written after each inserted-drive listing.
pub const SEPARATOR_WIDTH: usize = 40;

/// Indent applied to each listing line under `Contents:`.
pub const LISTING_INDENT: &str = "    ";

/// Label reported when the volume metadata query fails.
pub const UNKNOWN_LABEL: &str = "Unknown";

// =============================================================================
// Polling
// =============================================================================

/// Default delay between volume polls (seconds).
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// Minimum user-configurable poll interval (seconds).
pub const MIN_POLL_INTERVAL_SECS: u64 = 1;

/// Maximum user-configurable poll interval (seconds).
pub const MAX_POLL_INTERVAL_SECS: u64 = 3_600;

/// How often the stop flag is checked while sleeping between polls (ms).
pub const CANCEL_CHECK_INTERVAL_MS: u64 = 100;

// =============================================================================
// Diagnostics
// =============================================================================

/// Default `tracing` filter when neither `RUST_LOG` nor `--debug` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
