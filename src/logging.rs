//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so stdout stays a clean mirror of the activity
//! log. Priority: `RUST_LOG` > `--debug` > `[logging] level` > "info".

use tracing_subscriber::EnvFilter;
use usbsleuth_core::constants;

/// Initialise the `tracing` subscriber.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        "Logging initialised"
    );
}
