/// Typed error hierarchy for UsbSleuth operations.
///
/// Every OS query is fallible and returns one of these, so each call site
/// chooses between recovering with a safe default and propagating.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UsbSleuthError>;

#[derive(Error, Debug)]
pub enum UsbSleuthError {
    /// The OS could not report the set of mounted volumes.
    #[error("volume enumeration failed: {0}")]
    Enumeration(String),

    /// The drive-type query for a volume failed.
    #[error("drive type query failed for {volume}: {reason}")]
    DriveType { volume: String, reason: String },

    /// The volume metadata query for a volume failed.
    #[error("volume information query failed for {volume}: {reason}")]
    VolumeInfo { volume: String, reason: String },

    /// Appending to the activity log failed.
    #[error("failed to write activity log '{}': {source}", path.display())]
    LogWrite { path: PathBuf, source: io::Error },

    /// Reading or parsing `config.toml` failed.
    #[error("configuration error in '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// The console control handler could not be installed.
    #[error("failed to install console control handler: {0}")]
    ControlHandler(String),

    /// No OS volume query interface exists for this target.
    #[error("volume monitoring is not supported on this platform ({0})")]
    UnsupportedPlatform(&'static str),
}
