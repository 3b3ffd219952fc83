/// UsbSleuth Core — volume polling, classification, and activity logging.
///
/// This crate contains all monitoring logic with no terminal or CLI
/// dependencies. The binary crate only parses arguments and wires these
/// pieces together.
///
/// # Modules
///
/// - [`model`] — Volume identifiers, snapshots, and directory entries.
/// - [`platform`] — The `VolumeSource` seam and its Windows implementation.
/// - [`classify`] — Removable-media classification and volume labels.
/// - [`content`] — One-level root directory listing.
/// - [`logger`] — Append-only activity log with stdout mirroring.
/// - [`monitor`] — The polling loop that turns snapshot diffs into events.
/// - [`config`] — `config.toml` loading and validation.
pub mod classify;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod logger;
pub mod model;
pub mod monitor;
pub mod platform;

pub use error::{Result, UsbSleuthError};
