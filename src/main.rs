//! UsbSleuth — removable-drive activity logger.
//!
//! Thin binary entry point. All monitoring logic lives in `usbsleuth-core`;
//! this file parses arguments, resolves configuration, and runs the loop
//! until Ctrl+C.

mod logging;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use usbsleuth_core::config::{self, AppConfig};
use usbsleuth_core::logger::EventLog;
use usbsleuth_core::monitor::Monitor;
use usbsleuth_core::platform::{console, SystemVolumes, VolumeSource};
use usbsleuth_core::{classify, constants};

/// UsbSleuth - Removable-drive activity logger.
///
/// Polls the mounted volumes and appends a timestamped record of every USB
/// insertion (label and root listing) and removal to a plain-text log.
#[derive(Parser, Debug)]
#[command(name = "UsbSleuth", version, about)]
struct Cli {
    /// Activity log destination [default: usb_activity_log.txt].
    #[arg(short = 'l', long = "log-file")]
    log_file: Option<PathBuf>,

    /// Seconds between volume polls (1-3600) [default: 2].
    #[arg(
        short = 'i',
        long = "interval",
        value_parser = clap::value_parser!(u64).range(1..=3600)
    )]
    interval: Option<u64>,

    /// Explicit config.toml (defaults to the per-user config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the currently mounted drives with type and label, then exit.
    #[arg(long = "list-drives")]
    list_drives: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Config file layer: `--config` if given, else the platform default.
fn load_file_config(cli: &Cli) -> anyhow::Result<(AppConfig, Vec<String>)> {
    match (&cli.config, config::default_config_path()) {
        (Some(path), _) => config::load_config(path, true)
            .with_context(|| format!("Could not load config file '{}'", path.display())),
        (None, Some(path)) => Ok(config::load_config(&path, false)?),
        (None, None) => Ok((
            AppConfig::default(),
            vec!["Could not determine the platform config directory; using defaults".to_owned()],
        )),
    }
}

fn print_drives(source: &impl VolumeSource) -> anyhow::Result<()> {
    let volumes = source
        .list_volumes()
        .context("Could not enumerate mounted volumes")?;
    for id in volumes.iter() {
        let drive_type = source
            .drive_type(id)
            .map(|t| t.label())
            .unwrap_or("Unknown");
        let label = classify::volume_label(source, id);
        println!("{id:<4} {drive_type:<18} {label}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics level may come from the config file, so load it first and
    // report its warnings once the subscriber exists.
    let (file_config, warnings) = load_file_config(&cli)?;
    logging::init(cli.debug, file_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "UsbSleuth starting"
    );
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let source =
        SystemVolumes::new().context("Could not initialise the OS volume query interface")?;

    if cli.list_drives {
        return print_drives(&source);
    }

    let log_path = cli.log_file.unwrap_or(file_config.log_path);
    let interval = cli
        .interval
        .map(Duration::from_secs)
        .unwrap_or(file_config.poll_interval);

    let stop = Arc::new(AtomicBool::new(false));
    console::install_stop_handler(Arc::clone(&stop))
        .context("Could not install the Ctrl+C handler")?;

    let mut monitor = Monitor::new(source, EventLog::new(log_path), interval)
        .context("Initial volume enumeration failed")?;

    println!("Monitoring for USB drives. Press Ctrl+C to stop.");
    monitor.run(&stop);

    tracing::info!("UsbSleuth stopped");
    Ok(())
}
