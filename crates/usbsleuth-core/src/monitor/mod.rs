/// Volume monitor — turns successive volume snapshots into activity records.
///
/// The monitor owns the only piece of state in the system: the snapshot
/// taken on the previous poll. Each poll diffs the fresh snapshot against it
/// and writes one record per inserted or removed volume.
///
/// # Usage
///
/// ```ignore
/// let stop = Arc::new(AtomicBool::new(false));
/// let mut monitor = Monitor::new(SystemVolumes::new()?, EventLog::new(path), interval)?;
/// monitor.run(&stop);
/// ```
///
/// # Cancellation
///
/// Set the stop flag to `true`. The sleep between polls is sliced so the
/// flag is observed within [`CANCEL_CHECK_INTERVAL_MS`] of being set; a poll
/// already in progress always completes.
use crate::classify;
use crate::constants::{CANCEL_CHECK_INTERVAL_MS, LISTING_INDENT, SEPARATOR_WIDTH};
use crate::content;
use crate::logger::EventLog;
use crate::model::{VolumeId, VolumeSnapshot};
use crate::platform::VolumeSource;
use crate::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Volumes that appeared and disappeared in one poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    pub inserted: Vec<VolumeId>,
    pub removed: Vec<VolumeId>,
}

impl PollReport {
    /// True when the poll produced no events.
    pub fn is_quiet(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty()
    }
}

/// Polling monitor over a [`VolumeSource`].
pub struct Monitor<S: VolumeSource> {
    source: S,
    log: EventLog,
    poll_interval: Duration,
    previous: VolumeSnapshot,
}

impl<S: VolumeSource> Monitor<S> {
    /// Capture the baseline snapshot. Volumes mounted now are never reported
    /// as inserted.
    ///
    /// Fails if the initial enumeration fails, before any polling starts.
    pub fn new(source: S, log: EventLog, poll_interval: Duration) -> Result<Self> {
        let previous = source.list_volumes()?;
        info!(
            volumes = previous.len(),
            interval_secs = poll_interval.as_secs_f64(),
            log = %log.path().display(),
            "Monitor baseline captured"
        );
        Ok(Self {
            source,
            log,
            poll_interval,
            previous,
        })
    }

    /// Snapshot retained from the last successful poll.
    pub fn previous(&self) -> &VolumeSnapshot {
        &self.previous
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Poll until `stop` is set, sleeping the configured interval before
    /// each poll. Enumeration failures skip that poll and keep the previous
    /// snapshot.
    pub fn run(&mut self, stop: &AtomicBool) {
        info!("Monitor loop started");
        while sleep_unless_stopped(self.poll_interval, stop) {
            if let Err(e) = self.poll_once() {
                warn!(error = %e, "Volume enumeration failed; skipping this poll");
            }
        }
        info!("Monitor loop stopped");
    }

    /// Enumerate once, record every change against the previous snapshot,
    /// and make the new snapshot current.
    ///
    /// On enumeration failure nothing is recorded and the previous snapshot
    /// is kept.
    pub fn poll_once(&mut self) -> Result<PollReport> {
        let current = self.source.list_volumes()?;
        let report = PollReport {
            inserted: current.inserted_since(&self.previous),
            removed: current.removed_since(&self.previous),
        };

        for id in &report.inserted {
            self.record_inserted(id);
        }
        for id in &report.removed {
            info!(volume = %id, "Drive removed");
            self.record(&format!("Drive removed: {id}"), true);
        }

        debug!(
            volumes = current.len(),
            inserted = report.inserted.len(),
            removed = report.removed.len(),
            "Poll complete"
        );
        self.previous = current;
        Ok(report)
    }

    fn record_inserted(&self, id: &VolumeId) {
        if !classify::is_removable(&self.source, id) {
            info!(volume = %id, "Non-removable drive appeared");
            self.record(&format!("New non-removable drive detected: {id}"), true);
            return;
        }

        let label = classify::volume_label(&self.source, id);
        info!(volume = %id, label = %label, "USB drive inserted");
        self.record(&format!("USB inserted: Drive {id} | Label: {label}"), true);
        self.record("Contents:", true);

        // Gather the whole listing before writing any of it.
        let entries = content::list_contents(&self.source.root_path(id));
        for entry in &entries {
            self.record(&format!("{LISTING_INDENT}{entry}"), false);
        }
        self.record(&"-".repeat(SEPARATOR_WIDTH), false);
    }

    /// Write one activity line. A failed write is reported on stderr and
    /// does not interrupt the poll.
    fn record(&self, text: &str, include_timestamp: bool) {
        if let Err(e) = self.log.log_event(text, include_timestamp) {
            error!(error = %e, line = text, "Activity log write failed");
        }
    }
}

/// Sleep for `interval` in short slices. Returns `false` as soon as `stop`
/// is observed, `true` once the full interval has elapsed.
fn sleep_unless_stopped(interval: Duration, stop: &AtomicBool) -> bool {
    let deadline = Instant::now() + interval;
    let slice = Duration::from_millis(CANCEL_CHECK_INTERVAL_MS);
    loop {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        std::thread::sleep(slice.min(deadline - now));
    }
}
