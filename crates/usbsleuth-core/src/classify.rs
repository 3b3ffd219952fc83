/// Removable-media classification and volume labels.
///
/// Both queries are best-effort. A failed drive-type query is treated as
/// non-removable, and a failed label query yields `"Unknown"`; neither ever
/// reaches the monitor as an error.
use crate::constants::UNKNOWN_LABEL;
use crate::model::{VolumeId, VolumeInfo};
use crate::platform::VolumeSource;
use tracing::warn;

/// Whether `id` is removable media. Query failures resolve to `false`.
pub fn is_removable<S: VolumeSource + ?Sized>(source: &S, id: &VolumeId) -> bool {
    match source.drive_type(id) {
        Ok(drive_type) => {
            tracing::debug!(volume = %id, drive_type = drive_type.label(), "Drive classified");
            drive_type.is_removable()
        }
        Err(e) => {
            warn!(volume = %id, error = %e, "Drive type unavailable; treating as non-removable");
            false
        }
    }
}

/// Volume label of `id`, or `"Unknown"` when the metadata query fails.
pub fn volume_label<S: VolumeSource + ?Sized>(source: &S, id: &VolumeId) -> String {
    match source.volume_label(id) {
        Ok(label) => label,
        Err(e) => {
            warn!(volume = %id, error = %e, "Volume label unavailable");
            UNKNOWN_LABEL.to_owned()
        }
    }
}

/// Classification and label together. The label is only queried for
/// removable volumes; other volumes report `"Unknown"`.
pub fn volume_info<S: VolumeSource + ?Sized>(source: &S, id: &VolumeId) -> VolumeInfo {
    let is_removable = is_removable(source, id);
    let label = if is_removable {
        volume_label(source, id)
    } else {
        UNKNOWN_LABEL.to_owned()
    };
    VolumeInfo {
        is_removable,
        label,
    }
}
