/// Volume identifiers and point-in-time volume snapshots.
///
/// A `VolumeSnapshot` is the complete set of mounted volumes at one polling
/// instant. Snapshots are immutable once captured; the monitor replaces its
/// retained snapshot every iteration.
use std::fmt;
use std::path::PathBuf;

/// Opaque, comparable token for one mounted volume, e.g. `"E:"`.
///
/// Equal tokens denote the same mount across polling iterations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VolumeId(String);

impl VolumeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for a drive letter, e.g. `'E'` becomes `"E:"`.
    pub fn from_letter(letter: char) -> Self {
        Self(format!("{}:", letter.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Root directory of the volume, e.g. `"E:\"`.
    pub fn root(&self) -> PathBuf {
        PathBuf::from(format!("{}\\", self.0))
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// The set of volumes mounted at one instant, in enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VolumeSnapshot {
    volumes: Vec<VolumeId>,
}

impl VolumeSnapshot {
    /// Build a snapshot, collapsing duplicates while keeping first-seen order.
    pub fn new(ids: impl IntoIterator<Item = VolumeId>) -> Self {
        let mut volumes: Vec<VolumeId> = Vec::new();
        for id in ids {
            if !volumes.contains(&id) {
                volumes.push(id);
            }
        }
        Self { volumes }
    }

    /// Decode a `GetLogicalDrives`-style bitmask: bit `i` set means drive
    /// letter `'A' + i` is assigned. Bits above `Z` are ignored.
    pub fn from_drive_mask(mask: u32) -> Self {
        let volumes = (0..26u8)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| VolumeId::from_letter(char::from(b'A' + i)))
            .collect();
        Self { volumes }
    }

    pub fn contains(&self, id: &VolumeId) -> bool {
        self.volumes.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VolumeId> {
        self.volumes.iter()
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Volumes in `self` that were not in `previous` (`self − previous`),
    /// in `self`'s enumeration order.
    pub fn inserted_since(&self, previous: &VolumeSnapshot) -> Vec<VolumeId> {
        self.iter()
            .filter(|id| !previous.contains(id))
            .cloned()
            .collect()
    }

    /// Volumes in `previous` that are no longer in `self` (`previous − self`),
    /// in `previous`'s enumeration order.
    pub fn removed_since(&self, previous: &VolumeSnapshot) -> Vec<VolumeId> {
        previous
            .iter()
            .filter(|id| !self.contains(id))
            .cloned()
            .collect()
    }
}

impl FromIterator<VolumeId> for VolumeSnapshot {
    fn from_iter<T: IntoIterator<Item = VolumeId>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Drive type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveType {
    Fixed,
    Removable,
    Network,
    CdRom,
    RamDisk,
    NoRootDir,
    Unknown,
}

impl DriveType {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Removable => "Removable",
            Self::Network => "Network",
            Self::CdRom => "CD-ROM",
            Self::RamDisk => "RAM disk",
            Self::NoRootDir => "No root directory",
            Self::Unknown => "Unknown",
        }
    }

    /// Only removable media gets the detailed insertion record.
    pub fn is_removable(self) -> bool {
        self == Self::Removable
    }
}

/// Classification and label for one volume, derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeInfo {
    pub is_removable: bool,
    /// Volume label, or `"Unknown"` when the metadata query failed.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(ids: &[&str]) -> VolumeSnapshot {
        ids.iter().map(|s| VolumeId::new(*s)).collect()
    }

    fn ids(v: &[VolumeId]) -> Vec<&str> {
        v.iter().map(VolumeId::as_str).collect()
    }

    #[test]
    fn test_from_drive_mask() {
        // Bits 2 (C) and 4 (E).
        let s = VolumeSnapshot::from_drive_mask(0b10100);
        assert_eq!(s, snap(&["C:", "E:"]));
        assert!(VolumeSnapshot::from_drive_mask(0).is_empty());
    }

    #[test]
    fn test_from_drive_mask_ignores_high_bits() {
        let s = VolumeSnapshot::from_drive_mask(u32::MAX);
        assert_eq!(s.len(), 26);
        assert_eq!(s.iter().last().map(VolumeId::as_str), Some("Z:"));
    }

    #[test]
    fn test_duplicates_collapsed_in_order() {
        let s = snap(&["E:", "C:", "E:"]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().map(VolumeId::as_str).collect::<Vec<_>>(), ["E:", "C:"]);
    }

    #[test]
    fn test_inserted_and_removed() {
        let prev = snap(&["C:", "E:"]);
        let cur = snap(&["C:", "F:", "G:"]);
        assert_eq!(ids(&cur.inserted_since(&prev)), ["F:", "G:"]);
        assert_eq!(ids(&cur.removed_since(&prev)), ["E:"]);
    }

    #[test]
    fn test_diff_properties() {
        let prev = snap(&["A:", "C:", "D:", "E:"]);
        let cur = snap(&["C:", "E:", "F:"]);
        let inserted = cur.inserted_since(&prev);
        let removed = cur.removed_since(&prev);

        // Disjoint.
        assert!(inserted.iter().all(|id| !removed.contains(id)));

        // prev = (prev ∩ cur) ∪ removed
        let mut rebuilt: Vec<VolumeId> = prev.iter().filter(|id| cur.contains(id)).cloned().collect();
        rebuilt.extend(removed);
        rebuilt.sort();
        let mut expected: Vec<VolumeId> = prev.iter().cloned().collect();
        expected.sort();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let s = snap(&["C:", "D:"]);
        assert!(s.inserted_since(&s).is_empty());
        assert!(s.removed_since(&s).is_empty());
    }

    #[test]
    fn test_volume_id_root() {
        let id = VolumeId::from_letter('e');
        assert_eq!(id.as_str(), "E:");
        assert_eq!(id.root(), PathBuf::from("E:\\"));
    }

    #[test]
    fn test_only_removable_is_removable() {
        assert!(DriveType::Removable.is_removable());
        for t in [
            DriveType::Fixed,
            DriveType::Network,
            DriveType::CdRom,
            DriveType::RamDisk,
            DriveType::NoRootDir,
            DriveType::Unknown,
        ] {
            assert!(!t.is_removable(), "{} must not be removable", t.label());
        }
    }
}
