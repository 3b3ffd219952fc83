/// Data model — volume identifiers, snapshots, and listing entries.
pub mod entry;
pub mod volume;

pub use entry::{DirectoryEntry, EntryKind};
pub use volume::{DriveType, VolumeId, VolumeInfo, VolumeSnapshot};
