/// One-level root directory listing for an inserted volume.
///
/// The listing is gathered eagerly in whatever order the OS yields entries.
/// It never fails: an unreadable directory becomes a single
/// [`EntryKind::ErrorPlaceholder`](crate::model::EntryKind) entry, and an
/// error on an individual entry becomes a placeholder in its position.
use crate::model::DirectoryEntry;
use std::fs;
use std::path::Path;
use tracing::warn;

/// List the top-level entries of `root` without recursing.
pub fn list_contents(root: &Path) -> Vec<DirectoryEntry> {
    let dir = match fs::read_dir(root) {
        Ok(dir) => dir,
        Err(e) => {
            warn!(path = %root.display(), error = %e, "Could not read volume root");
            return vec![DirectoryEntry::error(e.to_string())];
        }
    };

    let mut entries = Vec::new();
    for item in dir {
        match item {
            Ok(entry) => {
                let name = entry.file_name().to_string_lossy().into_owned();
                // `Path::is_dir` follows symlinks and junctions, so a link to a
                // folder is listed as a folder.
                if entry.path().is_dir() {
                    entries.push(DirectoryEntry::folder(name));
                } else {
                    entries.push(DirectoryEntry::file(name));
                }
            }
            Err(e) => {
                warn!(path = %root.display(), error = %e, "Directory entry unreadable");
                entries.push(DirectoryEntry::error(e.to_string()));
            }
        }
    }

    tracing::debug!(path = %root.display(), entries = entries.len(), "Volume root listed");
    entries
}
