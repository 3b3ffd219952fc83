/// Root-directory listing entries.
///
/// Entries are ephemeral: only their textual rendering reaches the log.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
    /// Synthetic entry standing in for a listing that could not be read.
    ErrorPlaceholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub kind: EntryKind,
    /// Entry name, or the error description for a placeholder.
    pub name: String,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::File,
            name: name.into(),
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Folder,
            name: name.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::ErrorPlaceholder,
            name: description.into(),
        }
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column-aligned: "[File]   " and "[Folder] " are both nine wide.
        match self.kind {
            EntryKind::File => write!(f, "[File]   {}", self.name),
            EntryKind::Folder => write!(f, "[Folder] {}", self.name),
            EntryKind::ErrorPlaceholder => write!(f, "[Error reading contents: {}]", self.name),
        }
    }
}
