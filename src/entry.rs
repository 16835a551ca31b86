use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A single node produced by a [`DirectoryReader`](crate::traits::DirectoryReader).
///
/// The traversal only ever looks at `name`, `path` and `kind`. `metadata` is
/// carried along for callers and is whatever the reader could obtain.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Base name of the entry.
    pub name: String,

    /// Full path: the listed directory joined with `name`.
    pub path: PathBuf,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// Depth of the traversal call that listed this entry. Root call = 1.
    pub depth: usize,

    /// Filesystem metadata, if the reader had it at hand.
    pub metadata: Option<std::fs::Metadata>,
}

impl DirectoryEntry {
    /// An entry with no metadata, at depth 0 until the walker places it.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
            depth: 0,
            metadata: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of a listed entry.
///
/// Only [`EntryKind::Dir`] is descended into. Symlinks are not followed and
/// are reported like files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

/// The reduced record kept for every matching file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    pub name: String,
    pub path: PathBuf,
}

impl From<&DirectoryEntry> for TargetFile {
    fn from(entry: &DirectoryEntry) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.clone(),
        }
    }
}

/// Matching files keyed by base name. Last writer wins on collision.
pub type FileList = HashMap<String, TargetFile>;
