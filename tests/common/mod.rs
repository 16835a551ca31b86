#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use extfind::{DirectoryEntry, DirectoryReader, EntryKind, FindError, Trigger};

/// An in-memory directory tree.
///
/// Directories are registered by absolute path with their children in the
/// order `read_dir` should list them. A name ending in `/` is a directory.
#[derive(Default)]
pub struct MemoryReader {
    dirs: HashMap<PathBuf, Vec<String>>,
    unreadable: HashSet<PathBuf>,
    broken: HashMap<PathBuf, String>,
    fire_on_read: Option<(PathBuf, Trigger)>,
    reads: Mutex<Vec<PathBuf>>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, path: &str, children: &[&str]) -> Self {
        self.dirs.insert(
            PathBuf::from(path),
            children.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    /// Listing `path` fails with permission denied.
    pub fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    /// Listing `path` fails inside the reader itself, not the filesystem.
    pub fn broken(mut self, path: &str, reason: &str) -> Self {
        self.broken.insert(PathBuf::from(path), reason.to_string());
        self
    }

    /// Fire `trigger` while `path` is being listed.
    pub fn fire_on_read(mut self, path: &str, trigger: Trigger) -> Self {
        self.fire_on_read = Some((PathBuf::from(path), trigger));
        self
    }

    /// Directories listed so far, in order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl DirectoryReader for MemoryReader {
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, FindError> {
        self.reads.lock().unwrap().push(dir.to_path_buf());

        if let Some((path, trigger)) = &self.fire_on_read {
            if path == dir {
                trigger.fire();
            }
        }

        if self.unreadable.contains(dir) {
            return Err(FindError::directory_read(
                dir,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }

        if let Some(reason) = self.broken.get(dir) {
            return Err(FindError::Reader(reason.clone()));
        }

        let children = self.dirs.get(dir).ok_or_else(|| {
            FindError::directory_read(
                dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            )
        })?;

        Ok(children
            .iter()
            .map(|child| match child.strip_suffix('/') {
                Some(name) => DirectoryEntry::new(name, dir.join(name), EntryKind::Dir),
                None => DirectoryEntry::new(child.as_str(), dir.join(child), EntryKind::File),
            })
            .collect())
    }
}

/// The tree from the reference scenario, at `/root`.
///
/// ```text
/// /root/
///   var/
///     a.txt
///     c.go
///   system/
///     a.txt
///     b.txt
///   a.txt
///   b.txt
/// ```
pub fn reference_tree() -> MemoryReader {
    MemoryReader::new()
        .dir("/root", &["var/", "system/", "a.txt", "b.txt"])
        .dir("/root/var", &["a.txt", "c.go"])
        .dir("/root/system", &["a.txt", "b.txt"])
}
