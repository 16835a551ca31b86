use std::path::Path;

use crate::entry::DirectoryEntry;
use crate::error::FindError;

/// Lists the immediate children of one directory.
///
/// The walker owns recursion, gating and depth; a reader only answers "what
/// is directly inside `dir`". [`FsReader`](crate::reader::FsReader) is the
/// filesystem implementation. Tests and embedders can supply their own tree.
///
/// # Error Handling
///
/// A directory that cannot be listed (missing, permission denied, not a
/// directory) must be returned as `Err`, normally
/// [`FindError::DirectoryRead`]. Failures of the reader itself (a lost
/// connection, a corrupt index) belong in [`FindError::Reader`]. The walker
/// treats every error as fatal for the whole search.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use extfind::{DirectoryEntry, DirectoryReader, EntryKind, FindError};
///
/// struct Flat(Vec<&'static str>);
///
/// impl DirectoryReader for Flat {
///     fn read_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, FindError> {
///         Ok(self.0.iter()
///             .map(|name| DirectoryEntry::new(*name, dir.join(name), EntryKind::File))
///             .collect())
///     }
/// }
/// ```
pub trait DirectoryReader: Send + Sync {
    /// Children of `dir` in listing order. `depth` on the returned entries is
    /// ignored; the walker sets it.
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, FindError>;
}

/// Determines whether a file entry is kept in the final [`FileList`](crate::FileList).
///
/// # Example
///
/// ```rust
/// use extfind::{DirectoryEntry, Matcher};
///
/// struct Larger(u64);
///
/// impl Matcher for Larger {
///     fn is_match(&self, entry: &DirectoryEntry) -> bool {
///         entry.metadata.as_ref().is_some_and(|m| m.len() > self.0)
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &DirectoryEntry) -> bool;
}
