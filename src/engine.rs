use std::path::Path;

use tracing::{debug, warn};

use crate::diagnostics::Diagnostics;
use crate::entry::DirectoryEntry;
use crate::error::FindError;
use crate::reader::FsReader;
use crate::signal::{Gate, GateOutcome, Signal};
use crate::traits::DirectoryReader;

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// What one traversal call (and everything below it) produced.
#[derive(Debug, Default)]
pub struct Traversal {
    /// Every non-directory entry found, parent's files interleaved with child
    /// results in visit order.
    pub entries: Vec<DirectoryEntry>,

    /// `true` if this call or any call below it stopped at its gate because
    /// cancellation fired. A cancelled root has no entries.
    pub cancelled: bool,

    /// Number of directories actually listed.
    pub dirs: usize,
}

impl Traversal {
    fn cancelled() -> Self {
        Self {
            cancelled: true,
            ..Self::default()
        }
    }

    fn absorb(&mut self, child: Traversal) {
        self.entries.extend(child.entries);
        self.cancelled |= child.cancelled;
        self.dirs += child.dirs;
    }
}

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// Depth-first, single-threaded, gated directory walker.
///
/// Every call to [`Walker::traverse`], the recursive ones included, first
/// blocks on the [`Gate`]. Once through, it lists the directory and recurses
/// without looking at the signals again; a cancellation fired mid-walk only
/// stops calls that have not reached their gate yet.
pub struct Walker<'a> {
    gate: &'a Gate,
    reader: &'a dyn DirectoryReader,
    diagnostics: &'a Diagnostics,
}

impl<'a> Walker<'a> {
    pub fn new(
        gate: &'a Gate,
        reader: &'a dyn DirectoryReader,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            gate,
            reader,
            diagnostics,
        }
    }

    /// Walk `dir`, reporting entries at `depth` and recursing at `depth + 1`.
    ///
    /// # Errors
    ///
    /// The first directory that cannot be listed aborts the whole walk; no
    /// partial results are returned.
    pub fn traverse(&self, dir: &Path, depth: usize) -> Result<Traversal, FindError> {
        let diag = self.diagnostics;
        diag.emit(|| debug!(dir = %dir.display(), depth, "traverse called"));

        match self.gate.wait() {
            GateOutcome::Cancelled => {
                diag.emit(|| debug!(dir = %dir.display(), depth, "cancellation observed"));
                return Ok(Traversal::cancelled());
            }
            GateOutcome::Proceed => {
                diag.emit(|| debug!(dir = %dir.display(), depth, "proceeding"));
            }
        }

        let children = match self.reader.read_dir(dir) {
            Ok(children) => children,
            Err(e) => {
                diag.emit(|| warn!(dir = %dir.display(), error = %e, "directory read failed"));
                return Err(e);
            }
        };
        diag.emit(|| debug!(dir = %dir.display(), entries = children.len(), "directory read"));

        let mut traversal = Traversal {
            dirs: 1,
            ..Traversal::default()
        };

        for mut child in children {
            diag.emit(|| debug!(path = %child.path.display(), is_dir = child.is_dir(), "found entry"));

            if child.is_dir() {
                let sub = self.traverse(&child.path, depth + 1)?;
                traversal.absorb(sub);
            } else {
                child.depth = depth;
                traversal.entries.push(child);
            }
        }

        Ok(traversal)
    }
}

// ---------------------------------------------------------------------------
// traverse()
// ---------------------------------------------------------------------------

/// Walk `dir` on the real filesystem with no diagnostics.
///
/// Convenience over [`Walker`]: blocks until `cancel` or `proceed` fires,
/// then lists everything below `dir`.
pub fn traverse(
    cancel: &Signal,
    proceed: &Signal,
    dir: &Path,
    depth: usize,
) -> Result<Traversal, FindError> {
    let gate = Gate::new(cancel.clone(), proceed.clone());
    let diagnostics = Diagnostics::none();
    Walker::new(&gate, &FsReader, &diagnostics).traverse(dir, depth)
}
