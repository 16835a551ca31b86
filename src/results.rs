use std::time::Duration;

use crate::entry::FileList;

/// The output of a completed search.
#[derive(Debug)]
pub struct Results {
    /// Matching files keyed by base name.
    pub files: FileList,

    /// `true` if cancellation stopped at least one directory at its gate.
    /// When the root itself was cancelled `files` is empty and nothing was
    /// read. An empty, non-cancelled result means there was nothing to find.
    pub cancelled: bool,

    /// Scan statistics.
    pub stats: ScanStats,
}

/// Statistics for a completed scan.
#[derive(Debug, Clone)]
pub struct ScanStats {
    /// Non-directory entries encountered (matched or not).
    pub files: usize,

    /// Directories listed.
    pub dirs: usize,

    /// Entries kept in [`Results::files`].
    pub matches: usize,

    /// Wall-clock time from search start to completion, gate waits included.
    pub duration: Duration,

    /// `(files + dirs) / duration.as_secs_f64()`, 0 on zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    pub(crate) fn compute(files: usize, dirs: usize, matches: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            matches,
            duration,
            entries_per_sec: eps,
        }
    }
}
