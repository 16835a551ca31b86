use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::diagnostics::Diagnostics;
use crate::engine::Walker;
use crate::error::FindError;
use crate::filter::{collect, AllMatcher, ExtensionMatcher};
use crate::reader::FsReader;
use crate::results::{Results, ScanStats};
use crate::signal::{Gate, Signal};
use crate::traits::{DirectoryReader, Matcher};

// ---------------------------------------------------------------------------
// FindBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`extfind::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](FindBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let results = extfind::search()
///     .root("/srv/project")
///     .extension(".go")
///     .cancel(cancel_signal)
///     .proceed(proceed_signal)
///     .diagnostics(diagnostics)
///     .run()?;
/// ```
pub struct FindBuilder {
    root:        Option<PathBuf>,
    matcher:     Option<Box<dyn Matcher>>,
    reader:      Option<Box<dyn DirectoryReader>>,
    cancel:      Option<Signal>,
    proceed:     Option<Signal>,
    diagnostics: Diagnostics,
    sorted:      bool,
}

impl Default for FindBuilder {
    fn default() -> Self {
        Self {
            root:        None,
            matcher:     None,
            reader:      None,
            cancel:      None,
            proceed:     None,
            diagnostics: Diagnostics::none(),
            sorted:      false,
        }
    }
}

impl FindBuilder {
    // ── Where ─────────────────────────────────────────────────────────────

    /// Directory to search. Defaults to the process working directory,
    /// resolved when [`run()`](FindBuilder::run) is called.
    pub fn root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root = Some(dir.into());
        self
    }

    /// Read directories through a custom [`DirectoryReader`] instead of the
    /// filesystem.
    pub fn reader(mut self, r: impl DirectoryReader + 'static) -> Self {
        self.reader = Some(Box::new(r));
        self
    }

    // ── What ──────────────────────────────────────────────────────────────

    /// Keep files whose extension is exactly `ext`, dot included (`".go"`).
    ///
    /// Equivalent to `.with_matcher(ExtensionMatcher::new(ext))`.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.matcher = Some(Box::new(ExtensionMatcher::new(ext)));
        self
    }

    /// Set a custom matcher. Without one every file is kept.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Signals ───────────────────────────────────────────────────────────

    /// Cancellation signal. Defaults to one that never fires.
    pub fn cancel(mut self, s: Signal) -> Self {
        self.cancel = Some(s);
        self
    }

    /// Proceed signal every directory waits on. Defaults to one that has
    /// already fired, so the search starts immediately.
    pub fn proceed(mut self, s: Signal) -> Self {
        self.proceed = Some(s);
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Send diagnostic events to this sink. Off by default.
    pub fn diagnostics(mut self, d: impl Into<Diagnostics>) -> Self {
        self.diagnostics = d.into();
        self
    }

    /// Sort entries by full path before building the [`FileList`](crate::FileList).
    ///
    /// Makes the winner of a name collision deterministic: the
    /// lexicographically last path. Off by default, in which case the winner
    /// is the last one in listing order.
    pub fn sorted(mut self, yes: bool) -> Self {
        self.sorted = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search and return results.
    ///
    /// Blocks until the root directory's gate opens and the walk finishes.
    ///
    /// # Errors
    ///
    /// [`FindError::WorkingDirectory`] if no root was given and the working
    /// directory cannot be resolved; otherwise whatever error aborted the walk.
    /// Cancellation is not an error, see [`Results::cancelled`].
    pub fn run(self) -> Result<Results, FindError> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().map_err(FindError::WorkingDirectory)?,
        };

        // Default matcher: keep everything
        let matcher: Box<dyn Matcher> = match self.matcher {
            Some(m) => m,
            None    => Box::new(AllMatcher),
        };
        let reader: Box<dyn DirectoryReader> = match self.reader {
            Some(r) => r,
            None    => Box::new(FsReader),
        };
        let gate = Gate::new(
            self.cancel.unwrap_or_else(Signal::never),
            self.proceed.unwrap_or_else(Signal::fired),
        );

        let diagnostics = self.diagnostics;
        diagnostics.emit(|| info!(root = %root.display(), "search started"));

        let start = Instant::now();
        let mut traversal = Walker::new(&gate, reader.as_ref(), &diagnostics).traverse(&root, 1)?;

        if self.sorted {
            traversal.entries.sort_by(|a, b| a.path.cmp(&b.path));
        }
        let files = collect(&traversal.entries, matcher.as_ref());
        let duration = start.elapsed();

        let stats = ScanStats::compute(traversal.entries.len(), traversal.dirs, files.len(), duration);
        diagnostics.emit(|| {
            info!(
                files = stats.files,
                dirs = stats.dirs,
                matches = stats.matches,
                cancelled = traversal.cancelled,
                "search finished"
            )
        });

        Ok(Results {
            files,
            cancelled: traversal.cancelled,
            stats,
        })
    }
}
