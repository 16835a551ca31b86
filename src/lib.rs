//! # extfind
//!
//! Cancellable, gated recursive directory search filtered by file extension.
//!
//! extfind walks a directory tree depth-first on one thread. Before each
//! directory is read the walker waits at a gate for one of two external
//! signals: **cancel**, which stops the search without an error, or
//! **proceed**, which lets it go ahead. Files whose extension matches are
//! collected into a [`FileList`] keyed by file name.
//!
//! extfind owns the walk, the gate, the error type and the builder API.
//! Where the signals come from (OS signals, a timer, a UI button) is up to
//! the caller; [`bridge::SignalBridge`] covers the usual process setup.
//!
//! # Quick Start
//!
//! ```rust
//! use extfind::{signal, Signal};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("main.go"), "package main").unwrap();
//! std::fs::write(dir.path().join("notes.txt"), "todo").unwrap();
//!
//! let (go, proceed) = signal();
//! go.fire();
//!
//! let results = extfind::search()
//!     .root(dir.path())
//!     .extension(".go")
//!     .cancel(Signal::never())
//!     .proceed(proceed)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.files.len(), 1);
//! assert!(results.files.contains_key("main.go"));
//! assert!(!results.cancelled);
//! ```
//!
//! # Cancellation
//!
//! Cancellation is not an error. A search cancelled at the root gate returns
//! `Ok` with an empty [`FileList`] and [`Results::cancelled`] set, and never
//! touches the filesystem:
//!
//! ```rust
//! use extfind::{signal, Signal};
//!
//! let (stop, cancel) = signal();
//! stop.fire();
//!
//! let results = extfind::search()
//!     .root("/this/path/is/never/read")
//!     .cancel(cancel)
//!     .proceed(Signal::never())
//!     .run()
//!     .unwrap();
//!
//! assert!(results.files.is_empty());
//! assert!(results.cancelled);
//! ```

#![forbid(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod engine;

mod builder;
mod diagnostics;
mod entry;
mod error;
mod filter;
mod reader;
mod results;
mod signal;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::FindBuilder;
pub use diagnostics::Diagnostics;
pub use engine::{traverse, Traversal, Walker};
pub use entry::{DirectoryEntry, EntryKind, FileList, TargetFile};
pub use error::FindError;
pub use filter::{extension, ExtensionMatcher};
pub use reader::FsReader;
pub use results::{Results, ScanStats};
pub use signal::{signal, Gate, GateOutcome, Signal, Trigger};
pub use traits::{DirectoryReader, Matcher};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`FindBuilder`] to configure and run a search.
pub fn search() -> FindBuilder {
    FindBuilder::default()
}

/// Find every file under the working directory whose extension is `ext`.
///
/// Waits at each directory for `cancel` or `proceed`. Shorthand for
/// `search().cancel(..).proceed(..).extension(ext).run()`.
///
/// # Errors
///
/// [`FindError::WorkingDirectory`] if the working directory cannot be
/// resolved, [`FindError::DirectoryRead`] if any directory under it cannot be
/// listed.
pub fn find_files(cancel: &Signal, proceed: &Signal, ext: &str) -> Result<Results, FindError> {
    search()
        .cancel(cancel.clone())
        .proceed(proceed.clone())
        .extension(ext)
        .run()
}
