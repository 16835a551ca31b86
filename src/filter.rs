use crate::entry::{DirectoryEntry, FileList, TargetFile};
use crate::traits::Matcher;

/// The extension of a file name: everything from the last `.` on, dot
/// included. Names without a dot have an empty extension.
///
/// ```rust
/// assert_eq!(extfind::extension("main.go"), ".go");
/// assert_eq!(extfind::extension("archive.tar.gz"), ".gz");
/// assert_eq!(extfind::extension(".bashrc"), ".bashrc");
/// assert_eq!(extfind::extension("Makefile"), "");
/// ```
pub fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i..],
        None => "",
    }
}

/// Keeps entries whose [`extension`] equals the target exactly.
///
/// Comparison is case-sensitive and the target includes the dot (`".go"`).
/// An empty target matches only names without a dot.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    ext: String,
}

impl ExtensionMatcher {
    pub fn new(ext: impl Into<String>) -> Self {
        Self { ext: ext.into() }
    }
}

impl Matcher for ExtensionMatcher {
    fn is_match(&self, entry: &DirectoryEntry) -> bool {
        extension(&entry.name) == self.ext
    }
}

/// Matches every entry. Used when no matcher is specified.
pub(crate) struct AllMatcher;

impl Matcher for AllMatcher {
    fn is_match(&self, _entry: &DirectoryEntry) -> bool {
        true
    }
}

/// Reduce entries to a [`FileList`] in one pass, in the given order.
/// A later entry with the same name replaces an earlier one.
pub(crate) fn collect(entries: &[DirectoryEntry], matcher: &dyn Matcher) -> FileList {
    let mut files = FileList::with_capacity(entries.len());
    for entry in entries.iter().filter(|e| matcher.is_match(e)) {
        files.insert(entry.name.clone(), TargetFile::from(entry));
    }
    files
}
