use std::path::Path;

use ignore::WalkBuilder;

use crate::entry::{DirectoryEntry, EntryKind};
use crate::error::{self, FindError};
use crate::traits::DirectoryReader;

/// Lists real directories through `ignore`, one level at a time.
///
/// All filtering is switched off: hidden files, ignore files and VCS rules
/// are listed like anything else. Symlinked children are not followed, but a
/// symlinked `dir` itself is. Children come back in the order the operating
/// system lists them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirectoryReader for FsReader {
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, FindError> {
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false)
            .max_depth(Some(1))
            .build();

        let mut children = Vec::new();
        for res in walker {
            let entry = res.map_err(|e| error::from_ignore(dir, e))?;

            let ft = entry.file_type();

            // The root itself: only check it really is a directory. A root
            // given as a symlink is resolved; symlinks below it are not.
            if entry.depth() == 0 {
                if !ft.is_some_and(|ft| ft.is_dir()) && !dir.is_dir() {
                    return Err(FindError::directory_read(
                        dir,
                        std::io::Error::other("not a directory"),
                    ));
                }
                continue;
            }

            let kind = match ft {
                Some(ft) if ft.is_dir() => EntryKind::Dir,
                Some(ft) if ft.is_file() => EntryKind::File,
                Some(ft) if ft.is_symlink() => EntryKind::Symlink,
                _ => EntryKind::Other,
            };

            children.push(DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path().to_path_buf(),
                kind,
                depth: 0,
                metadata: entry.metadata().ok(),
            });
        }

        Ok(children)
    }
}
