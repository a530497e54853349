//! Directory listing and prefix bookkeeping used by the walker.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::ignore::IgnoreSet;

/// One listed entry of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Raw file name, used for ordering.
    pub file_name: OsString,
    /// Display name.
    pub name: String,
    pub path: PathBuf,
}

impl Entry {
    fn new(parent: &Path, file_name: OsString) -> Self {
        Self {
            name: file_name.to_string_lossy().into_owned(),
            path: parent.join(&file_name),
            file_name,
        }
    }

    /// Whether the walker should descend into this entry.
    ///
    /// Symlinks are followed. If the type can't be determined the entry
    /// counts as a plain file.
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }
}

/// Read the immediate entries of `path`, drop ignored names and sort the
/// rest by raw name (byte order, so `C` < `a` < `b`).
///
/// Any failure, including one hit partway through the listing, is
/// returned untouched so the caller can classify it.
pub fn read_sorted_entries(path: &Path, ignore: &IgnoreSet) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let file_name = entry?.file_name();
        if ignore.contains(&file_name.to_string_lossy()) {
            continue;
        }
        entries.push(Entry::new(path, file_name));
    }
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(entries)
}

/// The only listing failure the walker tolerates.
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Calculate the prefix for child entries
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}
