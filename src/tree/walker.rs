//! TreeWalker - depth-first, pre-order directory walk

use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, TreeError};
use crate::output::{TreeFormatter, TreeOutput};

use super::ignore::IgnoreSet;
use super::traversal::{Entry, child_prefix, is_permission_denied, read_sorted_entries};

/// Lists one directory: filtered by the ignore set, sorted by name.
pub type ListDir = fn(&Path, &IgnoreSet) -> io::Result<Vec<Entry>>;

/// Counts gathered during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directories printed (the root excluded).
    pub directories: usize,
    pub files: usize,
    /// Directories whose contents were hidden by a permission error.
    pub skipped: usize,
}

/// Walks a directory and streams every entry to a `TreeOutput`.
/// Memory use is O(depth): nothing but the current listing is kept.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    ignore: IgnoreSet,
    list_dir: ListDir,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self {
            ignore: IgnoreSet::DEFAULT,
            list_dir: read_sorted_entries,
        }
    }

    /// Replace the directory listing (defaults to `read_sorted_entries`).
    pub fn with_list_dir(mut self, list_dir: ListDir) -> Self {
        self.list_dir = list_dir;
        self
    }

    /// Render the tree into `out` and flush it.
    ///
    /// The flush happens even when the walk aborts, so every line written
    /// before the failure reaches `out`. The walk error wins over a flush
    /// error.
    pub fn print<W: Write>(&self, root: &Path, out: W) -> Result<WalkSummary> {
        let mut formatter = TreeFormatter::new(out);
        let result = self.walk(root, &mut formatter);
        let flushed = formatter.into_inner();
        let summary = result?;
        flushed?;
        Ok(summary)
    }

    /// Print `root` as given, then everything below it.
    ///
    /// `root` is not checked up front; if it can't be listed for a reason
    /// other than permissions, the error comes back after the root line
    /// has been written.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        output.output_root(&root.display().to_string())?;

        let mut summary = WalkSummary::default();
        self.walk_dir(root, "", output, &mut summary)?;

        log::debug!(
            "{} directories, {} files, {} skipped",
            summary.directories,
            summary.files,
            summary.skipped
        );
        Ok(summary)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        let entries = match (self.list_dir)(path, &self.ignore) {
            Ok(entries) => entries,
            Err(e) if is_permission_denied(&e) => {
                log::debug!("skipping {}: {}", path.display(), e);
                summary.skipped += 1;
                return Ok(());
            }
            Err(e) => return Err(TreeError::read_dir(path, e)),
        };

        let total = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == total;
            log::trace!("visiting {}", entry.path.display());

            output.output_node(&entry.name, is_last, prefix)?;

            if entry.is_dir() {
                summary.directories += 1;
                self.walk_dir(&entry.path, &child_prefix(prefix, is_last), output, summary)?;
            } else {
                summary.files += 1;
            }
        }

        Ok(())
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}
