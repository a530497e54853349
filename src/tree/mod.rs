//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory depth-first, drops the names in the
//! `IgnoreSet`, sorts what is left by name and hands every entry to a
//! `TreeOutput` sink along with the prefix its ancestors contribute.

mod ignore;
mod traversal;
mod walker;

// Re-export public types
pub use ignore::{IGNORED_NAMES, IgnoreSet};
pub use traversal::{Entry, child_prefix, is_permission_denied, read_sorted_entries};
pub use walker::{ListDir, TreeWalker, WalkSummary};
