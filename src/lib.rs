//! lstree - print a directory as a tree, skipping build and dependency clutter

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{TreeFormatter, TreeOutput};
pub use tree::{IGNORED_NAMES, IgnoreSet, ListDir, TreeWalker, WalkSummary};
