//! Tree rendering
//!
//! The walker reports each visited entry to a `TreeOutput` sink in
//! depth-first pre-order. `TreeFormatter` is the one sink that ships: it
//! draws the ASCII tree to any `io::Write`.
//!
//! # Module Structure
//!
//! - `tree` - connector glyphs and the `TreeFormatter` writer

mod tree;

pub use tree::{BRANCH, LAST_BRANCH, TreeFormatter, connector};

use std::io;

/// Callback for walker output - receives node information for display.
pub trait TreeOutput {
    /// Called once, before any entry, with the root's display name.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    /// Called for every entry, with the prefix accumulated from its ancestors.
    fn output_node(&mut self, name: &str, is_last: bool, prefix: &str) -> io::Result<()>;
}
