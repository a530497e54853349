//! Plain-text tree formatter
//!
//! `TreeFormatter` writes one line per node straight to its writer:
//! the root name unindented, then `prefix + connector + name` for every entry.

use std::io::{self, Write};

use super::TreeOutput;

/// Connector for every sibling but the last.
pub const BRANCH: &str = "├── ";

/// Connector for the last sibling in a directory.
pub const LAST_BRANCH: &str = "└── ";

/// Pick the connector glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Formatter that renders the tree to any writer.
pub struct TreeFormatter<W: Write> {
    out: W,
}

impl<W: Write> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> TreeOutput for TreeFormatter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}", name)
    }

    fn output_node(&mut self, name: &str, is_last: bool, prefix: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}{}", prefix, connector(is_last), name)
    }
}
