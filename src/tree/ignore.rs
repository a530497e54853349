//! Names that are never listed or descended into

/// Directory and file names excluded from every walk.
///
/// Matching is exact and case-sensitive. `next*` is a literal name, not a
/// glob: it hides an entry called `next*` and nothing else.
pub const IGNORED_NAMES: [&str; 7] = [
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "next*",
    "venv",
];

/// Fixed set of entry names the walker skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreSet {
    names: &'static [&'static str],
}

impl IgnoreSet {
    /// The built-in set over `IGNORED_NAMES`.
    pub const DEFAULT: Self = Self {
        names: &IGNORED_NAMES,
    };

    /// Check if an entry name is ignored.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}
