//! Error types for tree walking and rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a walk.
///
/// Permission errors while listing a directory are not represented here:
/// the walker skips those subtrees instead of failing.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    pub(crate) fn read_dir(path: &std::path::Path, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
