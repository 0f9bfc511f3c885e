//! Error types returned by the shredder.
//!
//! Every variant carries the target path so a caller can report which file
//! failed and in which phase without extra bookkeeping.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShredError {
    /// The target path does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Stat failed for a reason other than not-found.
    #[error("failed to read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but is not a regular file.
    #[error("expected a regular file but got something else: {}", path.display())]
    NotAFile { path: PathBuf },

    /// The mode could not be made owner read+write.
    #[error("failed to make {} writable: {source}", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entropy source could not supply a buffer for `pass`.
    #[error("failed to generate {len} random bytes for pass {pass} of {}: {source}", path.display())]
    RandomSource {
        path: PathBuf,
        pass: u32,
        len: usize,
        #[source]
        source: rand::Error,
    },

    /// Overwriting the content failed during `pass`.
    #[error("failed to overwrite {} on pass {pass}: {source}", path.display())]
    Write {
        path: PathBuf,
        pass: u32,
        #[source]
        source: io::Error,
    },

    /// Every pass succeeded but the directory entry could not be removed.
    #[error("overwrite succeeded but removing {} failed: {source}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ShredError {
    /// Path of the file the failed invocation targeted.
    pub fn path(&self) -> &Path {
        match self {
            ShredError::FileNotFound { path }
            | ShredError::Metadata { path, .. }
            | ShredError::NotAFile { path }
            | ShredError::Permission { path, .. }
            | ShredError::RandomSource { path, .. }
            | ShredError::Write { path, .. }
            | ShredError::Deletion { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShredError>;
