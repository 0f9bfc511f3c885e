//! The overwrite-then-delete routine.
//!
//! A shred is strictly linear: stat, make the file owner read+write,
//! overwrite it `passes` times with fresh random bytes, then unlink it.
//! The size is captured once up front and reused for every pass. Any
//! failure ends the invocation and is returned; nothing is retried.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ShredError};
use crate::fs::{FileSystem, StdFileSystem};
use crate::random::{OsRandom, RandomSource};

pub const DEFAULT_PASSES: u32 = 3;

/// One file to destroy and how many times to overwrite it first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShredRequest {
    pub path: PathBuf,
    pub passes: u32,
}

impl ShredRequest {
    pub fn new(path: impl Into<PathBuf>, passes: u32) -> Self {
        Self { path: path.into(), passes }
    }
}

/// Reported after every completed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassProgress {
    /// 1-based number of the pass that just finished.
    pub pass: u32,
    pub passes: u32,
    /// Bytes written by this pass.
    pub bytes: u64,
}

/// Receives progress; it cannot influence the shred.
pub trait PassObserver {
    fn pass_complete(&mut self, progress: PassProgress);
}

impl PassObserver for () {
    fn pass_complete(&mut self, _progress: PassProgress) {}
}

impl<F> PassObserver for F
where
    F: FnMut(PassProgress),
{
    fn pass_complete(&mut self, progress: PassProgress) {
        self(progress)
    }
}

/// Runs shreds against a file system and a random source.
#[derive(Debug, Clone, Default)]
pub struct Shredder<F = StdFileSystem, R = OsRandom> {
    fs: F,
    rng: R,
}

impl Shredder {
    /// A shredder over `std::fs` and the OS CSPRNG.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileSystem, R: RandomSource> Shredder<F, R> {
    pub fn with_parts(fs: F, rng: R) -> Self {
        Self { fs, rng }
    }

    pub fn execute(&self, request: &ShredRequest) -> Result<()> {
        self.execute_with(request, &mut ())
    }

    pub fn execute_with<O>(&self, request: &ShredRequest, observer: &mut O) -> Result<()>
    where
        O: PassObserver + ?Sized,
    {
        let path = request.path.as_path();
        let len = self.captured_len(path)?;

        // A concurrent shred may unlink the file between stat and chmod.
        self.fs.set_owner_rw(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ShredError::FileNotFound { path: path.to_path_buf() },
            _ => ShredError::Permission { path: path.to_path_buf(), source },
        })?;
        debug!(path = %path.display(), len, passes = request.passes, "starting shred");

        for pass in 1..=request.passes {
            let buf = self.rng.fill(len).map_err(|source| ShredError::RandomSource {
                path: path.to_path_buf(),
                pass,
                len,
                source,
            })?;
            self.fs.write_whole(path, &buf).map_err(|source| ShredError::Write {
                path: path.to_path_buf(),
                pass,
                source,
            })?;
            debug!(path = %path.display(), pass, passes = request.passes, "pass complete");
            observer.pass_complete(PassProgress { pass, passes: request.passes, bytes: len as u64 });
        }

        self.fs.remove(path).map_err(|source| ShredError::Deletion {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "removed");
        Ok(())
    }

    /// Stats `path` once and returns the buffer length every pass will use.
    fn captured_len(&self, path: &Path) -> Result<usize> {
        let stat = match self.fs.stat(path) {
            Ok(stat) => stat,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ShredError::FileNotFound { path: path.to_path_buf() });
            }
            Err(source) => {
                return Err(ShredError::Metadata { path: path.to_path_buf(), source });
            }
        };
        if !stat.is_file {
            return Err(ShredError::NotAFile { path: path.to_path_buf() });
        }
        usize::try_from(stat.len).map_err(|_| ShredError::Metadata {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file size {} does not fit in memory", stat.len),
            ),
        })
    }
}

/// Shreds `path` with `passes` overwrites using the OS collaborators.
pub fn shred(path: impl AsRef<Path>, passes: u32) -> Result<()> {
    Shredder::new().execute(&ShredRequest::new(path.as_ref(), passes))
}
