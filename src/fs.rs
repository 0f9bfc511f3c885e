//! File system primitives the shredder is built on.
//!
//! Each call resolves the path on its own; nothing holds a handle open
//! between steps.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// The subset of metadata the shredder looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub len: u64,
    pub is_file: bool,
}

pub trait FileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// Makes the file readable and writable by its owner.
    fn set_owner_rw(&self, path: &Path) -> io::Result<()>;

    /// Replaces the whole content of an existing file with `data`. Must not
    /// create the file when it is missing.
    fn write_whole(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let meta = fs::metadata(path)?;
        Ok(FileStat { len: meta.len(), is_file: meta.is_file() })
    }

    fn set_owner_rw(&self, path: &Path) -> io::Result<()> {
        make_owner_rw(path)
    }

    fn write_whole(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        // Overwrite in place from offset 0 so the old extent is reused, then
        // pin the length to the buffer.
        let mut file = OpenOptions::new().write(true).open(path)?;
        file.write_all(data)?;
        file.set_len(data.len() as u64)?;
        file.sync_all()
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[cfg(unix)]
fn make_owner_rw(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn make_owner_rw(path: &Path) -> io::Result<()> {
    let mut perm = fs::metadata(path)?.permissions();
    perm.set_readonly(false);
    fs::set_permissions(path, perm)
}
