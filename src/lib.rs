//! Overwrite a file with cryptographically random bytes a number of times,
//! then remove it.
//!
//! ```no_run
//! use shred::{Shredder, ShredRequest};
//!
//! Shredder::new().execute(&ShredRequest::new("secret.txt", 3))?;
//! # Ok::<(), shred::ShredError>(())
//! ```
//!
//! This does not defeat wear-leveling, copy-on-write filesystems, snapshots
//! or journaling, and it leaves the file name and directory metadata alone.

pub mod error;
pub mod fs;
pub mod random;
mod shred;

pub use error::{Result, ShredError};
pub use fs::{FileStat, FileSystem, StdFileSystem};
pub use random::{random_bytes, OsRandom, RandomSource};
pub use shred::{shred, PassObserver, PassProgress, ShredRequest, Shredder, DEFAULT_PASSES};
