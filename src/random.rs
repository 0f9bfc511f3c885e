//! Random overwrite buffers.

use rand::rngs::OsRng;
use rand::RngCore;

/// Source of the bytes written on each pass.
pub trait RandomSource {
    /// Returns exactly `len` random bytes, or the source's failure.
    fn fill(&self, len: usize) -> Result<Vec<u8>, rand::Error>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, len: usize) -> Result<Vec<u8>, rand::Error> {
        random_bytes(len)
    }
}

/// Draws `len` bytes from [`OsRng`]. A zero length yields an empty buffer
/// without touching the entropy source.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, rand::Error> {
    let mut buf = vec![0u8; len];
    if len > 0 {
        OsRng.try_fill_bytes(&mut buf)?;
    }
    Ok(buf)
}
