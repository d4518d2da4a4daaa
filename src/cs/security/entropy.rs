//! Random byte source backed by an OS entropy stream.
//!
//! [`RandomByteSource`] reads from any [`Read`] implementation. In practice that is
//! `/dev/urandom`, opened with [`RandomByteSource::open`]; tests hand it a
//! [`std::io::Cursor`] so every candidate is reproducible.
//!
//! Reads go straight to the underlying stream and are not bounded by a timeout.
//! If the device blocks (a starved `/dev/random`, say) the caller blocks with it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::trace;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::RandomnessMode;
use crate::error::{Error, Result};

/// Fills byte buffers from an entropy stream.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug)]
pub struct RandomByteSource<R> {
    reader: R,
    mode: RandomnessMode,
    consumed: u64,
}

impl RandomByteSource<File> {
    /// Open the entropy device at `path`.
    pub fn open(path: impl AsRef<Path>, mode: RandomnessMode) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::EntropyUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file, mode))
    }
}

impl<R: Read> RandomByteSource<R> {
    /// Wrap an already opened stream.
    pub fn from_reader(reader: R, mode: RandomnessMode) -> Self {
        Self {
            reader,
            mode,
            consumed: 0,
        }
    }

    pub fn mode(&self) -> RandomnessMode {
        self.mode
    }

    /// Total bytes pulled from the underlying stream so far.
    pub fn entropy_consumed(&self) -> u64 {
        self.consumed
    }

    /// Fill `buf` with random bytes.
    ///
    /// In [`RandomnessMode::ReseededPrng`] this reads exactly two bytes from the
    /// stream per call, whatever the buffer length.
    pub fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Err(Error::invalid_argument("cannot fill an empty buffer"));
        }

        match self.mode {
            RandomnessMode::Direct => self.read_exact(buf)?,
            RandomnessMode::ReseededPrng => {
                let mut rng = StdRng::seed_from_u64(u64::from(self.seed()?));
                for byte in buf.iter_mut() {
                    *byte = rng.gen();
                }
            }
        }

        trace!("filled {} random bytes: {}", buf.len(), hex::encode(&*buf));
        Ok(())
    }

    /// Allocate a `len` byte working buffer and fill it.
    pub fn bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = alloc_buffer(len)?;
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Seed for the reseeded PRNG: two stream bytes, high byte first.
    fn seed(&mut self) -> Result<u32> {
        let mut pair = [0u8; 2];
        self.read_exact(&mut pair)?;

        let mut seed = 0u32;
        seed ^= (u32::from(pair[0]) << 8) | u32::from(pair[1]);
        Ok(seed)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.reader.read_exact(buf)?;
        self.consumed += buf.len() as u64;
        Ok(())
    }
}

/// Reserve a zeroed working buffer of exactly `len` bytes.
pub fn alloc_buffer(len: usize) -> Result<Vec<u8>> {
    if len == 0 {
        return Err(Error::invalid_argument("buffer length must be non-zero"));
    }
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { len })?;
    buf.resize(len, 0);
    Ok(buf)
}
