//! Protocol parameters and run configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Byte length of both the prime candidates and the private keys.
pub const DEFAULT_BYTE_LENGTH: usize = 64;

/// Rounds handed to the probabilistic primality test.
pub const PRIMALITY_ROUNDS: usize = 10;

/// First candidate tried by the generator search.
pub const GENERATOR_SEARCH_START: u64 = 3;

/// Base used by the simplified fixed-generator policy.
pub const FIXED_GENERATOR: u64 = 2;

/// OS entropy device read by the demo.
pub const DEFAULT_ENTROPY_PATH: &str = "/dev/urandom";

/// Bit forced on in the most significant candidate byte.
pub const CANDIDATE_TOP_BIT: u8 = 0x40;

/// How the generator/base of the group is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorPolicy {
    /// Walk upward from `start` and accept the first `c` with `c^q mod p != 1`.
    Search { start: u64 },
    /// Use a fixed base with no order check.
    Fixed(u64),
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        GeneratorPolicy::Search {
            start: GENERATOR_SEARCH_START,
        }
    }
}

/// How random buffers are produced from the entropy stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomnessMode {
    /// Every output byte is read from the entropy stream.
    #[default]
    Direct,
    /// Two entropy bytes reseed a non-cryptographic PRNG on every fill.
    ///
    /// Only 16 bits of seed per buffer, trivially brute-forced. DO NOT use it
    /// for anything real.
    ReseededPrng,
}

/// Configuration for a full run: group generation plus key exchange.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct DhConfig {
    /// Byte length of prime candidates and private keys.
    pub byte_length: usize,
    /// Primality test rounds.
    pub rounds: usize,
    /// Generator selection policy.
    pub generator: GeneratorPolicy,
    /// Random byte production strategy.
    pub randomness: RandomnessMode,
    /// Entropy device path.
    pub entropy_path: PathBuf,
}

impl Default for DhConfig {
    fn default() -> Self {
        Self {
            byte_length: DEFAULT_BYTE_LENGTH,
            rounds: PRIMALITY_ROUNDS,
            generator: GeneratorPolicy::default(),
            randomness: RandomnessMode::default(),
            entropy_path: PathBuf::from(DEFAULT_ENTROPY_PATH),
        }
    }
}

impl DhConfig {
    /// Default configuration with a different byte length.
    pub fn with_byte_length(byte_length: usize) -> Self {
        Self {
            byte_length,
            ..Self::default()
        }
    }

    /// Reject parameters no generation routine can work with.
    pub fn validate(&self) -> Result<()> {
        if self.byte_length == 0 {
            return Err(Error::invalid_argument("byte length must be non-zero"));
        }
        if self.rounds == 0 {
            return Err(Error::invalid_argument(
                "primality rounds must be non-zero",
            ));
        }
        if let GeneratorPolicy::Fixed(g) = self.generator {
            if g < 2 {
                return Err(Error::invalid_argument(format!(
                    "fixed generator {g} must be greater than 1"
                )));
            }
        }
        Ok(())
    }
}
