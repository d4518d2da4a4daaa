//! DISCLAIMER: This module generates toy safe-prime groups for the Diffie-Hellman demo.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive operations.
//!
//! A safe prime is a prime `p = 2q + 1` where `q` is also prime. The search works on
//! raw random bytes:
//!
//! 1. Fill an N byte buffer, force bit 6 of the most significant byte (so the value
//!    has roughly `8N` bits) and bit 0 of the least significant byte (so it is odd).
//!    Read the buffer as a little-endian integer `q`.
//! 2. Step `q` by 2 until it is a probable prime.
//! 3. If `2q + 1` is also a probable prime, stop. Otherwise start over with fresh bytes.
//!
//! The generator is then the first candidate `c >= 3` with `c^q mod p != 1`. In a safe
//! prime group that means `c` is a quadratic non-residue and generates the whole group
//! of order `2q`.

use std::io::Read;

use log::{debug, info};
use num_bigint_dig::{prime::probably_prime, BigUint};
use num_integer::Integer;
use num_traits::One;

use super::entropy::RandomByteSource;
use crate::config::{DhConfig, GeneratorPolicy, CANDIDATE_TOP_BIT};
use crate::error::{Error, Result};

/// A safe-prime group: modulus `p`, subgroup order `q = (p - 1) / 2` and base `g`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhGroup {
    /// The safe prime modulus.
    pub p: BigUint,
    /// The Sophie Germain prime `(p - 1) / 2`.
    pub q: BigUint,
    /// The base used for exponentiation.
    pub g: BigUint,
}

/// Searches for safe primes of a configured byte length.
#[derive(Debug, Clone)]
pub struct SafePrimeGenerator {
    byte_length: usize,
    rounds: usize,
    policy: GeneratorPolicy,
}

impl SafePrimeGenerator {
    /// Build a generator from a validated configuration.
    pub fn new(config: &DhConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            byte_length: config.byte_length,
            rounds: config.rounds,
            policy: config.generator,
        })
    }

    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Generate a fresh safe-prime group.
    ///
    /// The outer search has no attempt limit. Prime density makes it finish after a
    /// handful of attempts for any practical byte length.
    pub fn generate<R: Read>(&self, source: &mut RandomByteSource<R>) -> Result<DhGroup> {
        let mut buf = super::entropy::alloc_buffer(self.byte_length)?;
        let mut attempts = 0u64;

        let (p, q) = loop {
            attempts += 1;
            source.fill(&mut buf)?;
            let q = next_probable_prime(&shape_candidate(&mut buf), self.rounds);

            let p = (&q << 1usize) + BigUint::one();
            if is_probable_prime(&p, self.rounds) {
                break (p, q);
            }
        };

        debug!(
            "found {}-bit safe prime after {} attempts",
            p.bits(),
            attempts
        );

        let g = select_generator(&p, &q, self.policy)?;
        info!("generated safe-prime group with base {}", g);

        Ok(DhGroup { p, q, g })
    }
}

/// Force the candidate bits and read `bytes` as a little-endian integer.
///
/// Bit 6 of the last (most significant) byte and bit 0 of the first byte are set.
pub fn shape_candidate(bytes: &mut [u8]) -> BigUint {
    if let Some(top) = bytes.last_mut() {
        *top |= CANDIDATE_TOP_BIT;
    }
    if let Some(bottom) = bytes.first_mut() {
        *bottom |= 1;
    }
    BigUint::from_bytes_le(bytes)
}

/// Probabilistic primality test with `rounds` Miller-Rabin rounds.
pub fn is_probable_prime(n: &BigUint, rounds: usize) -> bool {
    probably_prime(n, rounds)
}

/// Whether `p` and `(p - 1) / 2` are both probable primes.
pub fn is_safe_prime(p: &BigUint, rounds: usize) -> bool {
    if p.is_even() {
        return false;
    }
    let q = p >> 1usize;
    is_probable_prime(&q, rounds) && is_probable_prime(p, rounds)
}

/// Smallest probable prime `>= n`, stepping over odd numbers only.
///
/// `n` is rounded up to the next odd number first; 2 is never returned.
pub fn next_probable_prime(n: &BigUint, rounds: usize) -> BigUint {
    let mut candidate = n.clone();
    if candidate.is_even() {
        candidate += BigUint::one();
    }
    while !is_probable_prime(&candidate, rounds) {
        candidate += BigUint::from(2u32);
    }
    candidate
}

/// Choose the group base for the safe prime `p = 2q + 1`.
///
/// With [`GeneratorPolicy::Search`] every `c` in `[start, p)` is tried in order and the
/// first with `c^q mod p != 1` is returned. If none qualifies the result is
/// [`Error::GeneratorNotFound`]; that cannot happen for a real safe prime `p >= 5`.
///
/// [`GeneratorPolicy::Fixed`] skips the order check entirely.
pub fn select_generator(p: &BigUint, q: &BigUint, policy: GeneratorPolicy) -> Result<BigUint> {
    let one = BigUint::one();

    match policy {
        GeneratorPolicy::Fixed(g) => {
            let g = BigUint::from(g);
            if g <= one || &g >= p {
                return Err(Error::invalid_argument(format!(
                    "fixed base {} is outside (1, {})",
                    g, p
                )));
            }
            Ok(g)
        }
        GeneratorPolicy::Search { start } => {
            let mut candidate = BigUint::from(start.max(2));
            while &candidate < p {
                if candidate.modpow(q, p) != one {
                    return Ok(candidate);
                }
                candidate += &one;
            }
            Err(Error::GeneratorNotFound)
        }
    }
}
