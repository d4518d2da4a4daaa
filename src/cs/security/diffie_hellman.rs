//! DISCLAIMER: This library is a toy example of Diffie-Hellman Key Exchange in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive operations.
//! It is not audited, not vetted, and very likely insecure in practice.
//!
//! If you need Diffie-Hellman or any cryptographic operations in production, please use a
//! vetted, well-reviewed cryptography library.

use std::io::Read;

use num_bigint_dig::BigUint;
use num_traits::Zero;

use super::entropy::RandomByteSource;
use super::safe_prime::DhGroup;
use crate::error::{Error, Result};

/// An ephemeral keypair for Diffie-Hellman:
/// - `private_key`: a random integer `a` in `[0, 2^(8N))`.
/// - `public_key`: `g^a mod p`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffieHellmanKeyPair {
    /// The private key exponent (`a`).
    pub private_key: BigUint,
    /// The corresponding public value (`A = g^a mod p`).
    pub public_key: BigUint,
}

impl DiffieHellmanKeyPair {
    /// Create an ephemeral key pair in `group` from `byte_length` random bytes.
    pub fn generate<R: Read>(
        group: &DhGroup,
        source: &mut RandomByteSource<R>,
        byte_length: usize,
    ) -> Result<Self> {
        let private_key = private_key(source, byte_length)?;
        let public_key = public_key(&group.g, &private_key, &group.p);
        Ok(DiffieHellmanKeyPair {
            private_key,
            public_key,
        })
    }

    /// Given another party's public key `other_pub`, compute the shared secret:
    ///   `S = other_pub^a mod p`.
    ///
    /// # Warnings
    /// - This is naive exponentiation with no safety checks for malicious inputs.
    /// - No key derivation function is applied on top. It's purely the raw group element.
    pub fn compute_shared_secret(&self, group: &DhGroup, other_pub: &BigUint) -> BigUint {
        shared_secret(other_pub, &self.private_key, &group.p)
    }
}

/// Read `byte_length` random bytes as a little-endian private exponent.
///
/// The exponent is not reduced modulo `p - 1`, so it lies anywhere in
/// `[0, 2^(8 * byte_length))`.
pub fn private_key<R: Read>(
    source: &mut RandomByteSource<R>,
    byte_length: usize,
) -> Result<BigUint> {
    if byte_length == 0 {
        return Err(Error::invalid_argument(
            "private key byte length must be non-zero",
        ));
    }
    let bytes = source.bytes(byte_length)?;
    Ok(BigUint::from_bytes_le(&bytes))
}

/// `base^private mod prime`. A zero modulus yields zero.
pub fn public_key(base: &BigUint, private: &BigUint, prime: &BigUint) -> BigUint {
    if prime.is_zero() {
        return BigUint::zero();
    }
    base.modpow(private, prime)
}

/// `peer_public^private mod prime`.
pub fn shared_secret(peer_public: &BigUint, private: &BigUint, prime: &BigUint) -> BigUint {
    public_key(peer_public, private, prime)
}
