//! One complete run of the demo: a fresh group, two parties, two secrets.

use std::io::Read;
use std::time::{Duration, Instant};

use log::info;
use num_bigint_dig::BigUint;

use super::diffie_hellman::DiffieHellmanKeyPair;
use super::entropy::RandomByteSource;
use super::safe_prime::{DhGroup, SafePrimeGenerator};
use crate::config::DhConfig;
use crate::error::Result;

/// Everything produced by one exchange.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ExchangeTranscript {
    pub group: DhGroup,
    pub alice: DiffieHellmanKeyPair,
    pub bob: DiffieHellmanKeyPair,
    /// `B^a mod p`, computed by Alice.
    pub alice_secret: BigUint,
    /// `A^b mod p`, computed by Bob.
    pub bob_secret: BigUint,
    /// Wall-clock time of group generation plus exchange.
    pub elapsed: Duration,
    /// Bytes read from the entropy stream.
    pub entropy_consumed: u64,
}

impl ExchangeTranscript {
    pub fn secrets_agree(&self) -> bool {
        self.alice_secret == self.bob_secret
    }
}

/// Open the configured entropy device and run a full exchange.
///
/// Nothing is generated if the device cannot be opened.
pub fn run_exchange(config: &DhConfig) -> Result<ExchangeTranscript> {
    config.validate()?;
    let mut source = RandomByteSource::open(&config.entropy_path, config.randomness)?;
    info!("reading entropy from {}", config.entropy_path.display());
    run_exchange_with(config, &mut source)
}

/// Run a full exchange on a caller-supplied source.
pub fn run_exchange_with<R: Read>(
    config: &DhConfig,
    source: &mut RandomByteSource<R>,
) -> Result<ExchangeTranscript> {
    let generator = SafePrimeGenerator::new(config)?;
    let start = Instant::now();

    let group = generator.generate(source)?;
    let alice = DiffieHellmanKeyPair::generate(&group, source, config.byte_length)?;
    let bob = DiffieHellmanKeyPair::generate(&group, source, config.byte_length)?;

    let alice_secret = alice.compute_shared_secret(&group, &bob.public_key);
    let bob_secret = bob.compute_shared_secret(&group, &alice.public_key);
    let elapsed = start.elapsed();

    info!(
        "exchange over {}-bit group finished in {:?}",
        group.p.bits(),
        elapsed
    );

    Ok(ExchangeTranscript {
        group,
        alice,
        bob,
        alice_secret,
        bob_secret,
        elapsed,
        entropy_consumed: source.entropy_consumed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorPolicy, RandomnessMode, FIXED_GENERATOR};
    use crate::cs::security::safe_prime::is_safe_prime;
    use crate::error::Error;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_missing_entropy_device_fails_before_generation() {
        let config = DhConfig {
            entropy_path: PathBuf::from("/nonexistent/dev/urandom"),
            ..DhConfig::default()
        };
        let err = run_exchange(&config).unwrap_err();
        assert!(matches!(err, Error::EntropyUnavailable { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_config_fails_before_opening_device() {
        let config = DhConfig {
            byte_length: 0,
            entropy_path: PathBuf::from("/nonexistent/dev/urandom"),
            ..DhConfig::default()
        };
        assert!(matches!(
            run_exchange(&config),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_full_exchange_over_os_entropy() {
        let transcript = run_exchange(&DhConfig::with_byte_length(32)).unwrap();
        let group = &transcript.group;

        assert!(transcript.secrets_agree());
        assert!(is_safe_prime(&group.p, 10));
        assert!(group.p.bits() >= 8 * 32);
        assert!(transcript.alice.private_key.bits() <= 8 * 32);
        assert!(transcript.bob.private_key.bits() <= 8 * 32);
        assert!(transcript.entropy_consumed >= 3 * 32);
    }

    #[test]
    fn test_reseeded_exchange_with_fixed_base() {
        let config = DhConfig {
            generator: GeneratorPolicy::Fixed(FIXED_GENERATOR),
            randomness: RandomnessMode::ReseededPrng,
            ..DhConfig::with_byte_length(8)
        };
        let seeds: Vec<u8> = (0..=u16::MAX).flat_map(u16::to_be_bytes).collect();
        let mut source = RandomByteSource::from_reader(Cursor::new(seeds), config.randomness);

        let transcript = run_exchange_with(&config, &mut source).unwrap();
        assert!(transcript.secrets_agree());
        assert_eq!(transcript.group.g, BigUint::from(FIXED_GENERATOR));
        assert_eq!(transcript.entropy_consumed % 2, 0);
    }

    #[test]
    fn test_exhausted_source_is_reported() {
        let config = DhConfig::with_byte_length(8);
        let mut source =
            RandomByteSource::from_reader(Cursor::new(vec![0u8; 4]), RandomnessMode::Direct);
        assert!(matches!(
            run_exchange_with(&config, &mut source),
            Err(Error::EntropyRead(_))
        ));
    }
}
