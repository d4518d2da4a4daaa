pub mod diffie_hellman;
pub mod entropy;
pub mod exchange;
pub mod safe_prime;

// Re-export entropy functionality
pub use entropy::RandomByteSource;

// Re-export safe prime functionality
pub use safe_prime::{
    is_probable_prime, is_safe_prime, next_probable_prime, select_generator, shape_candidate,
    DhGroup, SafePrimeGenerator,
};

// Re-export Diffie-Hellman functionality
pub use diffie_hellman::{private_key, public_key, shared_secret, DiffieHellmanKeyPair};

// Re-export the exchange pipeline
pub use exchange::{run_exchange, run_exchange_with, ExchangeTranscript};
