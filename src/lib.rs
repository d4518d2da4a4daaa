//! A toy Diffie-Hellman key exchange over freshly generated safe-prime groups.
//!
//! *This crate is for demonstration only. DO NOT use it in real systems.*

pub mod config;
pub mod cs;
pub mod error;

pub use config::{DhConfig, GeneratorPolicy, RandomnessMode};
pub use cs::security;
pub use error::{Error, Result};
