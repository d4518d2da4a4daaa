//! Generate a safe-prime group, run a two-party exchange and print every value.
//!
//! Takes no arguments. Exits with status 1 on any error.

use log::error;
use safe_dh::security::{run_exchange, ExchangeTranscript};
use safe_dh::DhConfig;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp_secs()
        .init();

    match run_exchange(&DhConfig::default()) {
        Ok(transcript) => print_transcript(&transcript),
        Err(e) => {
            error!("exchange failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn print_transcript(t: &ExchangeTranscript) {
    println!("Prime: {}", t.group.p);
    println!("Base: {}", t.group.g);
    println!("Private key a: {}", t.alice.private_key);
    println!("Private key b: {}", t.bob.private_key);
    println!("Public key A: {}", t.alice.public_key);
    println!("Public key B: {}", t.bob.public_key);
    println!("Secret key: {}", t.bob_secret);
    if !t.secrets_agree() {
        eprintln!("Warning: Alice computed a different secret: {}", t.alice_secret);
    }
    println!("Elapsed: {:.3?}", t.elapsed);
}
