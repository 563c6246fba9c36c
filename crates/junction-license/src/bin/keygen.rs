//! # Activation Key Generator
//!
//! Operator tool for issuing customer activation keys. The customer reads
//! their device fingerprint from the activation prompt, sends it to the
//! operator, and the operator runs this tool to produce the key to send
//! back.
//!
//! ## Usage
//! ```bash
//! # Fingerprint as an argument
//! cargo run -p junction-license --bin keygen -- aa:bb:cc:dd:ee:ff
//!
//! # Or interactively
//! cargo run -p junction-license --bin keygen
//! Enter client fingerprint (MAC address): aa:bb:cc:dd:ee:ff
//! 79F332C7C4FF9477
//! ```
//!
//! This binary calls the exact `derive` function the application validates
//! against; there is no second implementation to drift out of sync.

use std::io::{self, BufRead, Write};

use junction_core::kdf;
use junction_core::types::Fingerprint;

fn main() {
    // Logging mirrors the application: RUST_LOG controls verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => match prompt() {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read fingerprint: {err}");
                std::process::exit(1);
            }
        },
    };

    match Fingerprint::parse(&input) {
        Ok(fingerprint) => {
            let key = kdf::derive(&fingerprint);
            println!("{key}");
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Prompts on stdout and reads one line from stdin.
fn prompt() -> io::Result<String> {
    print!("Enter client fingerprint (MAC address): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
