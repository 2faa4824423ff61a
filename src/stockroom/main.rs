//! # Stockroom CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only invokes
//! `cli::run()` and handles process termination. Everything from `api.rs` inward is UI
//! agnostic; argument parsing, logging setup and printing all happen in `cli/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
