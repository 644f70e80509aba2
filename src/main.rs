//! cardwarden - keeps board cards in line with per-board policy rules
//!
//! Runs the webhook receiver and a few operator commands on top of the
//! `cardwarden` library.

#![deny(clippy::all, unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, missing_docs, missing_debug_implementations)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the cardwarden CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
