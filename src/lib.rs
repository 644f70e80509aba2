//! cardwarden - keeps board cards in line with per-board policy rules
//!
//! This library reconciles cards against configured rules whenever a card is
//! created, updated, or archived, tracks the cards currently in violation,
//! and notifies the member whose change broke the rules.

// Deny all clippy warnings in this crate
#![deny(clippy::all, unsafe_code)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod server;
