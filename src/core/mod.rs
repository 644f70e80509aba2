//! Core domain logic for cardwarden
//!
//! This module contains the reconciliation logic with no direct I/O.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ChangeEvent, Card, RuleRef, TrackingRecord, ScopeConfig)
//! - `services/` - Dispatch, rule resolution, and the reconciliation pipeline
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
