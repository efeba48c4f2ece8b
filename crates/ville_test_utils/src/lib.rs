//! # Ville Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Determinism test harness
//! - Town and catalog fixtures
//! - Economy balance checks
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod determinism;
pub mod economy;
pub mod fixtures;

/// Re-export proptest for convenience.
pub use proptest;
