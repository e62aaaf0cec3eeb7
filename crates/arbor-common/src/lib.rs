//! Common utilities for the Arbor crates.
//!
//! This crate provides shared infrastructure used by the tree builder:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
