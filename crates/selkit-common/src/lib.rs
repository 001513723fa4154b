//! Common utilities for the selkit crates.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for suspicious input

pub mod warning;
