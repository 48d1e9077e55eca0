//! Common test utilities for rasterpack CLI tests.
//!
//! - `TestEnv`: isolated temp directory plus helpers to run the binary
//! - Fixtures: small SVG documents with known pixel sizes

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
