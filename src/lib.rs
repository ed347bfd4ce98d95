//! # Respell
//!
//! A frequency-based spelling correction library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Word-frequency dictionaries built from raw text corpora
//! - Edit-distance based correction (distance 1 and 2)
//! - Frequency-weighted candidate ranking
//! - Evaluation harness for labeled typo fixtures

pub mod cli;
pub mod corrector;
pub mod dictionary;
pub mod error;
pub mod eval;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
