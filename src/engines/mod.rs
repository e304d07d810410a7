//! Speech synthesis engines.
//!
//! This module contains implementations of text-to-speech engines.
//!
//! # Available Engines
//!
//! Enable engines via Cargo features:
//! - `monophone` - concatenative synthesis from monophone WAV recordings (default)

#[cfg(feature = "monophone")]
pub mod monophone;
