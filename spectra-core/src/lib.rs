//! Core types shared by the `spectra` crates.
//!
//! Holds the crate-wide [`Error`]/[`Result`] pair and the [`num_rs`] helpers that
//! mirror the handful of numpy routines spectral analysis leans on.

#![no_std]
#![deny(missing_docs)]

extern crate alloc;

mod error;

/// Best effort parallels to numpy routines.
pub mod num_rs;

pub use error::{Error, Result};
