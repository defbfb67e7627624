//! Power spectra and periodograms of sampled signals.
//!
//! Uniformly sampled data is analysed with the discrete Fourier transform,
//! irregularly sampled data with the Lomb-Scargle periodogram. Both are
//! available as plain functions in [`signal`], as configurable kernels built
//! through [`kernel::KernelLifecycle`], and behind [`SpectralAnalyzer`].
//!
//! ```
//! use spectra::signal::{largest_peaks, lomb_scargle_periodogram, FrequencyGrid};
//!
//! let t: Vec<f64> = (0..200).map(|i| 0.05 * i as f64 + 0.01 * (i as f64).sin()).collect();
//! let y: Vec<f64> = t.iter().map(|t| (std::f64::consts::TAU * 2.0 * t).sin()).collect();
//! let grid = FrequencyGrid::from_hertz(&[1.0, 1.5, 2.0, 2.5, 3.0]).unwrap();
//!
//! let power = lomb_scargle_periodogram(&t, &y, grid.as_slice(), true).unwrap();
//! assert_eq!(largest_peaks(&power, 1), vec![2]);
//! ```

pub mod kernel;
pub mod signal;
pub mod stats;

mod analyzer;

pub use analyzer::*;
pub use spectra_core::num_rs;
pub use spectra_core::{Error, Result};
