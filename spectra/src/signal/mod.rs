//! Spectral analysis of sampled signals.
//!
//! Uniformly sampled data goes through the DFT power spectrum, irregularly
//! sampled data through the Lomb-Scargle periodogram.

pub mod peak;
pub mod traits;

mod correlation;
mod lombscargle;
pub(crate) mod sampling;
mod spectral;

pub use correlation::*;
pub use lombscargle::*;
pub use peak::largest_peaks;
pub use sampling::{FrequencyGrid, Sampling, Signal};
pub use spectral::*;
