//! Trait interfaces for spectral-analysis capabilities.
//!
//! Every kernel offers a checked `run_into` that writes into caller-provided
//! buffers and a `run_alloc` convenience that allocates its output.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};

/// Power spectrum of uniformly sampled input.
pub trait PowerSpectrum1D {
    /// Allocated output bundle.
    type Output;

    /// Write `|DFT|^2` for every bin into `power`, which must match the input length.
    fn run_into<I, O>(&self, input: &I, power: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized;

    /// Compute the spectrum and allocate output.
    fn run_alloc<I>(&self, input: &I) -> Result<Self::Output, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized;
}

/// Periodogram of irregularly sampled input on an angular-frequency grid.
pub trait Periodogram1D {
    /// Write one power per grid frequency into `power`.
    fn run_into<IT, IY, IW, O>(
        &self,
        timestamps: &IT,
        samples: &IY,
        angular_frequencies: &IW,
        power: &mut O,
    ) -> Result<(), ExecInvariantViolation>
    where
        IT: Read1D<f64> + ?Sized,
        IY: Read1D<f64> + ?Sized,
        IW: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized;

    /// Evaluate the periodogram and allocate output.
    fn run_alloc<IT, IY, IW>(
        &self,
        timestamps: &IT,
        samples: &IY,
        angular_frequencies: &IW,
    ) -> Result<Vec<f64>, ExecInvariantViolation>
    where
        IT: Read1D<f64> + ?Sized,
        IY: Read1D<f64> + ?Sized,
        IW: Read1D<f64> + ?Sized;
}

/// 1D cross-correlation capability.
pub trait Correlate1D<T> {
    /// Run correlation into a caller-provided output buffer.
    fn run_into<I1, I2, O>(
        &self,
        in1: &I1,
        in2: &I2,
        out: &mut O,
    ) -> Result<(), ExecInvariantViolation>
    where
        I1: Read1D<T> + ?Sized,
        I2: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Run correlation and allocate output.
    fn run_alloc<I1, I2>(&self, in1: &I1, in2: &I2) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I1: Read1D<T> + ?Sized,
        I2: Read1D<T> + ?Sized;
}

/// 1D autocorrelation capability over non-negative lags.
pub trait Autocorrelate1D<T> {
    /// Write lags `0..out.len()` into `out`, which must match the input length.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Compute every non-negative lag and allocate output.
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;
}
