//! Discrete Fourier transform power spectra of uniformly sampled signals.

use crate::kernel::{
    require_positive_finite, ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D,
    Write1D,
};
use crate::signal::peak::largest_peaks;
use crate::signal::traits::PowerSpectrum1D;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use spectra_core::num_rs::fftfreq;

/// Power per DFT bin together with the bin frequencies.
///
/// Bin `k` of an `N`-sample transform carries frequency `k / (N * d)` where `d`
/// is the sample interval, so the upper half of the spectrum holds the aliases
/// of the negative frequencies.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerSpectrum {
    frequencies: Vec<f64>,
    power: Vec<f64>,
    sample_interval: f64,
}

impl PowerSpectrum {
    /// Frequency of each bin, `k / (N * d)`.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// `|X[k]|^2` for each bin.
    pub fn power(&self) -> &[f64] {
        &self.power
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.power.len()
    }

    /// Whether the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }

    /// `(frequency, power)` pairs in bin order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.power.iter().copied())
    }

    /// Split into `(frequencies, power)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.frequencies, self.power)
    }

    /// Bin frequencies in numpy `fftfreq` order, with the upper half negative.
    pub fn signed_frequencies(&self) -> spectra_core::Result<Vec<f64>> {
        Ok(fftfreq(self.power.len(), self.sample_interval)?.to_vec())
    }

    /// Bins `0..=N/2` of the spectrum, the half that is not a mirror image.
    pub fn non_mirrored(&self) -> (&[f64], &[f64]) {
        let end = self.power.len() / 2 + 1;
        let end = end.min(self.power.len());
        (&self.frequencies[..end], &self.power[..end])
    }

    /// Strongest bin in `1..=N/2`, skipping the zero-frequency term and the mirror.
    pub fn dominant_bin(&self) -> Option<usize> {
        let (_, power) = self.non_mirrored();
        power
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| k)
    }

    /// Frequency of [`PowerSpectrum::dominant_bin`].
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.dominant_bin().map(|k| self.frequencies[k])
    }

    /// Up to `count` local maxima of the non-mirrored half, strongest first.
    pub fn largest_peaks(&self, count: usize) -> Vec<usize> {
        largest_peaks(self.non_mirrored().1, count)
    }
}

/// Forward DFT of `x` zero-padded (or truncated) to `nfft` points.
pub(crate) fn fft_real(x: &[f64], nfft: usize) -> Vec<Complex<f64>> {
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(nfft);
    let mut buf = vec![Complex::new(0.0, 0.0); nfft];
    for (dst, src) in buf.iter_mut().zip(x.iter().copied()) {
        *dst = Complex::new(src, 0.0);
    }
    fft.process(&mut buf);
    buf
}

/// Unscaled inverse DFT; callers divide by `bins.len()`.
pub(crate) fn ifft(mut bins: Vec<Complex<f64>>) -> Vec<Complex<f64>> {
    let mut planner = FftPlanner::<f64>::new();
    let ifft = planner.plan_fft_inverse(bins.len());
    ifft.process(&mut bins);
    bins
}

fn power_spectrum_impl(x: &[f64]) -> Vec<f64> {
    fft_real(x, x.len())
        .into_iter()
        .map(|c| c.norm_sqr())
        .collect()
}

fn bin_frequencies(n: usize, interval: f64) -> Vec<f64> {
    let scale = 1.0 / (n as f64 * interval);
    (0..n).map(|k| k as f64 * scale).collect()
}

fn read_nonempty<I>(input: &I) -> Result<&[f64], ExecInvariantViolation>
where
    I: Read1D<f64> + ?Sized,
{
    let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
    if input.is_empty() {
        return Err(ExecInvariantViolation::InvalidInput {
            arg: "samples",
            reason: "power spectrum input must be non-empty",
        });
    }
    Ok(input)
}

/// Constructor config for [`PowerSpectrumKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerSpectrumConfig {
    /// Time between samples; `1.0` puts bin frequencies in cycles per sample.
    pub sample_interval: f64,
}

impl Default for PowerSpectrumConfig {
    fn default() -> Self {
        Self {
            sample_interval: 1.0,
        }
    }
}

/// Trait-first DFT power spectrum kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSpectrumKernel {
    sample_interval: f64,
}

impl KernelLifecycle for PowerSpectrumKernel {
    type Config = PowerSpectrumConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        let sample_interval = require_positive_finite(
            "sample_interval",
            config.sample_interval,
            "sample_interval must be finite and > 0",
        )?;
        Ok(Self { sample_interval })
    }
}

impl PowerSpectrum1D for PowerSpectrumKernel {
    type Output = PowerSpectrum;

    fn run_into<I, O>(&self, input: &I, power: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized,
    {
        let input = read_nonempty(input)?;
        let out = power
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        if out.len() != input.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "power",
                expected: input.len(),
                got: out.len(),
            });
        }

        tracing::trace!(samples = input.len(), "computing power spectrum");
        out.copy_from_slice(&power_spectrum_impl(input));
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Self::Output, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let input = read_nonempty(input)?;
        tracing::trace!(samples = input.len(), "computing power spectrum");
        Ok(PowerSpectrum {
            frequencies: bin_frequencies(input.len(), self.sample_interval),
            power: power_spectrum_impl(input),
            sample_interval: self.sample_interval,
        })
    }
}

/// Squared DFT magnitude at each of the `N` bins of `samples`.
///
/// The transform covers the full sequence, so both the positive- and the
/// (aliased) negative-frequency halves are returned and `power[k]` equals
/// `power[N - k]` for real input up to rounding.
///
/// # Errors
/// [`spectra_core::Error::InvalidInput`] when `samples` is empty.
///
/// ```
/// use spectra::signal::uniform_power_spectrum;
///
/// let power = uniform_power_spectrum(&[1.0, 0.0, -1.0, 0.0]).unwrap();
/// assert_eq!(power.len(), 4);
/// assert!((power[1] - 4.0).abs() < 1e-12);
/// assert!((power[3] - 4.0).abs() < 1e-12);
/// assert!(uniform_power_spectrum(&[]).is_err());
/// ```
pub fn uniform_power_spectrum(samples: &[f64]) -> spectra_core::Result<Vec<f64>> {
    let kernel = PowerSpectrumKernel::try_new(PowerSpectrumConfig::default())?;
    Ok(kernel.run_alloc(samples)?.power)
}
