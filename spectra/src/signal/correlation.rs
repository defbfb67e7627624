//! Cross-correlation and autocorrelation of sampled signals.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::spectral::{fft_real, ifft};
use crate::signal::traits::{Autocorrelate1D, Correlate1D};
use crate::stats::{mean, sum_of_squares};
use ndarray::ArrayView1;
use spectra_core::num_rs::{correlate, CorrelateMode};

fn read_nonempty<'a, I>(arg: &'static str, input: &'a I) -> Result<&'a [f64], ExecInvariantViolation>
where
    I: Read1D<f64> + ?Sized,
{
    let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
    if input.is_empty() {
        return Err(ExecInvariantViolation::InvalidInput {
            arg,
            reason: "correlation input must be non-empty",
        });
    }
    Ok(input)
}

fn correlate_impl(
    a: &[f64],
    v: &[f64],
    mode: CorrelateMode,
) -> Result<Vec<f64>, ExecInvariantViolation> {
    correlate(ArrayView1::from(a), ArrayView1::from(v), mode)
        .map(|c| c.to_vec())
        .map_err(ExecInvariantViolation::from)
}

fn demeaned(x: &[f64]) -> Vec<f64> {
    let (avg, _) = mean::<_, f64>(x.iter());
    x.iter().map(|v| v - avg).collect()
}

/// Lags `0..N` of the mean-removed linear autocorrelation via direct summation.
fn autocorr_direct(x: &[f64]) -> Result<Vec<f64>, ExecInvariantViolation> {
    let d = demeaned(x);
    let full = correlate_impl(&d, &d, CorrelateMode::Full)?;
    Ok(full[d.len() - 1..].to_vec())
}

/// Same as [`autocorr_direct`], through the power spectrum of the zero-padded
/// sequence (Wiener-Khinchin).
fn autocorr_fft(x: &[f64]) -> Vec<f64> {
    let d = demeaned(x);
    let nfft = 2 * d.len();
    let power = fft_real(&d, nfft)
        .into_iter()
        .map(|c| rustfft::num_complex::Complex::new(c.norm_sqr(), 0.0))
        .collect();
    let scale = 1.0 / nfft as f64;
    ifft(power)
        .into_iter()
        .take(d.len())
        .map(|c| c.re * scale)
        .collect()
}

/// Method used by [`AutocorrelationKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutocorrelationMethod {
    /// Direct lagged products, `O(N^2)`.
    Direct,
    /// Inverse transform of the zero-padded power spectrum, `O(N log N)`.
    #[default]
    Fft,
}

/// Constructor config for [`AutocorrelationKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutocorrelationConfig {
    /// Evaluation method.
    pub method: AutocorrelationMethod,
}

/// Trait-first normalised autocorrelation kernel.
///
/// Lag `k` is `sum_n d[n] d[n + k] / sum_n d[n]^2` with `d` the mean-removed
/// input, so lag 0 is exactly one. A constant input has no variance to
/// normalise by and yields one followed by zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocorrelationKernel {
    method: AutocorrelationMethod,
}

impl AutocorrelationKernel {
    fn compute(&self, x: &[f64]) -> Result<Vec<f64>, ExecInvariantViolation> {
        tracing::trace!(samples = x.len(), method = ?self.method, "autocorrelating");
        if sum_of_squares(x, true) == 0.0 {
            let mut out = vec![0.0; x.len()];
            out[0] = 1.0;
            return Ok(out);
        }
        let mut acf = match self.method {
            AutocorrelationMethod::Direct => autocorr_direct(x)?,
            AutocorrelationMethod::Fft => autocorr_fft(x),
        };
        let lag0 = acf[0];
        acf.iter_mut().for_each(|r| *r /= lag0);
        Ok(acf)
    }
}

impl KernelLifecycle for AutocorrelationKernel {
    type Config = AutocorrelationConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self {
            method: config.method,
        })
    }
}

impl Autocorrelate1D<f64> for AutocorrelationKernel {
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized,
    {
        let input = read_nonempty("x", input)?;
        let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
        if out.len() != input.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: input.len(),
                got: out.len(),
            });
        }
        out.copy_from_slice(&self.compute(input)?);
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<f64>, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let input = read_nonempty("x", input)?;
        self.compute(input)
    }
}

/// Constructor config for [`CorrelateKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelateConfig {
    /// Which lags to return.
    pub mode: CorrelateMode,
}

/// Trait-first cross-correlation kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelateKernel {
    mode: CorrelateMode,
}

impl KernelLifecycle for CorrelateKernel {
    type Config = CorrelateConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self { mode: config.mode })
    }
}

impl Correlate1D<f64> for CorrelateKernel {
    fn run_into<I1, I2, O>(
        &self,
        in1: &I1,
        in2: &I2,
        out: &mut O,
    ) -> Result<(), ExecInvariantViolation>
    where
        I1: Read1D<f64> + ?Sized,
        I2: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized,
    {
        let a = read_nonempty("a", in1)?;
        let v = read_nonempty("v", in2)?;
        let expected = self.mode.output_len(a.len(), v.len());
        let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
        if out.len() != expected {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected,
                got: out.len(),
            });
        }
        tracing::trace!(a = a.len(), v = v.len(), mode = ?self.mode, "cross-correlating");
        out.copy_from_slice(&correlate_impl(a, v, self.mode)?);
        Ok(())
    }

    fn run_alloc<I1, I2>(&self, in1: &I1, in2: &I2) -> Result<Vec<f64>, ExecInvariantViolation>
    where
        I1: Read1D<f64> + ?Sized,
        I2: Read1D<f64> + ?Sized,
    {
        let a = read_nonempty("a", in1)?;
        let v = read_nonempty("v", in2)?;
        tracing::trace!(a = a.len(), v = v.len(), mode = ?self.mode, "cross-correlating");
        correlate_impl(a, v, self.mode)
    }
}

/// Cross-correlation `c[k] = sum_n a[n + k] * v[n]` over the lags chosen by `mode`.
///
/// ```
/// use spectra::signal::cross_correlation;
/// use spectra_core::num_rs::CorrelateMode;
///
/// let c = cross_correlation(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5], CorrelateMode::Full).unwrap();
/// assert_eq!(c, vec![0.5, 2.0, 3.5, 3.0, 0.0]);
/// ```
pub fn cross_correlation(a: &[f64], v: &[f64], mode: CorrelateMode) -> spectra_core::Result<Vec<f64>> {
    let kernel = CorrelateKernel::try_new(CorrelateConfig { mode })?;
    Ok(kernel.run_alloc(a, v)?)
}

/// Normalised autocorrelation of `x` at lags `0..x.len()` by direct summation.
pub fn autocorrelation(x: &[f64]) -> spectra_core::Result<Vec<f64>> {
    let kernel = AutocorrelationKernel::try_new(AutocorrelationConfig {
        method: AutocorrelationMethod::Direct,
    })?;
    Ok(kernel.run_alloc(x)?)
}

/// Normalised autocorrelation of `x` computed from its power spectrum.
///
/// ```
/// use spectra::signal::{autocorrelation, autocorrelation_fft};
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let direct = autocorrelation(&x).unwrap();
/// let fft = autocorrelation_fft(&x).unwrap();
/// assert!(direct.iter().zip(&fft).all(|(a, b)| (a - b).abs() < 1e-12));
/// ```
pub fn autocorrelation_fft(x: &[f64]) -> spectra_core::Result<Vec<f64>> {
    let kernel = AutocorrelationKernel::try_new(AutocorrelationConfig {
        method: AutocorrelationMethod::Fft,
    })?;
    Ok(kernel.run_alloc(x)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use spectra_core::Error;

    #[test]
    fn autocorrelation_matches_hand_computed_lags() {
        let r = autocorrelation(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let expected = [1.0, 0.25, -0.3, -0.45];
        r.iter()
            .zip(expected.iter())
            .for_each(|(a, b)| assert_abs_diff_eq!(*a, *b, epsilon = 1e-12));
    }

    #[test]
    fn direct_and_fft_autocorrelation_agree() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in [2usize, 5, 64, 301] {
            let x: Vec<f64> = (0..n).map(|_| rng.random_range(-2.0..2.0)).collect();
            let direct = autocorrelation(&x).unwrap();
            let fft = autocorrelation_fft(&x).unwrap();
            assert_eq!(direct.len(), n);
            assert_eq!(direct[0], 1.0);
            assert_eq!(fft[0], 1.0);
            direct
                .iter()
                .zip(fft.iter())
                .for_each(|(a, b)| assert_abs_diff_eq!(*a, *b, epsilon = 1e-9));
        }
    }

    #[test]
    fn constant_input_has_unit_lag_zero_only() {
        for method in [AutocorrelationMethod::Direct, AutocorrelationMethod::Fft] {
            let kernel = AutocorrelationKernel::try_new(AutocorrelationConfig { method }).unwrap();
            assert_eq!(kernel.run_alloc(&[4.0; 5]).unwrap(), vec![1.0, 0.0, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn periodic_signal_correlates_at_its_period() {
        let x: Vec<f64> = (0..200)
            .map(|i| (2.0 * core::f64::consts::PI * i as f64 / 20.0).cos())
            .collect();
        let r = autocorrelation_fft(&x).unwrap();
        assert!(r[20] > 0.85);
        assert!(r[10] < -0.85);
    }

    #[test]
    fn empty_inputs_are_invalid() {
        assert!(matches!(
            autocorrelation(&[]),
            Err(Error::InvalidInput { arg: "x", .. })
        ));
        assert!(matches!(
            cross_correlation(&[1.0], &[], CorrelateMode::Full),
            Err(Error::InvalidInput { arg: "v", .. })
        ));
    }

    #[test]
    fn cross_correlation_finds_shift() {
        let a: Vec<f64> = (0..32).map(|i| if i == 12 { 1.0 } else { 0.0 }).collect();
        let v: Vec<f64> = (0..32).map(|i| if i == 7 { 1.0 } else { 0.0 }).collect();
        let c = cross_correlation(&a, &v, CorrelateMode::Full).unwrap();
        let (idx, _) = c
            .iter()
            .enumerate()
            .max_by(|x, y| x.1.total_cmp(y.1))
            .expect("non-empty");
        // full[i] holds lag i - (len(v) - 1)
        assert_eq!(idx as isize - 31, 5);
    }

    #[test]
    fn kernel_contracts_validate_output_shape() {
        let kernel = CorrelateKernel::try_new(CorrelateConfig {
            mode: CorrelateMode::Same,
        })
        .unwrap();
        let a = [1.0, 2.0, 3.0, 4.0];
        let v = [1.0, 1.0];
        let mut out = vec![0.0; 3];
        let err = kernel
            .run_into(&a, &v, &mut out)
            .expect_err("mismatched output length should error");
        assert!(matches!(
            err,
            ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: 4,
                got: 3
            }
        ));

        let mut out = [0.0; 4];
        kernel.run_into(&a, &v, &mut out).unwrap();
        assert_eq!(out, [1.0, 3.0, 5.0, 7.0]);

        let auto = AutocorrelationKernel::try_new(AutocorrelationConfig::default()).unwrap();
        let mut out = vec![0.0; 3];
        assert!(auto.run_into(&a, &mut out).is_err());
    }
}
