//! Lomb-Scargle periodograms of irregularly sampled signals.
//!
//! Power at angular frequency `w` is half the sum of squares explained by a
//! least-squares fit of `a cos(w t) + b sin(w t)` to the samples, evaluated in
//! closed form per frequency (Scargle 1982). With a floating mean an offset is
//! fitted jointly with the sinusoid (Zechmeister & Kürster 2009).

use crate::kernel::{
    read_paired, ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D,
};
use crate::signal::peak::largest_peaks;
use crate::signal::sampling::{is_positive_grid, is_strictly_increasing};
use crate::signal::traits::Periodogram1D;
use crate::stats::{mean, sum_of_squares};

/// Numerator applied to `1 / sum(y^2)` when normalising periodogram power.
///
/// With centred samples `sum(y^2) = N * var(y)`, so a normalised power of `1`
/// means the sinusoid at that frequency explains all of the variance.
pub const NORMALIZATION_SCALE: f64 = 2.0;

/// Fewest samples the periodogram accepts.
pub const MIN_SAMPLES: usize = 3;

/// Denominators below this fraction of their scale are treated as zero.
const DEGENERATE_TOLERANCE: f64 = 1e-14;

/// Constructor config for [`LombScargleKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LombScargleConfig {
    /// Scale each power by `NORMALIZATION_SCALE / sum(y^2)`.
    pub normalize: bool,
    /// Subtract the sample mean before evaluating.
    pub precenter: bool,
    /// Fit an offset jointly with the sinusoid at every frequency.
    pub floating_mean: bool,
}

/// Trait-first Lomb-Scargle periodogram kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LombScargleKernel {
    config: LombScargleConfig,
}

impl LombScargleKernel {
    /// Options the kernel was built with.
    pub fn config(&self) -> LombScargleConfig {
        self.config
    }

    fn validate<'a, IT, IY, IW>(
        timestamps: &'a IT,
        samples: &'a IY,
        angular_frequencies: &'a IW,
    ) -> Result<(&'a [f64], &'a [f64], &'a [f64]), ExecInvariantViolation>
    where
        IT: Read1D<f64> + ?Sized,
        IY: Read1D<f64> + ?Sized,
        IW: Read1D<f64> + ?Sized,
    {
        let (t, y) = read_paired(("timestamps", timestamps), ("samples", samples))?;
        if y.len() < MIN_SAMPLES {
            return Err(ExecInvariantViolation::InvalidInput {
                arg: "samples",
                reason: "lomb-scargle requires at least 3 samples",
            });
        }
        if !is_strictly_increasing(t) {
            return Err(ExecInvariantViolation::InvalidInput {
                arg: "timestamps",
                reason: "timestamps must be strictly increasing",
            });
        }
        let w = angular_frequencies
            .read_slice()
            .map_err(ExecInvariantViolation::from)?;
        if !is_positive_grid(w) {
            return Err(ExecInvariantViolation::InvalidInput {
                arg: "angular_frequencies",
                reason: "periodogram frequencies must be > 0",
            });
        }
        Ok((t, y, w))
    }

    fn evaluate(&self, t: &[f64], y: &[f64], w: &[f64], out: &mut [f64]) {
        tracing::trace!(
            samples = y.len(),
            frequencies = w.len(),
            floating_mean = self.config.floating_mean,
            "evaluating lomb-scargle periodogram"
        );

        let centered;
        let y = if self.config.precenter {
            let (avg, _) = mean::<_, f64>(y.iter());
            centered = y.iter().map(|v| v - avg).collect::<Vec<_>>();
            centered.as_slice()
        } else {
            y
        };

        for (p, &wi) in out.iter_mut().zip(w.iter()) {
            *p = if self.config.floating_mean {
                floating_mean_power(t, y, wi)
            } else {
                classic_power(t, y, wi)
            };
        }

        if self.config.normalize {
            let centered = self.config.precenter || self.config.floating_mean;
            let total = sum_of_squares(y, centered);
            if total == 0.0 {
                // No variance left to explain.
                out.fill(0.0);
            } else {
                let scale = NORMALIZATION_SCALE / total;
                out.iter_mut().for_each(|p| *p *= scale);
            }
        }
    }
}

fn ratio(num: f64, den: f64, scale: f64) -> f64 {
    if den <= DEGENERATE_TOLERANCE * scale {
        0.0
    } else {
        num / den
    }
}

fn classic_power(t: &[f64], y: &[f64], w: f64) -> f64 {
    let (mut xc, mut xs, mut cc, mut ss, mut cs) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&ti, &yi) in t.iter().zip(y.iter()) {
        let (s, c) = (w * ti).sin_cos();
        xc += yi * c;
        xs += yi * s;
        cc += c * c;
        ss += s * s;
        cs += c * s;
    }

    // Phase offset that decouples the sine and cosine terms.
    let tau = (2.0 * cs).atan2(cc - ss) / (2.0 * w);
    let (s_tau, c_tau) = (w * tau).sin_cos();
    let c_tau2 = c_tau * c_tau;
    let s_tau2 = s_tau * s_tau;
    let cs_tau = 2.0 * c_tau * s_tau;

    let scale = cc + ss;
    let cos_term = ratio(
        (c_tau * xc + s_tau * xs).powi(2),
        c_tau2 * cc + cs_tau * cs + s_tau2 * ss,
        scale,
    );
    let sin_term = ratio(
        (c_tau * xs - s_tau * xc).powi(2),
        c_tau2 * ss - cs_tau * cs + s_tau2 * cc,
        scale,
    );
    0.5 * (cos_term + sin_term)
}

fn floating_mean_power(t: &[f64], y: &[f64], w: f64) -> f64 {
    let n = y.len() as f64;
    let (mut sy, mut sc, mut ss) = (0.0, 0.0, 0.0);
    for (&ti, &yi) in t.iter().zip(y.iter()) {
        let (s, c) = (w * ti).sin_cos();
        sy += yi;
        sc += c;
        ss += s;
    }
    let (y_bar, c_bar, s_bar) = (sy / n, sc / n, ss / n);

    // Moments about the means, accumulated after centring so that low
    // frequencies, where cos(w t) stays near 1, keep their precision.
    let (mut yc, mut ys, mut cc, mut s2, mut cs) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&ti, &yi) in t.iter().zip(y.iter()) {
        let (s, c) = (w * ti).sin_cos();
        let (dy, dc, ds) = (yi - y_bar, c - c_bar, s - s_bar);
        yc += dy * dc;
        ys += dy * ds;
        cc += dc * dc;
        s2 += ds * ds;
        cs += dc * ds;
    }

    let det = cc * s2 - cs * cs;
    0.5 * ratio(s2 * yc * yc + cc * ys * ys - 2.0 * cs * yc * ys, det, cc * s2)
}

impl KernelLifecycle for LombScargleKernel {
    type Config = LombScargleConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.precenter && config.floating_mean {
            tracing::debug!(?config, "rejecting kernel config");
            return Err(ConfigError::InvalidArgument {
                arg: "precenter",
                reason: "precenter is redundant with floating_mean",
            });
        }
        Ok(Self { config })
    }
}

impl Periodogram1D for LombScargleKernel {
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
        O: Write1D<f64> + ?Sized,
    {
        let (t, y, w) = Self::validate(timestamps, samples, angular_frequencies)?;
        let out = power
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        if out.len() != w.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "power",
                expected: w.len(),
                got: out.len(),
            });
        }
        self.evaluate(t, y, w, out);
        Ok(())
    }

    fn run_alloc<IT, IY, IW>(
        &self,
        timestamps: &IT,
        samples: &IY,
        angular_frequencies: &IW,
    ) -> Result<Vec<f64>, ExecInvariantViolation>
    where
        IT: Read1D<f64> + ?Sized,
        IY: Read1D<f64> + ?Sized,
        IW: Read1D<f64> + ?Sized,
    {
        let (t, y, w) = Self::validate(timestamps, samples, angular_frequencies)?;
        let mut out = vec![0.0; w.len()];
        self.evaluate(t, y, w, &mut out);
        Ok(out)
    }
}

/// Periodogram power paired with the angular frequencies it was evaluated at.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Periodogram {
    angular_frequencies: Vec<f64>,
    power: Vec<f64>,
}

impl Periodogram {
    pub(crate) fn new(angular_frequencies: Vec<f64>, power: Vec<f64>) -> Self {
        Self {
            angular_frequencies,
            power,
        }
    }

    /// Grid the periodogram was evaluated on, in radians per unit time.
    pub fn angular_frequencies(&self) -> &[f64] {
        &self.angular_frequencies
    }

    /// Grid in cycles per unit time.
    pub fn frequencies(&self) -> Vec<f64> {
        self.angular_frequencies
            .iter()
            .map(|w| w / core::f64::consts::TAU)
            .collect()
    }

    /// Power per grid point.
    pub fn power(&self) -> &[f64] {
        &self.power
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.power.len()
    }

    /// Whether the periodogram was evaluated on an empty grid.
    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }

    /// `(angular frequency, power)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.angular_frequencies
            .iter()
            .copied()
            .zip(self.power.iter().copied())
    }

    /// Split into `(angular_frequencies, power)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.angular_frequencies, self.power)
    }

    /// Angular frequency carrying the most power.
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(w, _)| w)
    }

    /// Angular frequencies of up to `count` local maxima, strongest first.
    pub fn largest_peaks(&self, count: usize) -> Vec<f64> {
        largest_peaks(&self.power, count)
            .into_iter()
            .map(|k| self.angular_frequencies[k])
            .collect()
    }
}

/// Lomb-Scargle periodogram of irregularly sampled data.
///
/// Returns one power per entry of `angular_frequencies` (radians per unit of
/// `timestamps`). With `normalize`, each power is scaled by
/// [`NORMALIZATION_SCALE`]` / sum(samples^2)`.
///
/// # Errors
/// [`spectra_core::Error::InvalidInput`] when fewer than 3 samples are given,
/// `timestamps` and `samples` differ in length, `timestamps` are not strictly
/// increasing, or any angular frequency is not `> 0`.
///
/// ```
/// use spectra::signal::{lomb_scargle_periodogram, FrequencyGrid};
///
/// let t = [0.0, 0.3, 0.7, 1.5, 2.2];
/// let y: Vec<f64> = t.iter().map(|t| (std::f64::consts::TAU * t).sin()).collect();
/// let grid = FrequencyGrid::linspace(0.5, 5.0, 50).unwrap();
///
/// let power = lomb_scargle_periodogram(&t, &y, grid.as_slice(), false).unwrap();
/// assert_eq!(power.len(), 50);
/// assert!(lomb_scargle_periodogram(&t[..2], &y[..2], grid.as_slice(), false).is_err());
/// ```
pub fn lomb_scargle_periodogram(
    timestamps: &[f64],
    samples: &[f64],
    angular_frequencies: &[f64],
    normalize: bool,
) -> spectra_core::Result<Vec<f64>> {
    let kernel = LombScargleKernel::try_new(LombScargleConfig {
        normalize,
        ..Default::default()
    })?;
    Ok(kernel.run_alloc(timestamps, samples, angular_frequencies)?)
}
