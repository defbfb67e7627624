use crate::kernel::{ConfigError, KernelLifecycle};
use crate::signal::traits::{Periodogram1D, PowerSpectrum1D};
use crate::signal::{
    FrequencyGrid, LombScargleConfig, LombScargleKernel, Periodogram, PowerSpectrum,
    PowerSpectrumConfig, PowerSpectrumKernel, Sampling, Signal,
};
use spectra_core::{Error, Result};

/// Constructor config for [`SpectralAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzerConfig {
    /// Periodogram options used for irregularly sampled signals.
    pub lomb_scargle: LombScargleConfig,
}

/// Result of [`SpectralAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spectrum {
    /// DFT power of a uniformly sampled signal.
    Uniform(PowerSpectrum),
    /// Lomb-Scargle periodogram of an irregularly sampled signal.
    Periodogram(Periodogram),
}

impl Spectrum {
    /// Power values in output order.
    pub fn power(&self) -> &[f64] {
        match self {
            Spectrum::Uniform(s) => s.power(),
            Spectrum::Periodogram(p) => p.power(),
        }
    }

    /// Frequencies in cycles per unit time, aligned with [`Spectrum::power`].
    pub fn frequencies(&self) -> Vec<f64> {
        match self {
            Spectrum::Uniform(s) => s.frequencies().to_vec(),
            Spectrum::Periodogram(p) => p.frequencies(),
        }
    }

    /// Number of power values.
    pub fn len(&self) -> usize {
        self.power().len()
    }

    /// Whether there are no power values.
    pub fn is_empty(&self) -> bool {
        self.power().is_empty()
    }
}

///
/// Power spectra and periodograms behind one entry point.
///
/// Holds no state between calls; every method is a pure function of its
/// arguments and the construction-time config.
///
/// ```
/// use spectra::kernel::KernelLifecycle;
/// use spectra::signal::{FrequencyGrid, Signal};
/// use spectra::{AnalyzerConfig, SpectralAnalyzer, Spectrum};
///
/// let analyzer = SpectralAnalyzer::try_new(AnalyzerConfig::default()).unwrap();
///
/// let uniform = Signal::uniform(vec![1.0, 0.0, -1.0, 0.0], 0.5).unwrap();
/// let spectrum = analyzer.analyze(&uniform, None).unwrap();
/// assert!(matches!(spectrum, Spectrum::Uniform(_)));
/// assert_eq!(spectrum.frequencies(), vec![0.0, 0.5, 1.0, 1.5]);
///
/// let irregular = Signal::irregular(vec![0.0, 0.3, 0.7, 1.5], vec![1.0, 0.2, -0.4, 0.9]).unwrap();
/// assert!(analyzer.analyze(&irregular, None).is_err());
/// let grid = FrequencyGrid::linspace(0.5, 5.0, 50).unwrap();
/// assert_eq!(analyzer.analyze(&irregular, Some(&grid)).unwrap().len(), 50);
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpectralAnalyzer {
    lomb_scargle: LombScargleKernel,
}

impl KernelLifecycle for SpectralAnalyzer {
    type Config = AnalyzerConfig;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        Ok(Self {
            lomb_scargle: LombScargleKernel::try_new(config.lomb_scargle)?,
        })
    }
}

impl SpectralAnalyzer {
    /// `|DFT|^2` at every bin of uniformly spaced `samples`.
    ///
    /// See [`crate::signal::uniform_power_spectrum`].
    pub fn uniform_power_spectrum(&self, samples: &[f64]) -> Result<Vec<f64>> {
        crate::signal::uniform_power_spectrum(samples)
    }

    /// Lomb-Scargle periodogram on `angular_frequencies`.
    ///
    /// `normalize` overrides the configured setting; the centring options come
    /// from the analyzer's [`AnalyzerConfig`].
    pub fn lomb_scargle_periodogram(
        &self,
        timestamps: &[f64],
        samples: &[f64],
        angular_frequencies: &[f64],
        normalize: bool,
    ) -> Result<Vec<f64>> {
        let kernel = LombScargleKernel::try_new(LombScargleConfig {
            normalize,
            ..self.lomb_scargle.config()
        })?;
        Ok(kernel.run_alloc(timestamps, samples, angular_frequencies)?)
    }

    /// Spectrum of `signal`, chosen by how it was sampled.
    ///
    /// Uniform signals get the DFT power spectrum with bin frequencies in
    /// cycles per unit time and `grid` is not consulted. Irregular signals get
    /// the periodogram over `grid`.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] when an irregular signal comes without a grid
    /// or fails the periodogram's input checks.
    pub fn analyze(&self, signal: &Signal, grid: Option<&FrequencyGrid>) -> Result<Spectrum> {
        match signal.sampling() {
            Sampling::Uniform { interval } => {
                let kernel = PowerSpectrumKernel::try_new(PowerSpectrumConfig {
                    sample_interval: *interval,
                })?;
                Ok(Spectrum::Uniform(kernel.run_alloc(signal.samples())?))
            }
            Sampling::Irregular { timestamps } => {
                let grid = grid.ok_or(Error::invalid(
                    "grid",
                    "irregularly sampled signals need a frequency grid",
                ))?;
                let power =
                    self.lomb_scargle
                        .run_alloc(timestamps, signal.samples(), grid.as_slice())?;
                Ok(Spectrum::Periodogram(Periodogram::new(
                    grid.as_slice().to_vec(),
                    power,
                )))
            }
        }
    }
}
