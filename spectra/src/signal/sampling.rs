//! Sampled-signal and frequency-grid value types.

use core::f64::consts::TAU;
use spectra_core::num_rs::linspace;
use spectra_core::{Error, Result};

/// How the samples of a [`Signal`] are placed in time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sampling {
    /// Evenly spaced samples, `interval` time units apart.
    Uniform {
        /// Time between consecutive samples.
        interval: f64,
    },
    /// Explicit, strictly increasing sample times.
    Irregular {
        /// One timestamp per sample.
        timestamps: Vec<f64>,
    },
}

/// An ordered sequence of real samples together with their placement in time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    samples: Vec<f64>,
    sampling: Sampling,
}

impl Signal {
    /// Uniformly sampled signal.
    ///
    /// ```
    /// use spectra::signal::Signal;
    ///
    /// let s = Signal::uniform(vec![0.0, 1.0, 0.0, -1.0], 0.25).unwrap();
    /// assert_eq!(s.len(), 4);
    /// assert!(Signal::uniform(vec![], 1.0).is_err());
    /// ```
    pub fn uniform(samples: Vec<f64>, interval: f64) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::invalid("samples", "signal must hold at least one sample"));
        }
        if !interval.is_finite() || interval <= 0.0 {
            return Err(Error::invalid(
                "interval",
                "sampling interval must be finite and > 0",
            ));
        }
        Ok(Self {
            samples,
            sampling: Sampling::Uniform { interval },
        })
    }

    /// Irregularly sampled signal with one timestamp per sample.
    pub fn irregular(timestamps: Vec<f64>, samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::invalid("samples", "signal must hold at least one sample"));
        }
        if timestamps.len() != samples.len() {
            return Err(Error::invalid(
                "timestamps",
                "timestamps and samples must have the same length",
            ));
        }
        if !is_strictly_increasing(&timestamps) {
            return Err(Error::invalid(
                "timestamps",
                "timestamps must be strictly increasing",
            ));
        }
        Ok(Self {
            samples,
            sampling: Sampling::Irregular { timestamps },
        })
    }

    /// Sample values.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample placement.
    pub fn sampling(&self) -> &Sampling {
        &self.sampling
    }

    /// Number of samples, always at least one.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal has no samples, which construction rules out.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample times, materialised for uniform signals as `i * interval`.
    pub fn times(&self) -> Vec<f64> {
        match &self.sampling {
            Sampling::Uniform { interval } => {
                (0..self.samples.len()).map(|i| i as f64 * interval).collect()
            }
            Sampling::Irregular { timestamps } => timestamps.clone(),
        }
    }
}

/// `true` when every timestamp is greater than the one before it.
pub(crate) fn is_strictly_increasing(timestamps: &[f64]) -> bool {
    // `!(b > a)` also rejects NaN neighbours.
    !timestamps.windows(2).any(|w| !(w[1] > w[0]))
}

/// `true` when every angular frequency is usable by the periodogram.
pub(crate) fn is_positive_grid(angular_frequencies: &[f64]) -> bool {
    !angular_frequencies.iter().any(|w| !(*w > 0.0))
}

/// Strictly positive angular frequencies at which a periodogram is evaluated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyGrid {
    angular: Vec<f64>,
}

impl FrequencyGrid {
    /// Grid from angular frequencies in radians per unit time.
    pub fn from_angular(angular: Vec<f64>) -> Result<Self> {
        if !is_positive_grid(&angular) {
            return Err(Error::invalid(
                "angular_frequencies",
                "periodogram frequencies must be > 0",
            ));
        }
        Ok(Self { angular })
    }

    /// Grid from ordinary frequencies in cycles per unit time.
    pub fn from_hertz(frequencies: &[f64]) -> Result<Self> {
        Self::from_angular(frequencies.iter().map(|f| TAU * f).collect())
    }

    /// `num` evenly spaced angular frequencies from `start` to `stop`, both inclusive.
    ///
    /// ```
    /// use spectra::signal::FrequencyGrid;
    ///
    /// let grid = FrequencyGrid::linspace(0.5, 5.0, 50).unwrap();
    /// assert_eq!(grid.len(), 50);
    /// assert_eq!(grid.as_slice()[0], 0.5);
    /// assert!((grid.as_slice()[49] - 5.0).abs() < 1e-12);
    /// ```
    pub fn linspace(start: f64, stop: f64, num: usize) -> Result<Self> {
        if num == 0 {
            return Err(Error::invalid("num", "grid must hold at least one frequency"));
        }
        Self::from_angular(linspace(start, stop, num, true)?.to_vec())
    }

    /// Angular frequencies.
    pub fn as_slice(&self) -> &[f64] {
        &self.angular
    }

    /// Grid spacing assuming an evenly spaced grid, `None` below two points.
    pub fn step(&self) -> Option<f64> {
        match self.angular.as_slice() {
            [first, .., last] => Some((last - first) / (self.angular.len() - 1) as f64),
            _ => None,
        }
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.angular.len()
    }

    /// Whether the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.angular.is_empty()
    }

    /// Ordinary frequencies, `omega / 2pi`.
    pub fn hertz(&self) -> Vec<f64> {
        self.angular.iter().map(|w| w / TAU).collect()
    }
}
