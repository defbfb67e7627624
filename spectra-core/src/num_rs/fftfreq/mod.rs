use crate::{Error, Result};
use ndarray::Array1;

fn validate(n: usize, d: f64) -> Result<f64> {
    if n == 0 {
        return Err(Error::invalid("n", "window length must be > 0"));
    }
    if !d.is_finite() || d <= 0.0 {
        return Err(Error::invalid("d", "sample spacing must be finite and > 0"));
    }
    Ok(1.0 / (n as f64 * d))
}

/// Best effort parallel behaviour with numpy's `fft.fftfreq`.
///
/// Returns the discrete Fourier transform sample frequencies for a window of
/// length `n` and sample spacing `d`, laid out as
/// `[0, 1, ..., ceil(n/2) - 1, -floor(n/2), ..., -1] / (d * n)`.
///
/// # Errors
/// [Error::InvalidInput] when `n == 0` or `d` is not finite and positive.
///
/// ```
/// use ndarray::array;
/// use spectra_core::num_rs::fftfreq;
///
/// let f = fftfreq(4, 0.5).unwrap();
/// assert_eq!(f, array![0., 0.5, -1., -0.5]);
/// ```
pub fn fftfreq(n: usize, d: f64) -> Result<Array1<f64>> {
    let val = validate(n, d)?;
    let positive = n.div_ceil(2);
    Ok(Array1::from_iter((0..n).map(|k| {
        if k < positive {
            k as f64 * val
        } else {
            -((n - k) as f64) * val
        }
    })))
}

/// Best effort parallel behaviour with numpy's `fft.rfftfreq`.
///
/// Returns the `n / 2 + 1` non-negative sample frequencies of a real-input
/// transform of length `n` with sample spacing `d`.
///
/// # Errors
/// [Error::InvalidInput] when `n == 0` or `d` is not finite and positive.
///
/// ```
/// use ndarray::array;
/// use spectra_core::num_rs::rfftfreq;
///
/// let f = rfftfreq(5, 0.1).unwrap();
/// assert_eq!(f.len(), 3);
/// assert!((f[2] - 4.0).abs() < 1e-12);
/// ```
pub fn rfftfreq(n: usize, d: f64) -> Result<Array1<f64>> {
    let val = validate(n, d)?;
    Ok(Array1::from_iter((0..n / 2 + 1).map(|k| k as f64 * val)))
}
