use crate::{Error, Result};
use ndarray::Array1;

/// Best effort parallel behaviour with numpy's `linspace`.
///
/// Returns `num` evenly spaced samples over `[start, stop]`, or over
/// `[start, stop)` when `endpoint` is false. With `endpoint` set the final
/// sample is exactly `stop`.
///
/// # Errors
/// [Error::InvalidInput] when either bound is not finite.
///
/// ```
/// use ndarray::array;
/// use spectra_core::num_rs::linspace;
///
/// assert_eq!(linspace(2.0, 3.0, 5, true).unwrap(), array![2.0, 2.25, 2.5, 2.75, 3.0]);
/// assert_eq!(linspace(2.0, 3.0, 5, false).unwrap(), array![2.0, 2.2, 2.4, 2.6, 2.8]);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize, endpoint: bool) -> Result<Array1<f64>> {
    if !start.is_finite() {
        return Err(Error::invalid("start", "interval bounds must be finite"));
    }
    if !stop.is_finite() {
        return Err(Error::invalid("stop", "interval bounds must be finite"));
    }
    let div = if endpoint { num.saturating_sub(1) } else { num };
    if div == 0 {
        return Ok(Array1::from_elem(num, start));
    }
    let step = (stop - start) / div as f64;
    let mut out = Array1::from_iter((0..num).map(|i| start + i as f64 * step));
    if endpoint {
        out[num - 1] = stop;
    }
    Ok(out)
}
