//! Sample reductions used for centring and normalising spectra.

use core::{borrow::Borrow, iter::Sum, ops::Add};
use num_traits::{Float, Num, NumCast};

///
/// Compute the mean of the signal, `y`
///
/// Return the mean and the number of points averaged
///
/// ```
/// use approx::assert_relative_eq;
/// use spectra::stats::mean;
///
/// let y: [f64; 5] = [1.,2.,3.,4.,5.];
/// assert_relative_eq!(3f64, mean(y.iter()).0);
///
/// let y: &[f32] = &[];
/// assert_eq!((0f32, 0), mean(y.iter()));
///
/// ```
///
pub fn mean<YI, F>(y: YI) -> (F, usize)
where
    F: Num + NumCast + Default + Copy + Add,
    YI: Iterator,
    YI::Item: Borrow<F>,
{
    let (sum, count) = y.fold(Default::default(), |acc: (F, usize), yi| {
        (acc.0 + *yi.borrow(), acc.1 + 1)
    });
    match F::from(count) {
        Some(n) if count > 0 => (sum / n, count),
        _ => Default::default(),
    }
}

///
/// Compute the population variance of the signal, `y`
///
/// Return the variance and the number of points averaged
///
/// ```
/// use approx::assert_relative_eq;
/// use spectra::stats::variance;
///
/// let y: [f64; 5] = [1.,2.,3.,4.,5.];
/// assert_relative_eq!(2f64, variance(y.iter()).0);
///
/// let y: &[f32] = &[];
/// assert_eq!((0f32, 0), variance(y.iter()));
///
/// ```
///
pub fn variance<YI, F>(y: YI) -> (F, usize)
where
    F: Float + Default + Sum,
    YI: Iterator + Clone,
    YI::Item: Borrow<F>,
{
    let (avg, n) = mean(y.clone());
    let sum: F = y
        .map(|f| {
            let delta = *f.borrow() - avg;
            delta * delta
        })
        .sum::<F>();
    match F::from(n) {
        Some(count) if n > 0 => (sum / count, n),
        _ => Default::default(),
    }
}

/// Sum of squares of `y`, optionally about its mean.
pub(crate) fn sum_of_squares(y: &[f64], centered: bool) -> f64 {
    let offset = if centered { mean(y.iter()).0 } else { 0.0 };
    y.iter().map(|v| (v - offset) * (v - offset)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_and_variance_match_reference() {
        let input = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let (m, n): (f64, _) = mean(input.iter());
        let (v, _): (f64, _) = variance(input.iter());
        assert_eq!(n, input.len());
        assert_relative_eq!(m, 5.0, epsilon = 1e-12);
        assert_relative_eq!(v, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn sum_of_squares_relates_to_variance() {
        let input = [1.0f64, -2.0, 3.5, 0.25, 8.0];
        let (v, n): (f64, _) = variance(input.iter());
        assert_relative_eq!(sum_of_squares(&input, true), v * n as f64, epsilon = 1e-12);
        assert_relative_eq!(
            sum_of_squares(&input, false),
            input.iter().map(|x| x * x).sum::<f64>(),
            epsilon = 1e-12
        );
    }
}
