use crate::{Error, Result};
use ndarray::{Array1, ArrayView1};

/// Correlation mode determines behavior near edges and output size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrelateMode {
    /// Full correlation, output size is `a.len() + v.len() - 1`
    Full,
    /// Valid correlation, output size is `max(a.len(), v.len()) - min(a.len(), v.len()) + 1`
    #[default]
    Valid,
    /// Same correlation, output size is `max(a.len(), v.len())`
    Same,
}

impl CorrelateMode {
    /// Output length for inputs of length `n` and `m`.
    pub fn output_len(self, n: usize, m: usize) -> usize {
        let (lo, hi) = if n < m { (n, m) } else { (m, n) };
        match self {
            CorrelateMode::Full => n + m - 1,
            CorrelateMode::Same => hi,
            CorrelateMode::Valid => hi - lo + 1,
        }
    }
}

/// Best effort parallel behaviour with numpy's correlate method.
///
/// Returns the cross-correlation of two one-dimensional sequences,
/// `c[k] = sum_n a[n + k] * v[n]`, evaluated over the lags selected by `mode`.
///
/// # Parameters
/// * `a` : (N,) [[array_like]]([ndarray::Array1])
///   First input sequence.
/// * `v` : (M,) [[array_like]]([ndarray::Array1])
///   Second input sequence.
/// * `mode` : [CorrelateMode]
///   [CorrelateMode::Valid]:
///   By default, mode is 'valid'. Only lags where the sequences overlap completely
///   are returned, an output of length ``max(M, N) - min(M, N) + 1``.
///
///   [CorrelateMode::Same]:
///   Mode 'same' returns output of length ``max(M, N)``. Boundary effects are visible.
///
///   [CorrelateMode::Full]:
///   Mode 'full' returns every lag with any overlap, an output of length (N+M-1,).
///
/// # Errors
/// [Error::InvalidInput] when either sequence is empty.
///
/// # Examples
/// ```
/// use ndarray::array;
/// use spectra_core::num_rs::{correlate, CorrelateMode};
///
/// let a = array![1., 2., 3.];
/// let v = array![0., 1., 0.5];
///
/// let full = correlate(a.view(), v.view(), CorrelateMode::Full).unwrap();
/// assert_eq!(full, array![0.5, 2., 3.5, 3., 0.]);
///
/// let same = correlate(a.view(), v.view(), CorrelateMode::Same).unwrap();
/// assert_eq!(same, array![2., 3.5, 3.]);
///
/// let valid = correlate(a.view(), v.view(), CorrelateMode::Valid).unwrap();
/// assert_eq!(valid, array![3.5]);
/// ```
pub fn correlate<T>(a: ArrayView1<T>, v: ArrayView1<T>, mode: CorrelateMode) -> Result<Array1<T>>
where
    T: num_traits::NumAssign + Copy,
{
    let n = a.len();
    let m = v.len();
    if n == 0 {
        return Err(Error::invalid("a", "correlate input must be non-empty"));
    }
    if m == 0 {
        return Err(Error::invalid("v", "correlate input must be non-empty"));
    }

    // Lag of full[i] is i - (m - 1).
    let full_len = n + m - 1;
    let lag_sum = |i: usize| {
        let mut acc = T::zero();
        for (j, &vj) in v.iter().enumerate() {
            let idx = i + j;
            if idx >= m - 1 && idx - (m - 1) < n {
                acc += a[idx - (m - 1)] * vj;
            }
        }
        acc
    };

    let lo = n.min(m);
    let start = match mode {
        CorrelateMode::Full => 0,
        CorrelateMode::Valid => lo - 1,
        // numpy swaps the operands when `v` is longer and reverses the result,
        // which moves the odd sample of an even-length window to the other side.
        CorrelateMode::Same if m > n => (lo - 1) - (lo - 1) / 2,
        CorrelateMode::Same => (lo - 1) / 2,
    };
    let len = mode.output_len(n, m);
    debug_assert!(start + len <= full_len);

    Ok(Array1::from_iter((start..start + len).map(lag_sum)))
}

#[cfg(test)]
mod cross_correlate {
    use super::*;
    use alloc::vec;
    use ndarray::array;

    #[test]
    fn full() {
        let a = array![1., 2., 3.];
        let v = array![0., 1., 0.5];

        let expected = array![0.5, 2., 3.5, 3., 0.];
        let result = correlate(a.view(), v.view(), CorrelateMode::Full).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn same() {
        let a = array![1., 2., 3.];
        let v = array![0., 1., 0.5];

        let expected = array![2., 3.5, 3.];
        let result = correlate(a.view(), v.view(), CorrelateMode::Same).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn valid() {
        let a = array![1., 2., 3.];
        let v = array![0., 1., 0.5];

        let expected = array![3.5];
        let result = correlate(a.view(), v.view(), CorrelateMode::Valid).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn same_with_even_window() {
        // np.correlate([1, 2, 3, 4], [1, 1], 'same')
        let a = array![1., 2., 3., 4.];
        let v = array![1., 1.];
        let result = correlate(a.view(), v.view(), CorrelateMode::Same).unwrap();
        assert_eq!(result, array![1., 3., 5., 7.]);

        // np.correlate([1, 1], [1, 2, 3, 4], 'same')
        let result = correlate(v.view(), a.view(), CorrelateMode::Same).unwrap();
        assert_eq!(result, array![7., 5., 3., 1.]);
    }

    #[test]
    fn integer_inputs() {
        let a = array![1i64, 2, 3];
        let v = array![1i64, 1];
        let result = correlate(a.view(), v.view(), CorrelateMode::Full).unwrap();
        assert_eq!(result, array![1, 3, 5, 3]);
    }

    #[test]
    fn empty_input_is_rejected() {
        let a = array![1., 2.];
        let v: Array1<f64> = Array1::zeros(0);
        let err = correlate(a.view(), v.view(), CorrelateMode::Full).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { arg: "v", .. }));
    }
}
