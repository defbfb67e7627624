//! Peak picking on spectra and periodograms, analogous to `scipy.signal` peak APIs.

/// Options for [`find_peaks`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FindPeaksOptions {
    /// Drop peaks lower than this.
    pub height: Option<f64>,
    /// Keep the taller of two peaks closer than this many samples.
    pub distance: Option<usize>,
}

/// Indices `i` where `comparator(x[i], x[j])` holds for every `j` within `order` samples.
///
/// The first and last `order` samples are never reported.
pub fn argrelextrema<C>(x: &[f64], comparator: C, order: usize) -> Vec<usize>
where
    C: Fn(f64, f64) -> bool,
{
    if order == 0 || x.len() <= 2 * order {
        return Vec::new();
    }
    (order..x.len() - order)
        .filter(|&i| {
            (1..=order).all(|k| comparator(x[i], x[i - k]) && comparator(x[i], x[i + k]))
        })
        .collect()
}

/// Strict relative maxima over a window of `order` samples either side.
pub fn argrelmax(x: &[f64], order: usize) -> Vec<usize> {
    argrelextrema(x, |a, b| a > b, order)
}

/// `peaks` ordered from tallest to shortest, ties broken by index.
fn by_height(x: &[f64], mut peaks: Vec<usize>) -> Vec<usize> {
    peaks.sort_by(|&a, &b| x[b].total_cmp(&x[a]).then(a.cmp(&b)));
    peaks
}

/// Strict local maxima of `x`, filtered by `options`, in index order.
pub fn find_peaks(x: &[f64], options: FindPeaksOptions) -> Vec<usize> {
    let mut peaks = argrelmax(x, 1);
    if let Some(height) = options.height {
        peaks.retain(|&i| x[i] >= height);
    }

    match options.distance {
        Some(distance) if distance > 1 => {
            let mut kept: Vec<usize> = Vec::with_capacity(peaks.len());
            for cand in by_height(x, peaks) {
                if kept.iter().all(|&k| k.abs_diff(cand) >= distance) {
                    kept.push(cand);
                }
            }
            kept.sort_unstable();
            kept
        }
        _ => peaks,
    }
}

/// Indices of the `count` highest local maxima, strongest first.
///
/// ```
/// use spectra::signal::largest_peaks;
///
/// let p = [0.0, 3.0, 1.0, 5.0, 0.5, 2.0, 0.0];
/// assert_eq!(largest_peaks(&p, 2), vec![3, 1]);
/// ```
pub fn largest_peaks(x: &[f64], count: usize) -> Vec<usize> {
    let mut peaks = by_height(x, find_peaks(x, FindPeaksOptions::default()));
    peaks.truncate(count);
    peaks
}
