//! Stride decimation of chart series.

use log::debug;
use std::num::NonZeroUsize;

/// Upper bound on the points handed to a chart.
pub const DEFAULT_MAX_POINTS: NonZeroUsize = match NonZeroUsize::new(500) {
    Some(n) => n,
    None => panic!("zero chart points"),
};

/// Reduces `points` to roughly `max_points` by keeping every `k`-th element,
/// `k = ceil(len / max_points)`.
///
/// Sequences that already fit are returned unchanged. The first element is
/// always kept, and so is the last: it is appended when the stride misses it,
/// or takes the place of the final stride sample when appending would exceed
/// `max_points`. Output order follows input order and re-applying the function
/// with the same bound returns its input.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use wxdash::downsample;
///
/// let points: Vec<u32> = (0..10).collect();
/// let max = NonZeroUsize::new(4).unwrap();
/// assert_eq!(downsample(&points, max), [0, 3, 6, 9]);
///
/// let max = NonZeroUsize::new(5).unwrap();
/// assert_eq!(downsample(&points, max), [0, 2, 4, 6, 9]);
/// ```
pub fn downsample<T: Clone>(points: &[T], max_points: NonZeroUsize) -> Vec<T> {
    let max = max_points.get();
    if points.len() <= max {
        return points.to_vec();
    }

    let step = points.len().div_ceil(max);
    let mut sampled: Vec<T> = points.iter().step_by(step).cloned().collect();

    let last_index = points.len() - 1;
    if last_index % step != 0 {
        let last = points[last_index].clone();
        // Replacing must never drop the first element.
        if sampled.len() >= max && sampled.len() > 1 {
            let end = sampled.len() - 1;
            sampled[end] = last;
        } else {
            sampled.push(last);
        }
    }

    debug!(
        "Downsampled {} points to {} (stride {})",
        points.len(),
        sampled.len(),
        step
    );
    sampled
}

/// [`downsample`] with [`DEFAULT_MAX_POINTS`].
pub fn downsample_default<T: Clone>(points: &[T]) -> Vec<T> {
    downsample(points, DEFAULT_MAX_POINTS)
}
