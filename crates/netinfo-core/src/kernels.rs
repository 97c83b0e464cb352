//! Streaming reductions over flat tensor storage
//!
//! Single-pass folds used by the reporters. All three walk a slice once,
//! keep their accumulators on the stack, and allocate nothing.

use crate::numeric::Numeric;

/// Mean of absolute values
///
/// Absolute value is taken by comparing against zero rather than calling a
/// float intrinsic, so the kernel stays defined for any `Numeric`. An empty
/// slice yields zero; there is no division-by-zero edge.
///
/// ```rust
/// use netinfo_core::kernels::mean_abs;
///
/// assert_eq!(mean_abs(&[1.0_f32, -2.0, 3.0, -4.0]), 2.5);
/// assert_eq!(mean_abs::<f64>(&[]), 0.0);
/// ```
pub fn mean_abs<T: Numeric>(sample: &[T]) -> T {
    if sample.is_empty() {
        return T::zero();
    }
    let mut sum = T::zero();
    for &x in sample {
        sum += if x > T::zero() { x } else { -x };
    }
    sum / T::from_count(sample.len())
}

/// (max, min) with both extrema seeded at zero
///
/// Reproduces the reference reporter's range scan exactly: both accumulators
/// start at the additive identity and are updated with strict comparisons.
/// The consequence is that `max >= 0 >= min` always holds, and an
/// all-negative slice reports a maximum of zero rather than its true
/// maximum. Use [`exact_extrema`] for the true range.
///
/// ```rust
/// use netinfo_core::kernels::zero_seeded_extrema;
///
/// assert_eq!(zero_seeded_extrema(&[-5.0_f64, -3.0]), (0.0, -5.0));
/// assert_eq!(zero_seeded_extrema::<f32>(&[]), (0.0, 0.0));
/// ```
pub fn zero_seeded_extrema<T: Numeric>(sample: &[T]) -> (T, T) {
    let mut max = T::zero();
    let mut min = T::zero();
    for &x in sample {
        if x > max {
            max = x;
        }
        if x < min {
            min = x;
        }
    }
    (max, min)
}

/// (max, min) seeded from the first element
///
/// The corrected range scan: extrema come from the data itself, so an
/// all-negative slice reports its true maximum. An empty slice yields
/// `(0, 0)`.
pub fn exact_extrema<T: Numeric>(sample: &[T]) -> (T, T) {
    let mut iter = sample.iter().copied();
    let first = match iter.next() {
        Some(x) => x,
        None => return (T::zero(), T::zero()),
    };
    let mut max = first;
    let mut min = first;
    for x in iter {
        if x > max {
            max = x;
        }
        if x < min {
            min = x;
        }
    }
    (max, min)
}
