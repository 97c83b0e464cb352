//! Activation range reporter
//!
//! One line per tracked intermediate tensor: the (max, min) range of its
//! values and of its gradients. Ranges collapsing toward zero suggest dead
//! units; ranges blowing up suggest numerical instability.

use netinfo_core::kernels::{exact_extrema, zero_seeded_extrema};
use netinfo_core::numeric::Numeric;
use netinfo_core::sink::InfoSink;
use netinfo_core::source::{NetSource, TensorSource};

/// Reports value and gradient ranges per named tensor
///
/// Output format, one line per tracked tensor, names left-justified and
/// padded so the columns align:
///
/// ```text
/// data   data: (2.55e2, 0e0) diff: (0e0, 0e0)
/// conv1  data: (8.1e0, -4.4e0) diff: (3.0e-3, -2.9e-3)
/// ```
///
/// The default reporter seeds both extrema at zero before the scan, exactly
/// as the reference implementation does. That makes ranges always bracket
/// zero: an all-negative tensor reports a maximum of `0e0`, not its true
/// maximum. This is a known quirk kept for output compatibility; use
/// [`BlobInfo::exact`] for true ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobInfo {
    exact: bool,
}

impl Default for BlobInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobInfo {
    /// The compatible reporter: extrema seeded at zero
    pub fn new() -> Self {
        Self { exact: false }
    }

    /// The corrected reporter: extrema taken from the data itself
    pub fn exact() -> Self {
        Self { exact: true }
    }

    /// Whether this reporter computes true extrema
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Scan the net and emit one line per tracked tensor
    pub fn print<T, N, S>(&self, net: &N, sink: &mut S)
    where
        T: Numeric,
        N: NetSource<T>,
        S: InfoSink + ?Sized,
    {
        let max_len = net
            .tensor_names()
            .iter()
            .map(|name| name.len())
            .max()
            .unwrap_or(0);

        let extrema: fn(&[T]) -> (T, T) = if self.exact {
            exact_extrema::<T>
        } else {
            zero_seeded_extrema::<T>
        };

        for (name, tensor) in net.tensor_names().iter().zip(net.tensors()) {
            let (data_max, data_min) = extrema(tensor.values());
            let (diff_max, diff_min) = extrema(tensor.diffs());
            sink.emit(&format!(
                "{:<width$} data: ({:e}, {:e}) diff: ({:e}, {:e})",
                name,
                data_max,
                data_min,
                diff_max,
                diff_min,
                width = max_len + 1,
            ));
        }
    }
}
