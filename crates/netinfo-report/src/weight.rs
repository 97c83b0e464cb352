//! Parameter magnitude reporter
//!
//! One line per parameter tensor: mean absolute value and, in brackets,
//! mean absolute gradient. A shrinking bracketed number across iterations is
//! the classic signature of a vanishing gradient; a growing one, of
//! divergence.

use netinfo_core::kernels::mean_abs;
use netinfo_core::numeric::Numeric;
use netinfo_core::sink::InfoSink;
use netinfo_core::source::{LayerSource, NetSource, TensorSource};

/// Reports mean |weight| and mean |gradient| per parameter tensor
///
/// Output format, one line per tensor, layer names left-justified and
/// padded so the columns align:
///
/// ```text
/// conv1  blob0: 1.2e-1 [3.4e-4]
/// conv1  blob1: 5.0e-2 [1.1e-4]
/// fc6    blob0: 8.9e-3 [2.2e-5]
/// ```
///
/// `blob<b>` is the zero-based index of the tensor within its owning layer.
/// Layers without parameters emit nothing and do not widen the name column.
/// An empty parameter tensor reports `0e0 [0e0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightInfo;

impl WeightInfo {
    pub fn new() -> Self {
        Self
    }

    /// Scan the net and emit one line per parameter tensor
    pub fn print<T, N, S>(&self, net: &N, sink: &mut S)
    where
        T: Numeric,
        N: NetSource<T>,
        S: InfoSink + ?Sized,
    {
        // Sizing pass: only layers that will produce output count.
        let mut max_len = 0;
        for layer in net.layers() {
            if !layer.params().is_empty() {
                max_len = max_len.max(layer.name().len());
            }
        }

        for layer in net.layers() {
            for (b, tensor) in layer.params().iter().enumerate() {
                let data_mean = mean_abs(tensor.values());
                let diff_mean = mean_abs(tensor.diffs());
                sink.emit(&format!(
                    "{:<width$} blob{}: {:e} [{:e}]",
                    layer.name(),
                    b,
                    data_mean,
                    diff_mean,
                    width = max_len + 1,
                ));
            }
        }
    }
}
