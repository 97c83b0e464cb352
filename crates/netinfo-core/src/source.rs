//! Read-view traits for the graph under diagnosis
//!
//! The reporters never own graph state; they consume it through these three
//! narrow views. A training engine implements them directly on its own
//! network types, or adapts through the concrete [`crate::net`] types.
//!
//! The views promise a stable snapshot for the duration of one print call:
//! no mutation of layers, names, or buffers between the sizing pass and the
//! computation pass.

use crate::numeric::Numeric;

/// Read view of one tensor: parallel value and gradient buffers
///
/// Implementors guarantee `values().len() == diffs().len() == count()`;
/// index `i` in both slices refers to the same logical scalar. The
/// reporters rely on this and do not re-check it.
pub trait TensorSource<T: Numeric> {
    /// Number of elements in the tensor
    fn count(&self) -> usize;

    /// Primary values, flattened
    fn values(&self) -> &[T];

    /// Gradient values, parallel to `values`
    fn diffs(&self) -> &[T];
}

/// Read view of one layer: a label and its owned parameter tensors
pub trait LayerSource<T: Numeric> {
    type Tensor: TensorSource<T>;

    /// Human-readable configuration name (not necessarily unique)
    fn name(&self) -> &str;

    /// Parameter tensors in owner order; may be empty
    fn params(&self) -> &[Self::Tensor];
}

/// Read view of the whole graph
///
/// `tensor_names` and `tensors` are parallel slices enumerating every
/// tracked intermediate tensor; the owner guarantees name uniqueness and
/// equal lengths.
pub trait NetSource<T: Numeric> {
    type Layer: LayerSource<T>;
    type Tensor: TensorSource<T>;

    /// Layers in evaluation order
    fn layers(&self) -> &[Self::Layer];

    /// Names of all tracked intermediate tensors
    fn tensor_names(&self) -> &[String];

    /// The tracked intermediate tensors, parallel to `tensor_names`
    fn tensors(&self) -> &[Self::Tensor];
}
