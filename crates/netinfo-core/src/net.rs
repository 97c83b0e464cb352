//! Concrete in-memory graph collaborators
//!
//! Reference implementations of the [`crate::source`] traits, used by tests,
//! demos, and engines that do not carry their own graph container. Unlike
//! the raw traits, the constructors here check the collaborator contract:
//! a gradient buffer must match its value buffer in length, and tracked
//! tensor names must be unique. Violations fail fast with a descriptive
//! error instead of reading out of bounds later.

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use crate::source::{LayerSource, NetSource, TensorSource};

/// A flat numeric buffer with a parallel gradient buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T: Numeric> {
    values: Vec<T>,
    diffs: Vec<T>,
}

impl<T: Numeric> Tensor<T> {
    /// Create a tensor from parallel value and gradient buffers
    ///
    /// Fails with a size-mismatch error if the buffers differ in length.
    pub fn new(values: Vec<T>, diffs: Vec<T>) -> Result<Self> {
        if values.len() != diffs.len() {
            return Err(Error::size_mismatch(
                values.len(),
                diffs.len(),
                "gradient buffer",
            ));
        }
        Ok(Self { values, diffs })
    }

    /// Create a tensor from values alone, with a zeroed gradient buffer
    pub fn from_values(values: Vec<T>) -> Self {
        let diffs = vec![T::zero(); values.len()];
        Self { values, diffs }
    }

    /// Create an all-zero tensor of the given element count
    pub fn zeroed(count: usize) -> Self {
        Self {
            values: vec![T::zero(); count],
            diffs: vec![T::zero(); count],
        }
    }

    /// Mutable access to the values, for collaborators that update in place
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Mutable access to the gradients
    pub fn diffs_mut(&mut self) -> &mut [T] {
        &mut self.diffs
    }
}

impl<T: Numeric> TensorSource<T> for Tensor<T> {
    fn count(&self) -> usize {
        self.values.len()
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn diffs(&self) -> &[T] {
        &self.diffs
    }
}

/// A named unit of computation owning zero or more parameter tensors
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<T: Numeric> {
    name: String,
    params: Vec<Tensor<T>>,
}

impl<T: Numeric> Layer<T> {
    /// Create a layer with its configuration name and parameter tensors
    pub fn new(name: impl Into<String>, params: Vec<Tensor<T>>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Create a layer with no parameters (e.g. an activation or pooling op)
    pub fn without_params(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Append a parameter tensor
    pub fn push_param(&mut self, tensor: Tensor<T>) {
        self.params.push(tensor);
    }
}

impl<T: Numeric> LayerSource<T> for Layer<T> {
    type Tensor = Tensor<T>;

    fn name(&self) -> &str {
        &self.name
    }

    fn params(&self) -> &[Tensor<T>] {
        &self.params
    }
}

/// An ordered collection of layers and named intermediate tensors
#[derive(Debug, Clone, Default)]
pub struct Net<T: Numeric> {
    layers: Vec<Layer<T>>,
    tensor_names: Vec<String>,
    tensors: Vec<Tensor<T>>,
}

impl<T: Numeric> Net<T> {
    /// Create an empty net
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            tensor_names: Vec::new(),
            tensors: Vec::new(),
        }
    }

    /// Append a layer in evaluation order
    pub fn push_layer(&mut self, layer: Layer<T>) {
        self.layers.push(layer);
    }

    /// Track an intermediate tensor under a unique name
    ///
    /// Fails if the name is already tracked; the source contract promises
    /// name uniqueness to consumers.
    pub fn track_tensor(&mut self, name: impl Into<String>, tensor: Tensor<T>) -> Result<()> {
        let name = name.into();
        if self.tensor_names.iter().any(|n| *n == name) {
            return Err(Error::InvalidInput(format!(
                "tensor name already tracked: {name}"
            )));
        }
        self.tensor_names.push(name);
        self.tensors.push(tensor);
        Ok(())
    }

    /// Mutable access to a tracked tensor by name
    pub fn tensor_mut(&mut self, name: &str) -> Option<&mut Tensor<T>> {
        let idx = self.tensor_names.iter().position(|n| n == name)?;
        Some(&mut self.tensors[idx])
    }

    /// Mutable access to a layer by index
    pub fn layer_mut(&mut self, idx: usize) -> Option<&mut Layer<T>> {
        self.layers.get_mut(idx)
    }
}

impl<T: Numeric> NetSource<T> for Net<T> {
    type Layer = Layer<T>;
    type Tensor = Tensor<T>;

    fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    fn tensor_names(&self) -> &[String] {
        &self.tensor_names
    }

    fn tensors(&self) -> &[Tensor<T>] {
        &self.tensors
    }
}
