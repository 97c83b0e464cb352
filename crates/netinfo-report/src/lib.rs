//! Weight and blob statistic reporters
//!
//! This crate provides the two diagnostic reporters over a network's numeric
//! state and the string-keyed factory that selects between them:
//!
//! - [`WeightInfo`] — per-layer, per-parameter mean |value| and mean
//!   |gradient|, for spotting vanishing or exploding parameters
//! - [`BlobInfo`] — per-named-tensor value and gradient ranges, for spotting
//!   saturating or diverging activations
//! - [`Reporter`] / [`get_info`] — selection by the config keys `"weight"`
//!   and `"blob"`
//!
//! Reporters are stateless: a print call makes a sizing pass for column
//! alignment, then a computation pass that emits one line per item into the
//! caller's sink. Calling `print` twice on an unchanged net produces
//! byte-identical output.
//!
//! # Example
//!
//! ```rust
//! use netinfo_core::{BufferSink, Layer, Net, Tensor};
//! use netinfo_report::Reporter;
//!
//! let mut net: Net<f32> = Net::new();
//! net.push_layer(Layer::new(
//!     "conv1",
//!     vec![Tensor::new(vec![1.0, -2.0, 3.0, -4.0], vec![0.1, -0.1, 0.2, -0.2]).unwrap()],
//! ));
//!
//! let mut sink = BufferSink::new();
//! Reporter::from_kind("weight").unwrap().print(&net, &mut sink);
//! assert_eq!(sink.lines(), &["conv1  blob0: 2.5e0 [1.5e-1]".to_string()]);
//! ```

pub mod blob;
pub mod factory;
pub mod weight;

// Re-exports
pub use blob::BlobInfo;
pub use factory::{get_info, Reporter};
pub use weight::WeightInfo;
