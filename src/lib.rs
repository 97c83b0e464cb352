//! Diagnostic statistics over the numeric state of a computational graph
//!
//! `net-info` answers two questions about a network under training: "what is
//! the magnitude of this parameter and its gradient?" and "what is the value
//! range of this intermediate activation?". It is a thin re-export of the
//! workspace crates:
//!
//! - [`netinfo_core`] — numeric traits, reduction kernels, the graph source
//!   traits, and the output sink abstraction
//! - [`netinfo_report`] — the `weight` and `blob` reporters and the
//!   string-keyed factory
//!
//! # Example
//!
//! ```rust
//! use net_info::{BufferSink, Layer, Net, Reporter, Tensor};
//!
//! let mut net: Net<f32> = Net::new();
//! net.push_layer(Layer::new(
//!     "conv1",
//!     vec![Tensor::new(vec![1.0, -2.0], vec![0.1, -0.1]).unwrap()],
//! ));
//!
//! let reporter = Reporter::from_kind("weight").unwrap();
//! let mut sink = BufferSink::new();
//! reporter.print(&net, &mut sink);
//! assert_eq!(sink.lines().len(), 1);
//! ```

pub use netinfo_core::{
    error::{Error, Result},
    kernels::{exact_extrema, mean_abs, zero_seeded_extrema},
    net::{Layer, Net, Tensor},
    numeric::Numeric,
    sink::{BufferSink, InfoSink, LogSink, WriteSink},
    source::{LayerSource, NetSource, TensorSource},
};

pub use netinfo_report::{get_info, BlobInfo, Reporter, WeightInfo};
