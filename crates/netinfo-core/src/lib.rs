//! Foundation crate for net-info diagnostic reporting
//!
//! This crate provides everything a reporter needs except the reporters
//! themselves:
//!
//! - [`numeric::Numeric`] — the element-type abstraction (`f32`, `f64`)
//! - [`kernels`] — streaming reductions over flat tensor storage
//! - [`source`] — the narrow read-view traits a graph owner implements
//! - [`net`] — concrete in-memory `Tensor`/`Layer`/`Net` collaborators
//! - [`sink`] — the injected output capability reporters write lines to
//! - [`error`] — the unified error type
//!
//! # Design Philosophy
//!
//! - **Read views only**: nothing here owns graph state for longer than a
//!   single call; reporters scan borrowed slices and keep no state between
//!   invocations.
//! - **Accumulate in the element type**: sums and extrema are carried in the
//!   tensor's own precision, matching the engine's numerics.
//! - **Injected sink**: output goes through a capability passed by the
//!   caller, never a process-global stream, so tests can capture lines.
//!
//! # Example
//!
//! ```rust
//! use netinfo_core::kernels::{mean_abs, zero_seeded_extrema};
//!
//! let values = [1.0_f32, -2.0, 3.0, -4.0];
//! assert_eq!(mean_abs(&values), 2.5);
//!
//! let (max, min) = zero_seeded_extrema(&values);
//! assert_eq!((max, min), (3.0, -4.0));
//! ```

pub mod error;
pub mod kernels;
pub mod net;
pub mod numeric;
pub mod sink;
pub mod source;

// Re-export core types
pub use error::{Error, Result};
pub use kernels::{exact_extrema, mean_abs, zero_seeded_extrema};
pub use net::{Layer, Net, Tensor};
pub use numeric::Numeric;
pub use sink::{BufferSink, InfoSink, LogSink, WriteSink};
pub use source::{LayerSource, NetSource, TensorSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
