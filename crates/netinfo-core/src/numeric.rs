//! Generic numeric trait for tensor element types
//!
//! The reporters are generic over the element type of the tensors they scan.
//! `Numeric` collects exactly the capabilities the reduction kernels and the
//! line formatter need: ordering, a zero, in-type accumulation and division,
//! and scientific-notation rendering. Sums are carried in the element type
//! itself, so an `f32` network is reduced in `f32` just as the engine
//! computes in `f32`.

use num_traits::{NumCast, ToPrimitive, Zero};
use std::fmt::{Debug, LowerExp};
use std::ops::{Add, AddAssign, Div, Neg};

/// Element types that tensors can hold
pub trait Numeric:
    Copy
    + PartialOrd
    + Zero
    + Add<Output = Self>
    + AddAssign
    + Div<Output = Self>
    + Neg<Output = Self>
    + NumCast
    + ToPrimitive
    + LowerExp
    + Debug
    + Send
    + Sync
    + 'static
{
    /// Convert an element count into the element type, for mean division
    fn from_count(n: usize) -> Self;

    /// Check if the value is finite
    fn is_finite(&self) -> bool;

    /// Convert to f64 (for assertions and cross-type comparisons)
    fn to_f64(&self) -> f64;
}

impl Numeric for f64 {
    fn from_count(n: usize) -> Self {
        n as f64
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    fn from_count(n: usize) -> Self {
        n as f32
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}
