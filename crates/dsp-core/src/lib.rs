//! # dsp-core
//!
//! One-dimensional signal-processing and statistics primitives over
//! floating-point sequences.
//!
//! Every operation is a pure function, generic over the element type
//! [`Real`] (implemented for `f32` and `f64`), that returns a freshly
//! allocated `Vec`. Operations are total: empty inputs and degenerate
//! parameters produce documented sentinel results instead of errors.
//!
//! - [`containers`] - copy, repeat, reverse, integer ranges, decimation
//! - [`reductions`] - extremum search and the arithmetic mean
//! - [`elementwise`] - negation, absolute value, offset, scaling
//! - [`filters`] - moving average and moving median
//! - [`differencing`] - first and repeated finite differences
//! - [`arithmetic`] - element-wise sum and difference of many sequences
//!
//! ## Feature Flags
//!
//! - `std` (default) - Enable standard library support
//! - `alloc` - Enable heap allocation without full std
//! - `libm` - Float math for `no_std` builds
//! - `serde` - Enable serialization of [`Extrema`] and [`FilterConfig`]
//!
//! ## Example
//!
//! ```rust
//! use dsp_core::prelude::*;
//!
//! let signal: Vec<f64> = vec![2.0, 1.0, 30.0, 50.0, 44.0];
//!
//! let smoothed = median_filter(&signal, 3);
//! assert_eq!(smoothed, vec![2.0, 30.0, 44.0]);
//!
//! let (min_i, min_v, max_i, max_v) = min_max(&signal);
//! assert_eq!((min_i, min_v, max_i, max_v), (1, 1.0, 3, 50.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod arithmetic;
pub mod containers;
pub mod differencing;
pub mod elementwise;
pub mod error;
pub mod filters;
pub mod num;
pub mod prelude;
pub mod reductions;

mod ordering;

// Re-export core types at crate root
pub use error::{DspError, Result};
pub use filters::{FilterConfig, FilterKind};
pub use num::Real;
pub use reductions::Extrema;
