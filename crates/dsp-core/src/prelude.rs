//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use dsp_core::prelude::*;
//!
//! let a: Vec<f32> = range(1, 4);
//! assert_eq!(derivative(&a), vec![1.0, 1.0, 1.0]);
//! ```

// Core types
pub use crate::filters::{FilterConfig, FilterKind};
pub use crate::num::Real;
pub use crate::reductions::Extrema;

// Error types
pub use crate::error::{DspError, Result};

// Operations
pub use crate::arithmetic::{add, sub};
pub use crate::containers::{copy, every_nth, range, repeat, reverse};
pub use crate::differencing::{derivative, nth_derivative};
pub use crate::elementwise::{abs, abs_value, add_offset, negative, scale};
pub use crate::filters::{average_filter, median_filter};
pub use crate::reductions::{
    average, extrema, max_index, max_value, min_max, min_index, min_value,
};
