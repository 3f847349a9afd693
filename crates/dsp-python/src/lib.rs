//! # dsp-python
//!
//! Python bindings for dsp-core.
//!
//! Exposes the double-precision instantiation of every sequence operation as
//! a PyO3 extension module named `rust_dsp`. Sequences cross the boundary as
//! Python lists of floats.

#![warn(missing_docs)]
#![deny(unsafe_code)]

use dsp_core::{arithmetic, containers, differencing, elementwise, filters, reductions};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Return a copy of `a`.
#[pyfunction]
#[pyo3(name = "copy")]
fn py_copy(a: Vec<f64>) -> Vec<f64> {
    containers::copy(&a)
}

/// Return a list of `n` copies of `x`, empty if `n <= 0`.
#[pyfunction]
#[pyo3(name = "repeat")]
fn py_repeat(x: f64, n: isize) -> Vec<f64> {
    containers::repeat(x, n)
}

/// Return `x` in reverse order.
#[pyfunction]
#[pyo3(name = "reverse")]
fn py_reverse(x: Vec<f64>) -> Vec<f64> {
    containers::reverse(&x)
}

/// Return the integers from `a` to `b` inclusive, counting in either direction.
#[pyfunction]
#[pyo3(name = "range")]
fn py_range(a: i64, b: i64) -> Vec<f64> {
    containers::range(a, b)
}

/// Return every `n`th element of `a`, starting with the first.
#[pyfunction]
#[pyo3(name = "every_nth")]
fn py_every_nth(a: Vec<f64>, n: isize) -> Vec<f64> {
    containers::every_nth(&a, n)
}

/// Return `(min_index, min_value, max_index, max_value)`.
///
/// An empty list gives `(-1, inf, -1, -inf)`.
#[pyfunction]
#[pyo3(name = "min_max")]
fn py_min_max(a: Vec<f64>) -> (isize, f64, isize, f64) {
    reductions::min_max(&a)
}

/// Index of the first minimum, or -1 for an empty list.
#[pyfunction]
#[pyo3(name = "min_index")]
fn py_min_index(a: Vec<f64>) -> isize {
    reductions::min_index(&a)
}

/// Minimum value, or inf for an empty list.
#[pyfunction]
#[pyo3(name = "min_value")]
fn py_min_value(a: Vec<f64>) -> f64 {
    reductions::min_value(&a)
}

/// Index of the first maximum, or -1 for an empty list.
#[pyfunction]
#[pyo3(name = "max_index")]
fn py_max_index(a: Vec<f64>) -> isize {
    reductions::max_index(&a)
}

/// Maximum value, or -inf for an empty list.
#[pyfunction]
#[pyo3(name = "max_value")]
fn py_max_value(a: Vec<f64>) -> f64 {
    reductions::max_value(&a)
}

/// Return `(min_index, min_value, max_index, max_value)`.
///
/// Raises `ValueError` for an empty list.
#[pyfunction]
#[pyo3(name = "extrema")]
fn py_extrema(a: Vec<f64>) -> PyResult<(usize, f64, usize, f64)> {
    let e = reductions::extrema(&a).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((e.min_index, e.min_value, e.max_index, e.max_value))
}

/// Arithmetic mean, or 0 for an empty list.
#[pyfunction]
#[pyo3(name = "average")]
fn py_average(a: Vec<f64>) -> f64 {
    reductions::average(&a)
}

/// Negate every element.
#[pyfunction]
#[pyo3(name = "negative")]
fn py_negative(a: Vec<f64>) -> Vec<f64> {
    elementwise::negative(&a)
}

/// Absolute value of every element.
#[pyfunction]
#[pyo3(name = "abs")]
fn py_abs(a: Vec<f64>) -> Vec<f64> {
    elementwise::abs(&a)
}

/// Absolute value of a scalar.
#[pyfunction]
#[pyo3(name = "abs_value")]
fn py_abs_value(x: f64) -> f64 {
    elementwise::abs_value(x)
}

/// Add `offset` to every element.
#[pyfunction]
#[pyo3(name = "add_offset")]
fn py_add_offset(a: Vec<f64>, offset: f64) -> Vec<f64> {
    elementwise::add_offset(&a, offset)
}

/// Multiply every element by `factor`.
#[pyfunction]
#[pyo3(name = "scale")]
fn py_scale(a: Vec<f64>, factor: f64) -> Vec<f64> {
    elementwise::scale(&a, factor)
}

/// Moving average over windows of `width` elements.
#[pyfunction]
#[pyo3(name = "average_filter")]
fn py_average_filter(a: Vec<f64>, width: isize) -> Vec<f64> {
    filters::average_filter(&a, width)
}

/// Moving median over windows of `width` elements.
#[pyfunction]
#[pyo3(name = "median_filter")]
fn py_median_filter(a: Vec<f64>, width: isize) -> Vec<f64> {
    filters::median_filter(&a, width)
}

/// First differences.
#[pyfunction]
#[pyo3(name = "derivative")]
fn py_derivative(a: Vec<f64>) -> Vec<f64> {
    differencing::derivative(&a)
}

/// Apply `derivative` `n` times; a copy for `n <= 0`.
#[pyfunction]
#[pyo3(name = "nth_derivative")]
fn py_nth_derivative(a: Vec<f64>, n: isize) -> Vec<f64> {
    differencing::nth_derivative(&a, n)
}

/// Element-wise sum of a list of sequences, truncated to the shortest.
#[pyfunction]
#[pyo3(name = "add")]
fn py_add(sequences: Vec<Vec<f64>>) -> Vec<f64> {
    arithmetic::add(&sequences)
}

/// Subtract every later sequence from the first, truncated to the shortest.
#[pyfunction]
#[pyo3(name = "sub")]
fn py_sub(sequences: Vec<Vec<f64>>) -> Vec<f64> {
    arithmetic::sub(&sequences)
}

/// Python module for rust-dsp.
#[pymodule]
fn rust_dsp(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(py_copy, m)?)?;
    m.add_function(wrap_pyfunction!(py_repeat, m)?)?;
    m.add_function(wrap_pyfunction!(py_reverse, m)?)?;
    m.add_function(wrap_pyfunction!(py_range, m)?)?;
    m.add_function(wrap_pyfunction!(py_every_nth, m)?)?;

    m.add_function(wrap_pyfunction!(py_min_max, m)?)?;
    m.add_function(wrap_pyfunction!(py_min_index, m)?)?;
    m.add_function(wrap_pyfunction!(py_min_value, m)?)?;
    m.add_function(wrap_pyfunction!(py_max_index, m)?)?;
    m.add_function(wrap_pyfunction!(py_max_value, m)?)?;
    m.add_function(wrap_pyfunction!(py_extrema, m)?)?;
    m.add_function(wrap_pyfunction!(py_average, m)?)?;

    m.add_function(wrap_pyfunction!(py_negative, m)?)?;
    m.add_function(wrap_pyfunction!(py_abs, m)?)?;
    m.add_function(wrap_pyfunction!(py_abs_value, m)?)?;
    m.add_function(wrap_pyfunction!(py_add_offset, m)?)?;
    m.add_function(wrap_pyfunction!(py_scale, m)?)?;

    m.add_function(wrap_pyfunction!(py_average_filter, m)?)?;
    m.add_function(wrap_pyfunction!(py_median_filter, m)?)?;

    m.add_function(wrap_pyfunction!(py_derivative, m)?)?;
    m.add_function(wrap_pyfunction!(py_nth_derivative, m)?)?;

    m.add_function(wrap_pyfunction!(py_add, m)?)?;
    m.add_function(wrap_pyfunction!(py_sub, m)?)?;

    Ok(())
}
