//! Python bindings for strproc.
//!
//! This crate provides the `strproc` extension module using PyO3.

use pyo3::prelude::*;

/// Library version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Processes a string and returns a new string with identical contents.
///
/// The result is always an independent copy; mutating state on the Python
/// side never affects later calls. If the native copy cannot be allocated,
/// an empty string is returned instead of raising.
#[pyfunction]
#[pyo3(signature = (input))]
fn process_string(input: &str) -> String {
    strproc_core::try_duplicate_str(input).unwrap_or_default()
}

/// Returns the strproc library version.
#[pyfunction]
fn version() -> &'static str {
    VERSION
}

/// Python module initialization.
#[pymodule]
fn strproc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(process_string, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    Ok(())
}
