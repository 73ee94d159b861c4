//! # strproc FFI
//!
//! Stable C ABI for strproc bindings (ctypes, dlopen-style hosts).
//!
//! This crate provides:
//! - C-compatible function exports
//! - Memory ownership conventions (one release per produced string)
//! - A thread-local last-error channel
//!
//! The duplication entry point returns null both for null input and for
//! allocation failure; callers that need to tell the two apart can query
//! [`strproc_last_error`](error::strproc_last_error) on the same thread.

#![warn(missing_docs)]

pub mod error;
pub mod string;

pub use error::{strproc_clear_error, strproc_last_error};
pub use string::{strproc_free_string, strproc_process_string};
