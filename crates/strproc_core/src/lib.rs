//! # strproc Core
//!
//! Byte-for-byte string duplication for strproc.
//!
//! The core operation takes an input byte sequence and produces a newly
//! allocated, independently owned copy with identical contents. Ownership of
//! the copy follows Rust's normal value semantics; the explicit
//! allocate/release pair of the C ABI exists only in `strproc_ffi`.
//!
//! ## Usage
//!
//! ```
//! use strproc_core::duplicate;
//!
//! let copy = duplicate(b"hello");
//! assert_eq!(copy, b"hello");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod dup;
mod error;

pub use dup::{duplicate, duplicate_str, try_duplicate, try_duplicate_str};
pub use error::{CoreError, CoreResult};
