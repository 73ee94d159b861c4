//! Buffer duplication.
//!
//! A duplicate is a fresh allocation: the output never aliases the input,
//! and two duplications of the same input are independent of each other.

use crate::error::{CoreError, CoreResult};
use tracing::trace;

/// Duplicates a byte sequence into a newly allocated buffer.
///
/// The copy is byte-for-byte identical to the input. Allocation failure
/// aborts the process (standard `Vec` behavior); use [`try_duplicate`] to
/// observe it as an error instead.
#[must_use]
pub fn duplicate(input: &[u8]) -> Vec<u8> {
    trace!(len = input.len(), "duplicating buffer");
    input.to_vec()
}

/// Duplicates a byte sequence, surfacing allocation failure as an error.
///
/// Returns [`CoreError::AllocationFailed`] if the allocator cannot provide
/// the output buffer. No partial copy is ever produced.
pub fn try_duplicate(input: &[u8]) -> CoreResult<Vec<u8>> {
    let mut output = Vec::new();
    output
        .try_reserve_exact(input.len())
        .map_err(|source| CoreError::allocation_failed(input.len(), source))?;
    output.extend_from_slice(input);
    trace!(len = output.len(), "duplicated buffer");
    Ok(output)
}

/// Duplicates a string into a newly allocated `String`.
#[must_use]
pub fn duplicate_str(input: &str) -> String {
    trace!(len = input.len(), "duplicating string");
    input.to_owned()
}

/// Duplicates a string, surfacing allocation failure as an error.
pub fn try_duplicate_str(input: &str) -> CoreResult<String> {
    let mut output = String::new();
    output
        .try_reserve_exact(input.len())
        .map_err(|source| CoreError::allocation_failed(input.len(), source))?;
    output.push_str(input);
    trace!(len = output.len(), "duplicated string");
    Ok(output)
}
