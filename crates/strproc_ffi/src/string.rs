//! String duplication entry points.
//!
//! Ownership convention: every non-null pointer returned by
//! [`strproc_process_string`] is owned by the caller and must be released
//! exactly once with [`strproc_free_string`]. The pointers never alias the
//! input.

use crate::error::{clear_last_error, set_last_error};
use std::ffi::{c_char, CStr, CString};

/// Duplicates a null-terminated string into a newly allocated copy.
///
/// Returns null if `input` is null or if allocation fails; the two cases
/// are indistinguishable at the return value. On allocation failure the
/// last-error channel is populated.
///
/// # Safety
///
/// `input` must be null or point to a valid null-terminated string that
/// outlives the call.
#[no_mangle]
pub unsafe extern "C" fn strproc_process_string(input: *const c_char) -> *mut c_char {
    clear_last_error();

    if input.is_null() {
        return std::ptr::null_mut();
    }

    let bytes = CStr::from_ptr(input).to_bytes();
    let copy = match strproc_core::try_duplicate(bytes) {
        Ok(copy) => copy,
        Err(e) => {
            set_last_error(e.to_string());
            return std::ptr::null_mut();
        }
    };

    // The bytes came from a CStr, so they contain no interior NUL.
    match CString::new(copy) {
        Ok(cstring) => cstring.into_raw(),
        Err(e) => {
            set_last_error(e.to_string());
            std::ptr::null_mut()
        }
    }
}

/// Frees a string allocated by [`strproc_process_string`].
///
/// Passing null is a no-op.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by
/// `strproc_process_string` that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn strproc_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
