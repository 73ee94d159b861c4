//! Error types for strproc core.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when duplicating a buffer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The allocator could not provide the output buffer.
    #[error("allocation of {requested} bytes failed")]
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
        /// Underlying allocator error.
        #[source]
        source: TryReserveError,
    },
}

impl CoreError {
    /// Creates an allocation failed error.
    pub fn allocation_failed(requested: usize, source: TryReserveError) -> Self {
        Self::AllocationFailed { requested, source }
    }
}
