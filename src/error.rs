//! Error type for heap operations

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for heap operations
///
/// Both variants are structural conditions rather than transient faults:
/// nothing inside the heap retries, the error is simply handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Backing storage could not be obtained or grown
    ///
    /// `requested` is the total number of records the heap tried to hold.
    #[error("failed to allocate storage for {requested} heap records")]
    Allocation { requested: usize },
    /// Extraction was attempted on a heap holding no records
    #[error("cannot pop from an empty heap")]
    Empty,
}

impl HeapError {
    pub(crate) fn allocation(requested: usize) -> impl FnOnce(TryReserveError) -> Self {
        move |_| HeapError::Allocation { requested }
    }
}
