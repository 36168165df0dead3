/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Array Errors
//!
//! Errors reported when constructing an atomic array.
//!
//! # Author
//!
//! Haixing Hu

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while constructing an atomic array.
///
/// Only construction is fallible. Element accessors never return an error;
/// an out-of-range index panics instead.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtomicArrayError {
    /// The requested length was negative.
    #[error("invalid argument: array length must be non-negative, got {length}")]
    InvalidArgument {
        /// The rejected length.
        length: isize,
    },

    /// Backing storage for the requested number of cells could not be
    /// reserved.
    #[error("failed to allocate storage for {length} elements")]
    AllocationFailed {
        /// The requested length.
        length: usize,
        /// The allocator's reason.
        #[source]
        source: TryReserveError,
    },
}
