/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Array Traits
//!
//! Defines the capabilities shared by atomic arrays, independent of the
//! element width.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for fixed-length arrays of atomic cells.
///
/// Every method takes an element index. Indices must satisfy
/// `index < self.len()`; implementations panic otherwise.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicArray {
    /// The value type stored in each cell.
    type Value;

    /// Returns the number of cells.
    fn len(&self) -> usize;

    /// Returns `true` if the array has no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the value at `index`.
    ///
    /// Uses `Acquire` ordering.
    ///
    /// # Parameters
    ///
    /// * `index` - The element index.
    ///
    /// # Returns
    ///
    /// The current value.
    fn get(&self, index: usize) -> Self::Value;

    /// Gets the value at `index` without ordering guarantees.
    ///
    /// Uses `Relaxed` ordering. Only meaningful when the caller provides its
    /// own synchronization.
    ///
    /// # Parameters
    ///
    /// * `index` - The element index.
    ///
    /// # Returns
    ///
    /// The current, possibly stale, value.
    fn get_plain(&self, index: usize) -> Self::Value;

    /// Sets the value at `index`.
    ///
    /// Uses `Release` ordering.
    ///
    /// # Parameters
    ///
    /// * `index` - The element index.
    /// * `value` - The new value.
    fn set(&self, index: usize, value: Self::Value);

    /// Sets the value at `index` without ordering guarantees.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Parameters
    ///
    /// * `index` - The element index.
    /// * `value` - The new value.
    fn set_plain(&self, index: usize, value: Self::Value);

    /// Eventually sets the value at `index`.
    ///
    /// Ordered after the calling thread's prior writes. Uses `Release`
    /// ordering.
    ///
    /// # Parameters
    ///
    /// * `index` - The element index.
    /// * `value` - The new value.
    fn lazy_set(&self, index: usize, value: Self::Value);

    /// Swaps the value at `index`, returning the old value.
    ///
    /// Uses `AcqRel` ordering.
    ///
    /// # Parameters
    ///
    /// * `index` - The element index.
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The old value.
    fn get_and_set(&self, index: usize, value: Self::Value) -> Self::Value;

    /// Sets the value at `index` to `updated` if it currently equals
    /// `expected`.
    ///
    /// Uses `AcqRel` ordering on success and `Acquire` ordering on failure.
    ///
    /// # Parameters
    ///
    /// * `index` - The element index.
    /// * `expected` - The expected current value.
    /// * `updated` - The value to store if the comparison succeeds.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    fn compare_and_swap(&self, index: usize, expected: Self::Value, updated: Self::Value) -> bool;
}

/// Trait for atomic arrays of integers.
///
/// Provides per-element arithmetic. All operations use `AcqRel` ordering
/// and wrap on overflow.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicIntegerArray: AtomicArray {
    /// Adds `delta` to the value at `index`, returning the new value.
    fn add(&self, index: usize, delta: Self::Value) -> Self::Value;

    /// Adds `delta` to the value at `index`, returning the old value.
    fn get_and_add(&self, index: usize, delta: Self::Value) -> Self::Value;

    /// Increments the value at `index` by 1, returning the new value.
    fn increment(&self, index: usize) -> Self::Value;

    /// Increments the value at `index` by `delta`, returning the new value.
    fn increment_by(&self, index: usize, delta: Self::Value) -> Self::Value;

    /// Decrements the value at `index` by 1, returning the new value.
    fn decrement(&self, index: usize) -> Self::Value;

    /// Decrements the value at `index` by `delta`, returning the new value.
    fn decrement_by(&self, index: usize, delta: Self::Value) -> Self::Value;

    /// Increments the value at `index` by 1, returning the old value.
    fn get_and_increment(&self, index: usize) -> Self::Value;

    /// Increments the value at `index` by `delta`, returning the old value.
    fn get_and_increment_by(&self, index: usize, delta: Self::Value) -> Self::Value;

    /// Decrements the value at `index` by 1, returning the old value.
    fn get_and_decrement(&self, index: usize) -> Self::Value;

    /// Decrements the value at `index` by `delta`, returning the old value.
    fn get_and_decrement_by(&self, index: usize, delta: Self::Value) -> Self::Value;

    /// Resets the value at `index` to zero, returning the old value.
    fn get_and_reset(&self, index: usize) -> Self::Value;
}
