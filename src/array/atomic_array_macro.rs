/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Array Macro
//!
//! Provides a macro to generate atomic integer array types with consistent
//! implementations.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate atomic integer array types.
///
/// This macro generates a complete fixed-length atomic array type with all
/// per-element accessors, the [`AtomicArray`](crate::array::AtomicArray) and
/// [`AtomicIntegerArray`](crate::array::AtomicIntegerArray) trait
/// implementations, and the usual conversion traits.
///
/// # Parameters
///
/// * `$name` - The name of the array type (e.g., `AtomicIntArray`)
/// * `$inner_type` - The std atomic type of each cell (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The element description for documentation (e.g.,
///   "32-bit signed integers")
macro_rules! impl_atomic_integer_array {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Fixed-length array of atomic ", $doc_type, ".")]
        ///
        /// Every element is an independent atomic cell. The array is
        /// allocated once and never resized, so it can be shared across
        /// threads (e.g., behind an `Arc`) and mutated through `&self`
        /// without any lock.
        ///
        /// # Memory Ordering Strategy
        ///
        /// - **Ordered reads** (`get`): `Acquire`.
        /// - **Ordered writes** (`set`, `lazy_set`): `Release`.
        /// - **Plain accessors** (`get_plain`, `set_plain`): `Relaxed`.
        ///   These are only safe to rely on when the caller supplies its
        ///   own synchronization.
        /// - **Read-modify-write** (arithmetic, `get_and_set`,
        ///   `compare_and_swap`): `AcqRel`, with `Acquire` on a failed
        ///   compare.
        ///
        /// There is no ordering between operations on different indices
        /// beyond what these per-cell orderings imply.
        ///
        /// # Indexing
        ///
        /// Every accessor panics if `index >= len()`.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_atomic_array::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counters = Arc::new(", stringify!($name), "::new(4));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counters = counters.clone();
        ///     handles.push(thread::spawn(move || {
        ///         for _ in 0..100 {
        ///             counters.increment(2);
        ///         }
        ///     }));
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counters.get(2), 1000);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        pub struct $name {
            cells: Box<[$inner_type]>,
        }

        impl $name {
            /// Creates an array of `length` elements, all zero.
            ///
            /// # Parameters
            ///
            /// * `length` - The number of elements.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_array::", stringify!($name), ";")]
            ///
            #[doc = concat!("let array = ", stringify!($name), "::new(3);")]
            /// assert_eq!(array.len(), 3);
            /// assert_eq!(array.get(2), 0);
            /// ```
            pub fn new(length: usize) -> Self {
                Self::from_cells((0..length).map(|_| <$inner_type>::new(0)).collect())
            }

            /// Creates an array of `length` elements, all zero, validating
            /// the length first.
            ///
            /// # Parameters
            ///
            /// * `length` - The requested number of elements.
            ///
            /// # Returns
            ///
            /// The new array, or an error if:
            ///
            /// - `length` is negative
            ///   ([`AtomicArrayError::InvalidArgument`]);
            /// - storage for `length` elements cannot be reserved
            ///   ([`AtomicArrayError::AllocationFailed`]).
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_array::{", stringify!($name), ", AtomicArrayError};")]
            ///
            #[doc = concat!("assert!(", stringify!($name), "::try_new(8).is_ok());")]
            /// assert_eq!(
            #[doc = concat!("    ", stringify!($name), "::try_new(-1).unwrap_err(),")]
            ///     AtomicArrayError::InvalidArgument { length: -1 },
            /// );
            /// ```
            pub fn try_new(length: isize) -> Result<Self, AtomicArrayError> {
                let length = usize::try_from(length).map_err(|_| {
                    tracing::debug!(
                        array = stringify!($name),
                        length,
                        "rejected negative array length"
                    );
                    AtomicArrayError::InvalidArgument { length }
                })?;
                let mut cells = Vec::new();
                cells
                    .try_reserve_exact(length)
                    .map_err(|source| {
                        tracing::debug!(
                            array = stringify!($name),
                            length,
                            "failed to reserve array storage"
                        );
                        AtomicArrayError::AllocationFailed { length, source }
                    })?;
                cells.extend((0..length).map(|_| <$inner_type>::new(0)));
                Ok(Self::from_cells(cells))
            }

            /// Creates an array holding a copy of `values`.
            ///
            /// The array does not alias `values`; later changes to either
            /// side are not seen by the other.
            ///
            /// # Parameters
            ///
            /// * `values` - The initial element values, in order.
            pub fn from_slice(values: &[$value_type]) -> Self {
                values.iter().copied().collect()
            }

            fn from_cells(cells: Vec<$inner_type>) -> Self {
                let cells = cells.into_boxed_slice();
                tracing::trace!(
                    array = stringify!($name),
                    length = cells.len(),
                    footprint = Self::estimated_footprint(cells.len()),
                    "created atomic array"
                );
                Self { cells }
            }

            /// Estimates the memory footprint, in bytes, of an array with
            /// `length` elements.
            ///
            /// The estimate is the size of the owning handle plus
            /// `length` element slots. It is for diagnostics only.
            ///
            /// # Parameters
            ///
            /// * `length` - The number of elements.
            ///
            /// # Returns
            ///
            /// The estimated size in bytes, saturating at `usize::MAX`.
            #[inline]
            pub const fn estimated_footprint(length: usize) -> usize {
                std::mem::size_of::<Self>()
                    .saturating_add(length.saturating_mul(std::mem::size_of::<$value_type>()))
            }

            /// Estimates the memory footprint, in bytes, of this array.
            ///
            /// Same as `estimated_footprint(self.len())`.
            #[inline]
            pub fn footprint(&self) -> usize {
                Self::estimated_footprint(self.cells.len())
            }

            /// Returns the number of elements.
            #[inline]
            pub fn len(&self) -> usize {
                self.cells.len()
            }

            /// Returns `true` if the array has no elements.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.cells.is_empty()
            }

            #[inline]
            #[track_caller]
            fn cell(&self, index: usize) -> &$inner_type {
                match self.cells.get(index) {
                    Some(cell) => cell,
                    None => panic!(
                        "index out of bounds: the len is {} but the index is {}",
                        self.cells.len(),
                        index
                    ),
                }
            }

            /// Gets the value at `index`.
            ///
            /// # Memory Ordering
            ///
            /// Uses `Acquire` ordering: if another thread stored this value
            /// with `set`, `lazy_set` or any read-modify-write operation,
            /// everything that thread wrote before the store is visible
            /// after this call.
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn get(&self, index: usize) -> $value_type {
                self.cell(index).load(Ordering::Acquire)
            }

            /// Gets the value at `index` with `Relaxed` ordering.
            ///
            /// The read is still atomic (never torn), but it establishes no
            /// happens-before relationship and may return a stale value.
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn get_plain(&self, index: usize) -> $value_type {
                self.cell(index).load(Ordering::Relaxed)
            }

            /// Sets the value at `index`.
            ///
            /// # Memory Ordering
            ///
            /// Uses `Release` ordering: a thread that later reads this value
            /// with `get` also sees every write this thread made before the
            /// store.
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn set(&self, index: usize, value: $value_type) {
                self.cell(index).store(value, Ordering::Release);
            }

            /// Sets the value at `index` with `Relaxed` ordering.
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn set_plain(&self, index: usize, value: $value_type) {
                self.cell(index).store(value, Ordering::Relaxed);
            }

            /// Eventually sets the value at `index`.
            ///
            /// The store is ordered after this thread's earlier writes.
            /// Rust has no ordering between `Relaxed` and `Release` for
            /// stores, so this is a `Release` store, identical to `set`.
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn lazy_set(&self, index: usize, value: $value_type) {
                self.cell(index).store(value, Ordering::Release);
            }

            /// Adds `delta` to the value at `index`, returning the old
            /// value.
            ///
            /// Uses `AcqRel` ordering. Wraps on overflow.
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn get_and_add(&self, index: usize, delta: $value_type) -> $value_type {
                self.cell(index).fetch_add(delta, Ordering::AcqRel)
            }

            /// Adds `delta` to the value at `index`, returning the new
            /// value.
            ///
            /// `delta` may be negative. Uses `AcqRel` ordering. Wraps on
            /// overflow.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_array::", stringify!($name), ";")]
            ///
            #[doc = concat!("let array = ", stringify!($name), "::from_slice(&[10]);")]
            /// assert_eq!(array.add(0, -5), 5);
            /// ```
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn add(&self, index: usize, delta: $value_type) -> $value_type {
                // Derived from the single fetch result; never re-read.
                self.get_and_add(index, delta).wrapping_add(delta)
            }

            /// Increments the value at `index` by 1, returning the new
            /// value.
            #[inline]
            #[track_caller]
            pub fn increment(&self, index: usize) -> $value_type {
                self.add(index, 1)
            }

            /// Increments the value at `index` by `delta`, returning the
            /// new value.
            #[inline]
            #[track_caller]
            pub fn increment_by(&self, index: usize, delta: $value_type) -> $value_type {
                self.add(index, delta)
            }

            /// Decrements the value at `index` by 1, returning the new
            /// value.
            #[inline]
            #[track_caller]
            pub fn decrement(&self, index: usize) -> $value_type {
                self.decrement_by(index, 1)
            }

            /// Decrements the value at `index` by `delta`, returning the
            /// new value.
            ///
            /// Equivalent to `add(index, -delta)`, but also correct for
            #[doc = concat!("`delta == ", stringify!($value_type), "::MIN`.")]
            #[inline]
            #[track_caller]
            pub fn decrement_by(&self, index: usize, delta: $value_type) -> $value_type {
                self.get_and_decrement_by(index, delta).wrapping_sub(delta)
            }

            /// Increments the value at `index` by 1, returning the old
            /// value.
            #[inline]
            #[track_caller]
            pub fn get_and_increment(&self, index: usize) -> $value_type {
                self.get_and_add(index, 1)
            }

            /// Increments the value at `index` by `delta`, returning the
            /// old value.
            #[inline]
            #[track_caller]
            pub fn get_and_increment_by(&self, index: usize, delta: $value_type) -> $value_type {
                self.get_and_add(index, delta)
            }

            /// Decrements the value at `index` by 1, returning the old
            /// value.
            #[inline]
            #[track_caller]
            pub fn get_and_decrement(&self, index: usize) -> $value_type {
                self.get_and_decrement_by(index, 1)
            }

            /// Decrements the value at `index` by `delta`, returning the
            /// old value.
            #[inline]
            #[track_caller]
            pub fn get_and_decrement_by(&self, index: usize, delta: $value_type) -> $value_type {
                self.cell(index).fetch_sub(delta, Ordering::AcqRel)
            }

            /// Replaces the value at `index`, returning the old value.
            ///
            /// # Memory Ordering
            ///
            /// Uses `AcqRel` ordering, so the exchange both observes the
            /// writer of the old value and publishes this thread's prior
            /// writes.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_array::", stringify!($name), ";")]
            ///
            #[doc = concat!("let array = ", stringify!($name), "::from_slice(&[10, 20]);")]
            /// assert_eq!(array.get_and_set(1, 30), 20);
            /// assert_eq!(array.get(1), 30);
            /// ```
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn get_and_set(&self, index: usize, value: $value_type) -> $value_type {
                self.cell(index).swap(value, Ordering::AcqRel)
            }

            /// Resets the value at `index` to zero, returning the old
            /// value.
            #[inline]
            #[track_caller]
            pub fn get_and_reset(&self, index: usize) -> $value_type {
                self.get_and_set(index, 0)
            }

            /// Sets the value at `index` to `updated` if it currently
            /// equals `expected`.
            ///
            /// This is the only conditional primitive; retry loops are
            /// built from `get` and `compare_and_swap`.
            ///
            /// # Memory Ordering
            ///
            /// - **Success**: `AcqRel`.
            /// - **Failure**: `Acquire`.
            ///
            /// # Parameters
            ///
            /// * `index` - The element index.
            /// * `expected` - The expected current value.
            /// * `updated` - The value to store if the comparison succeeds.
            ///
            /// # Returns
            ///
            /// `true` if the value was replaced, `false` if it was left
            /// unchanged.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_array::", stringify!($name), ";")]
            ///
            #[doc = concat!("let array = ", stringify!($name), "::new(1);")]
            /// let mut current = array.get(0);
            /// while !array.compare_and_swap(0, current, current + 7) {
            ///     current = array.get(0);
            /// }
            /// assert_eq!(array.get(0), 7);
            /// ```
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            #[inline]
            #[track_caller]
            pub fn compare_and_swap(
                &self,
                index: usize,
                expected: $value_type,
                updated: $value_type,
            ) -> bool {
                self.cell(index)
                    .compare_exchange(expected, updated, Ordering::AcqRel, Ordering::Acquire)
                    .is_ok()
            }

            /// Copies the current values into a vector.
            ///
            /// Each element is read with `Acquire` ordering. The result is
            /// not an atomic snapshot of the whole array: concurrent writers
            /// may be observed for some indices and not for others.
            pub fn to_vec(&self) -> Vec<$value_type> {
                self.cells
                    .iter()
                    .map(|cell| cell.load(Ordering::Acquire))
                    .collect()
            }

            /// Consumes the array, returning its values.
            pub fn into_vec(self) -> Vec<$value_type> {
                self.cells
                    .into_vec()
                    .into_iter()
                    .map(<$inner_type>::into_inner)
                    .collect()
            }

            /// Gets a reference to the underlying standard library atomic
            /// cells.
            ///
            /// Allows memory orderings other than the defaults chosen by
            /// this type.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atomic_array::", stringify!($name), ";")]
            /// use std::sync::atomic::Ordering;
            ///
            #[doc = concat!("let array = ", stringify!($name), "::new(2);")]
            /// array.inner()[1].store(42, Ordering::SeqCst);
            /// assert_eq!(array.get(1), 42);
            /// ```
            #[inline]
            pub fn inner(&self) -> &[$inner_type] {
                &self.cells
            }
        }

        // Trait implementations forward to the inherent methods so that both
        // `array.get(i)` and generic `fn f<A: AtomicArray>(a: &A)` work.

        impl crate::array::traits::AtomicArray for $name {
            type Value = $value_type;

            #[inline]
            fn len(&self) -> usize {
                self.len()
            }

            #[inline]
            fn is_empty(&self) -> bool {
                self.is_empty()
            }

            #[inline]
            fn get(&self, index: usize) -> $value_type {
                self.get(index)
            }

            #[inline]
            fn get_plain(&self, index: usize) -> $value_type {
                self.get_plain(index)
            }

            #[inline]
            fn set(&self, index: usize, value: $value_type) {
                self.set(index, value);
            }

            #[inline]
            fn set_plain(&self, index: usize, value: $value_type) {
                self.set_plain(index, value);
            }

            #[inline]
            fn lazy_set(&self, index: usize, value: $value_type) {
                self.lazy_set(index, value);
            }

            #[inline]
            fn get_and_set(&self, index: usize, value: $value_type) -> $value_type {
                self.get_and_set(index, value)
            }

            #[inline]
            fn compare_and_swap(
                &self,
                index: usize,
                expected: $value_type,
                updated: $value_type,
            ) -> bool {
                self.compare_and_swap(index, expected, updated)
            }
        }

        impl crate::array::traits::AtomicIntegerArray for $name {
            #[inline]
            fn add(&self, index: usize, delta: $value_type) -> $value_type {
                self.add(index, delta)
            }

            #[inline]
            fn get_and_add(&self, index: usize, delta: $value_type) -> $value_type {
                self.get_and_add(index, delta)
            }

            #[inline]
            fn increment(&self, index: usize) -> $value_type {
                self.increment(index)
            }

            #[inline]
            fn increment_by(&self, index: usize, delta: $value_type) -> $value_type {
                self.increment_by(index, delta)
            }

            #[inline]
            fn decrement(&self, index: usize) -> $value_type {
                self.decrement(index)
            }

            #[inline]
            fn decrement_by(&self, index: usize, delta: $value_type) -> $value_type {
                self.decrement_by(index, delta)
            }

            #[inline]
            fn get_and_increment(&self, index: usize) -> $value_type {
                self.get_and_increment(index)
            }

            #[inline]
            fn get_and_increment_by(&self, index: usize, delta: $value_type) -> $value_type {
                self.get_and_increment_by(index, delta)
            }

            #[inline]
            fn get_and_decrement(&self, index: usize) -> $value_type {
                self.get_and_decrement(index)
            }

            #[inline]
            fn get_and_decrement_by(&self, index: usize, delta: $value_type) -> $value_type {
                self.get_and_decrement_by(index, delta)
            }

            #[inline]
            fn get_and_reset(&self, index: usize) -> $value_type {
                self.get_and_reset(index)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                self.to_vec().into()
            }
        }

        impl From<Vec<$value_type>> for $name {
            fn from(values: Vec<$value_type>) -> Self {
                values.into_iter().collect()
            }
        }

        impl From<&[$value_type]> for $name {
            #[inline]
            fn from(values: &[$value_type]) -> Self {
                Self::from_slice(values)
            }
        }

        impl FromIterator<$value_type> for $name {
            fn from_iter<I: IntoIterator<Item = $value_type>>(iter: I) -> Self {
                Self::from_cells(iter.into_iter().map(<$inner_type>::new).collect())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("values", &self.to_vec())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self.to_vec())
            }
        }
    };
}

pub(crate) use impl_atomic_integer_array;
