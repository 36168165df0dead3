/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-array
//!
//! Fixed-length arrays of atomic integers with a JDK-like per-element API.
//!
//! This crate provides arrays whose elements can each be read, written and
//! updated atomically from any number of threads, similar to Java's
//! `AtomicIntegerArray` and `AtomicLongArray`.
//!
//! ## Design Goals
//!
//! - **Explicit Ordering**: Ordered accessors use `Acquire`/`Release`,
//!   plain accessors use `Relaxed`, read-modify-write uses `AcqRel`
//! - **Fail Fast**: Out-of-range indices panic instead of touching other
//!   memory
//! - **Fixed Storage**: Allocated once at construction, never resized
//! - **Flexibility**: Exposes the underlying cells via `inner()`
//!
//! ## Features
//!
//! - Integer array types: `AtomicIntArray` (`i32`), `AtomicLongArray`
//!   (`i64`)
//! - Capability traits: `AtomicArray`, `AtomicIntegerArray`
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_array::AtomicIntArray;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let array = AtomicIntArray::new(3);
//! array.set(1, 42);
//! assert_eq!(array.get_and_add(1, 8), 42);
//! assert!(array.compare_and_swap(1, 50, 100));
//! assert!(!array.compare_and_swap(1, 50, 200));
//! assert_eq!(array.get(1), 100);
//!
//! // Concurrent usage
//! let hits = Arc::new(AtomicIntArray::new(8));
//! let mut handles = vec![];
//!
//! for t in 0..8 {
//!     let hits = hits.clone();
//!     handles.push(thread::spawn(move || {
//!         for _ in 0..100 {
//!             hits.increment(t);
//!             hits.increment(0);
//!         }
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(hits.get(0), 900);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod array;

pub use array::{
    AtomicArray,
    AtomicArrayError,
    AtomicIntArray,
    AtomicIntegerArray,
    AtomicLongArray,
};
