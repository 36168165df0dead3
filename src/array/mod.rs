/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Arrays
//!
//! Fixed-length arrays whose elements are independent atomic cells. Each
//! array owns its storage exclusively and is shared across threads by
//! reference; no operation ever locks or blocks.
//!
//! # Features
//!
//! - Ordered (`get`/`set`) and plain (`get_plain`/`set_plain`) accessors
//! - Per-element arithmetic, exchange and compare-and-swap
//! - Width-independent capability traits for generic callers
//!
//! # Author
//!
//! Haixing Hu

#[macro_use]
mod atomic_array_macro;

mod atomic_int_array;
mod atomic_long_array;
mod error;
mod traits;

pub use atomic_int_array::AtomicIntArray;
pub use atomic_long_array::AtomicLongArray;
pub use error::AtomicArrayError;
pub use traits::{
    AtomicArray,
    AtomicIntegerArray,
};
