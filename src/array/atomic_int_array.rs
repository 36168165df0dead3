/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Signed Integer Array
//!
//! Provides a fixed-length array of atomic 32-bit signed integers.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::array::atomic_array_macro::impl_atomic_integer_array;
use crate::array::error::AtomicArrayError;

impl_atomic_integer_array!(
    AtomicIntArray,
    std::sync::atomic::AtomicI32,
    i32,
    "32-bit signed integers"
);
