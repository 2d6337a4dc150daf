//! A generic growable array whose storage is managed by hand.
//!
//! # Purpose
//! [`GrowableArray`](collections::contiguous::GrowableArray) is a value-typed sequence backed by a
//! manually sized block of storage. It supports amortized `O(1)` append, bounds-checked random
//! access, removal from the middle of the sequence and explicit capacity changes. Element
//! construction and destruction are treated as a first class concern: every allocated slot always
//! holds a live, default-constructed (or assigned) value, so the container never hands out
//! uninitialized memory and never has to remember which slots have been constructed.
//!
//! # Error Handling
//! Nothing in the core API is fatal. Out of range reads degrade to a caller-supplied default, out of
//! range writes and removals report [`IndexOutOfBounds`](collections::contiguous::error::IndexOutOfBounds),
//! and allocation failures report [`AllocError`](collections::contiguous::error::AllocError) while
//! leaving the array as it was. Errors are strongly typed, using enums for static dispatch with
//! structs that implement [`Error`](std::error::Error).
//!
//! Panicking conveniences exist where handling an error every time would be tedious (such as
//! [`push`](collections::contiguous::GrowableArray::push) or indexing), and they panic with the
//! message of the underlying error.
//!
//! # Handles
//! The [`handle`] module (behind the `handle` feature, enabled by default) offers the same
//! operations over an `Option<GrowableArray<T>>`, where `None` stands for a null or destroyed
//! handle. Every operation there reports failure through a `bool` or a default value.
//!
//! # Logging
//! Growth, resizing and allocation failures are reported through the [`log`] facade. This crate
//! never installs a logger itself.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "handle")]
pub mod handle;

pub(crate) mod util;
