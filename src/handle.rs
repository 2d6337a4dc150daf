//! Handle based access to a [`GrowableArray`].
//!
//! A [`Handle`] is an `Option<GrowableArray<T>>`. `None` is the null handle: the result of a failed
//! [`create`], or of [`destroy`]. Every function here accepts a null handle and treats it the same
//! way as an allocation failure, so callers only ever see a `bool`, a default value or `0`.
//!
//! # Examples
//! ```
//! # use growable_array::handle;
//! let mut arr = handle::create::<i32>(10);
//! for i in 0..15 {
//!     assert!(handle::append(&mut arr, i));
//! }
//! assert_eq!(handle::length(&arr), 15);
//! assert_eq!(handle::get(&arr, 99, -1), -1);
//! assert!(!handle::set(&mut arr, 99, 99));
//!
//! assert!(handle::resize(&mut arr, 5));
//! assert_eq!(handle::length(&arr), 5);
//!
//! handle::destroy(&mut arr);
//! assert!(arr.is_none());
//! assert!(!handle::append(&mut arr, 1));
//! ```

use log::warn;

use crate::collections::contiguous::GrowableArray;
use crate::collections::contiguous::growable::DEFAULT_CAP;

/// An owned, nullable GrowableArray.
pub type Handle<T> = Option<GrowableArray<T>>;

/// Creates a GrowableArray with `cap` default-constructed slots. Returns a null handle if the
/// storage can't be allocated.
pub fn create<T: Default>(cap: usize) -> Handle<T> {
    GrowableArray::try_with_cap(cap).ok()
}

/// Creates a GrowableArray with [`DEFAULT_CAP`] slots.
pub fn create_default<T: Default>() -> Handle<T> {
    create(DEFAULT_CAP)
}

/// Destroys the GrowableArray behind `handle` and leaves a null handle in its place. Does nothing
/// for a null handle.
pub fn destroy<T>(handle: &mut Handle<T>) {
    if let Some(arr) = handle.take() {
        arr.destroy();
    }
}

/// Appends `value`, growing the storage if needed. Returns false for a null handle or if the
/// storage couldn't grow, in which case nothing changes.
pub fn append<T: Default>(handle: &mut Handle<T>, value: T) -> bool {
    match handle {
        Some(arr) => arr.append(value).is_ok(),
        None => null_handle("append"),
    }
}

/// Returns a copy of the element at `index`, or `default` if `index` is out of range or the handle
/// is null.
pub fn get<T: Clone>(handle: &Handle<T>, index: usize, default: T) -> T {
    match handle {
        Some(arr) => arr.get(index, default),
        None => default,
    }
}

/// Overwrites the element at `index`. Returns false for a null handle or an out of range index, in
/// which case nothing changes.
pub fn set<T>(handle: &mut Handle<T>, index: usize, value: T) -> bool {
    match handle {
        Some(arr) => arr.set(index, value).is_ok(),
        None => null_handle("set"),
    }
}

/// Reallocates the storage to exactly `new_cap` slots, truncating the length if required. Returns
/// false for a null handle or if the storage couldn't be allocated, in which case nothing changes.
pub fn resize<T: Default>(handle: &mut Handle<T>, new_cap: usize) -> bool {
    match handle {
        Some(arr) => arr.resize(new_cap).is_ok(),
        None => null_handle("resize"),
    }
}

/// Removes the element at `index`, shifting the rest of the sequence left. Returns false for a null
/// handle or an out of range index, in which case nothing changes.
pub fn remove_at<T: Default>(handle: &mut Handle<T>, index: usize) -> bool {
    match handle {
        Some(arr) => arr.remove_at(index).is_ok(),
        None => null_handle("remove_at"),
    }
}

/// Returns the length of the logical sequence, or 0 for a null handle.
pub fn length<T>(handle: &Handle<T>) -> usize {
    handle.as_ref().map_or(0, GrowableArray::len)
}

/// Returns the number of allocated slots, or 0 for a null handle.
pub fn capacity<T>(handle: &Handle<T>) -> usize {
    handle.as_ref().map_or(0, GrowableArray::cap)
}

fn null_handle(operation: &str) -> bool {
    warn!("{operation} called on a null GrowableArray handle");
    false
}
