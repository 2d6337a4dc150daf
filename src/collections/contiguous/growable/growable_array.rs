use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use log::{debug, warn};

use super::AppendError;
use crate::collections::contiguous::Array;
use crate::collections::contiguous::error::{AllocError, CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity used when none is provided.
pub const DEFAULT_CAP: usize = 50;

/// A variable length contiguous collection, based on [`Array<T>`], where every allocated slot holds
/// a live value.
///
/// Slots in `0..len` make up the logical sequence. Slots in `len..cap` are allocated and
/// initialized, but they are never surfaced by any method. Because new slots are constructed with
/// [`T::default()`](Default::default), every operation which creates slots requires `T: Default`.
///
/// Out of range accesses are never fatal: [`get`](GrowableArray::get) falls back to a provided
/// default, while [`set`](GrowableArray::set) and [`remove_at`](GrowableArray::remove_at) return
/// [`IndexOutOfBounds`] without changing anything. Allocation failures are reported through
/// [`AllocError`] and leave the array exactly as it was.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the GrowableArray.
/// - `c`: The capacity of the GrowableArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(c)` |
/// | `remove_at` | `O(n-i)` |
/// | `resize` | `O(c)` |
///
/// \* If the GrowableArray is full, `append` grows the capacity to `2c + 1` first.
pub struct GrowableArray<T> {
    pub(crate) arr: Array<T>,
    pub(crate) len: usize,
}

impl<T> GrowableArray<T> {
    /// Returns the number of elements in the logical sequence.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(4);
    /// arr.push('a');
    /// assert_eq!(arr.len(), 1);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the logical sequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots. Unlike [`Vec`], the capacity is exactly the value
    /// produced by the last reallocation: the initial capacity, `2c + 1` after growth or the value
    /// passed to [`resize`](GrowableArray::resize).
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<u8> = GrowableArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the element at `index`, or `None` if `index` is outside the logical
    /// sequence.
    pub fn get_ref(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.arr[index])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if `index` is outside the
    /// logical sequence.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            Some(&mut self.arr[index])
        } else {
            None
        }
    }

    /// Overwrites the element at `index` with `value`, returning the old element. The sequence is
    /// never extended, use [`append`](GrowableArray::append) for that.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, in which case nothing changes and `value` is
    /// dropped.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = (0..3).collect();
    /// assert_eq!(arr.set(1, 10), Ok(1));
    /// assert_eq!(arr.get(1, -1), 10);
    /// assert!(arr.set(3, 30).is_err());
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self.arr[index], value))
    }

    /// Destroys the GrowableArray, dropping every allocated slot (not only the logical sequence)
    /// before releasing the storage. Dropping the GrowableArray has the same effect.
    pub fn destroy(self) {
        debug!("destroying GrowableArray with {} of {} slots in use", self.len, self.cap());
        drop(self);
    }

    /// Checks that the provided index is within the logical sequence of self.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T: Default> GrowableArray<T> {
    /// Creates a new GrowableArray with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Panics
    /// Panics if the storage can't be allocated.
    pub fn new() -> GrowableArray<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates a new GrowableArray with length 0 and capacity exactly equal to `cap`. Every slot is
    /// filled with the default value of `T` straight away.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the memory layout would exceed [`isize::MAX`] bytes or the
    /// allocator is out of memory.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let arr = GrowableArray::<u64>::try_with_cap(10).unwrap();
    /// assert_eq!((arr.len(), arr.cap()), (0, 10));
    ///
    /// assert!(GrowableArray::<u64>::try_with_cap(usize::MAX).is_err());
    /// ```
    pub fn try_with_cap(cap: usize) -> Result<GrowableArray<T>, AllocError> {
        let arr = Array::try_repeat_default(cap)
            .inspect_err(|err| warn!("failed to create GrowableArray with capacity {cap}: {err}"))?;

        Ok(GrowableArray { arr, len: 0 })
    }

    /// Creates a new GrowableArray with length 0 and capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if the storage can't be allocated.
    pub fn with_cap(cap: usize) -> GrowableArray<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Appends `value` to the end of the logical sequence. If the GrowableArray is full, the
    /// capacity first grows from `c` to `2c + 1`.
    ///
    /// # Errors
    /// Returns an [`AppendError`] if growing fails. The GrowableArray is unchanged and `value` can
    /// be recovered with [`AppendError::into_value`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(0);
    /// arr.append(1).unwrap();
    /// assert_eq!(arr.cap(), 1);
    /// arr.append(2).unwrap();
    /// assert_eq!(arr.cap(), 3);
    /// assert_eq!((arr.get(0, 0), arr.get(1, 0)), (1, 2));
    /// ```
    pub fn append(&mut self, value: T) -> Result<(), AppendError<T>> {
        if self.len == self.cap() {
            if let Err(cause) = self.grow() {
                return Err(AppendError { value, cause });
            }
        }

        self.arr[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Appends `value` to the end of the logical sequence, growing if required.
    ///
    /// # Panics
    /// Panics if the storage can't be grown.
    pub fn push(&mut self, value: T) {
        self.append(value).map_err(AppendError::into_cause).throw()
    }

    /// Reallocates the storage to exactly `new_cap` slots. Elements past `new_cap` are dropped and
    /// new slots are filled with the default value of `T`. If `new_cap < len`, the length is
    /// truncated to `new_cap`.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new storage can't be allocated, in which case the
    /// GrowableArray is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = (0..15).collect();
    /// arr.resize(5).unwrap();
    /// assert_eq!((arr.len(), arr.cap()), (5, 5));
    /// assert_eq!(arr.get(4, -1), 4);
    /// assert_eq!(arr.get(5, -1), -1);
    /// ```
    pub fn resize(&mut self, new_cap: usize) -> Result<(), AllocError> {
        let old_cap = self.cap();
        let old_len = self.len;

        // Truncate first, so that a panicking drop or default can't leave len past the storage.
        self.len = cmp::min(old_len, new_cap);

        if let Err(err) = self.arr.try_realloc_with_default(new_cap) {
            warn!("failed to resize GrowableArray from {old_cap} to {new_cap} slots: {err}");
            self.len = old_len;
            return Err(err);
        }

        debug!("resized GrowableArray from {old_cap} to {new_cap} slots");
        Ok(())
    }

    /// Ensures that the GrowableArray has capacity for an additional `extra` elements. After a
    /// successful call, `cap >= len + extra`.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new storage can't be allocated, in which case the
    /// GrowableArray is unchanged.
    pub fn reserve(&mut self, extra: usize) -> Result<(), AllocError> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() {
            return Ok(());
        }

        self.resize(new_cap)
    }

    /// Shrinks the GrowableArray so that its capacity is equal to its length.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new storage can't be allocated, in which case the
    /// GrowableArray is unchanged.
    pub fn shrink_to_fit(&mut self) -> Result<(), AllocError> {
        self.resize(self.len)
    }

    /// Removes the element at `index`, shifting every following element one place to the left.
    /// The vacated slot at the end of the sequence stays allocated and is reset to the default
    /// value of `T`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, in which case nothing changes.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = "abcd".chars().collect();
    /// let cap = arr.cap();
    /// assert_eq!(arr.remove_at(1), Ok('b'));
    /// assert_eq!(arr.len(), 3);
    /// assert_eq!(arr.cap(), cap);
    /// assert_eq!(arr.get(1, '_'), 'c');
    /// assert!(arr.remove_at(3).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        self.arr[index..self.len].rotate_left(1);
        self.len -= 1;

        Ok(mem::take(&mut self.arr[self.len]))
    }

    /// Grows the storage using the `2c + 1` policy, which makes progress even from capacity 0.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new capacity overflows or can't be allocated.
    pub(crate) fn grow(&mut self) -> Result<(), AllocError> {
        let new_cap = self.cap()
            .checked_mul(2)
            .and_then(|cap| cap.checked_add(1))
            .ok_or(CapacityOverflow)?;

        self.resize(new_cap)
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Returns a copy of the element at `index`, or `default` if `index` is outside the logical
    /// sequence. This never fails and never changes the GrowableArray.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<_> = (0..3).collect();
    /// assert_eq!(arr.get(2, -1), 2);
    /// assert_eq!(arr.get(99, -1), -1);
    /// ```
    pub fn get(&self, index: usize, default: T) -> T {
        match self.get_ref(index) {
            Some(value) => value.clone(),
            None => default,
        }
    }
}

#[cfg(test)]
impl<T> GrowableArray<T> {
    pub(crate) fn assert_invariants(&self) {
        assert!(self.len <= self.cap(), "len {} exceeds cap {}", self.len, self.cap());
        assert_eq!(self.arr.len(), self.cap(), "storage size should match cap");
    }
}

impl<T: Default> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = GrowableArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T: Default> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is outside the logical sequence.
    fn index(&self, index: usize) -> &Self::Output {
        self.check_index(index).throw();
        &self.arr[index]
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    /// # Panics
    /// Panics if `index` is outside the logical sequence.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.check_index(index).throw();
        &mut self.arr[index]
    }
}

impl<T: Clone + Default> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        arr.arr[..self.len].clone_from_slice(&self.arr[..self.len]);
        arr.len = self.len;

        arr
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.arr[..self.len] == other.arr[..other.len]
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: Debug> Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("contents", &&self.arr[..self.len])
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
