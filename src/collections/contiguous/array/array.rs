use std::alloc::{self, Layout};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use log::warn;

use crate::collections::contiguous::error::{AllocError, CapacityOverflow, OutOfMemory};
use crate::util::result::ResultExtension;

/// A fixed-size block of storage that is sized at runtime and holds a live value in every slot.
/// Similar to a [`Box<[T]>`](Box<T>), except that allocation failure is reported rather than
/// aborting the process.
///
/// There is no way to observe an uninitialized slot: every constructor and every reallocation fills
/// new slots with [`T::default()`](Default::default) before the Array is handed back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `repeat_default` | `O(n)` |
/// | `realloc_with_default` | `O(n)`*, `O(1)` |
///
/// \* Reallocating to the current size is a no-op.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::repeat_default(3);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. No memory is allocated.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout would have a size exceeding [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to allocate memory for the provided [`Layout`]. Returns a dangling pointer
    /// for a zero-sized layout.
    ///
    /// # Errors
    /// Returns [`OutOfMemory`] if the global allocator can't satisfy the request.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<T>, OutOfMemory> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

        NonNull::new(raw_ptr).ok_or_else(|| {
            warn!("allocator refused {} bytes for Array storage", layout.size());
            OutOfMemory {
                size: layout.size(),
                align: layout.align(),
            }
        })
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the memory layout size exceeds [`isize::MAX`] or the allocator
    /// is out of memory.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::Array;
    /// let arr = Array::<u32>::try_repeat_default(3).unwrap();
    /// assert_eq!(&*arr, &[0, 0, 0]);
    ///
    /// assert!(Array::<u32>::try_repeat_default(usize::MAX).is_err());
    /// ```
    pub fn try_repeat_default(count: usize) -> Result<Array<T>, AllocError> {
        let mut block = InitGuard::alloc(count)?;

        while block.end < count {
            block.push(T::default());
        }

        Ok(block.finish())
    }

    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn repeat_default(count: usize) -> Array<T> {
        Self::try_repeat_default(count).throw()
    }

    /// Reallocate self with `new_size`, keeping the first `min(size, new_size)` values, dropping
    /// any values past `new_size` and filling any extra slots with the default value of `T`.
    ///
    /// The new block is allocated and filled before self is touched, so if this method returns an
    /// error, self is unchanged.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the memory layout size exceeds [`isize::MAX`] or the allocator
    /// is out of memory.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::Array;
    /// let mut arr = Array::<u8>::repeat_default(2);
    /// arr[0] = 7;
    /// arr.try_realloc_with_default(4).unwrap();
    /// assert_eq!(&*arr, &[7, 0, 0, 0]);
    ///
    /// arr.try_realloc_with_default(1).unwrap();
    /// assert_eq!(&*arr, &[7]);
    /// ```
    pub fn try_realloc_with_default(&mut self, new_size: usize) -> Result<(), AllocError> {
        if new_size == self.size {
            return Ok(());
        }

        let keep = cmp::min(self.size, new_size);

        let mut block = InitGuard::alloc(new_size)?;
        block.start = keep;
        block.end = keep;

        while block.end < new_size {
            block.push(T::default());
        }

        // SAFETY: Both ranges are valid for keep values, properly aligned and belong to different
        // allocations. The values are moved bitwise, and the old copies are never dropped because
        // the retired block below only covers keep..size.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr().cast_const(), block.ptr.as_ptr(), keep);
        }
        block.start = 0;

        let old = mem::replace(self, block.finish());
        let retired = InitGuard {
            ptr: old.ptr,
            size: old.size,
            start: keep,
            end: old.size,
        };
        // Forget the old value to prevent a double free, retired drops the tail and frees the block.
        mem::forget(old);
        drop(retired);

        Ok(())
    }

    /// Reallocate self with `new_size`, filling any extra elements with the default value of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn realloc_with_default(&mut self, new_size: usize) {
        self.try_realloc_with_default(new_size).throw()
    }
}

/// A block of `size` slots, of which only `start..end` hold initialized values. Dropping it drops
/// those values and then deallocates the block, which keeps partially filled allocations from
/// leaking when a constructor panics.
struct InitGuard<T> {
    ptr: NonNull<T>,
    size: usize,
    start: usize,
    end: usize,
}

impl<T> InitGuard<T> {
    fn alloc(size: usize) -> Result<InitGuard<T>, AllocError> {
        let layout = Array::<T>::make_layout(size)?;
        let ptr = Array::<T>::make_ptr(layout)?;

        Ok(InitGuard {
            ptr,
            size,
            start: 0,
            end: 0,
        })
    }

    fn push(&mut self, value: T) {
        debug_assert!(self.end < self.size);
        // SAFETY: end < size, so the write is within the allocated block and targets an
        // uninitialized slot.
        unsafe { self.ptr.add(self.end).write(value); }
        self.end += 1;
    }

    fn finish(self) -> Array<T> {
        debug_assert!(self.start == 0 && self.end == self.size);
        let arr = Array {
            ptr: self.ptr,
            size: self.size,
            _phantom: PhantomData,
        };
        mem::forget(self);
        arr
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        // SAFETY: Values in start..end are initialized and owned by this guard. The range is
        // within the allocated block.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        dealloc(self.ptr, self.size);
    }
}

/// Frees a block of `size` slots allocated through [`Array::make_ptr`]. Zero-sized layouts were
/// never allocated and are skipped.
fn dealloc<T>(ptr: NonNull<T>, size: usize) {
    if let Ok(layout) = Array::<T>::make_layout(size) {
        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact layout.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: Every slot of an Array is initialized, and the range is within the allocated
        // block.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        dealloc(self.ptr, self.size);
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker prevents any other access throughout the
        // lifetime of the returned slice.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
