#![cfg(test)]

use std::marker::PhantomData;
use std::ptr::NonNull;

use super::*;
use crate::collections::contiguous::Array;
use crate::collections::contiguous::error::{AllocError, CapacityOverflow, IndexOutOfBounds};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

/// A full GrowableArray of ZSTs whose capacity can't grow any further. No memory is involved, so
/// this is the only way to see a real growth failure.
fn saturated_zsts() -> GrowableArray<ZeroSizedType> {
    GrowableArray {
        arr: Array {
            ptr: NonNull::dangling(),
            size: usize::MAX,
            _phantom: PhantomData,
        },
        len: usize::MAX,
    }
}

#[test]
fn test_create() {
    for cap in [0, 1, 10, 50, 1000] {
        let arr = GrowableArray::<u32>::with_cap(cap);
        assert_eq!(arr.len(), 0, "A new GrowableArray should be empty.");
        assert_eq!(arr.cap(), cap, "Capacity should match the requested value exactly.");
        arr.assert_invariants();
    }

    assert_eq!(GrowableArray::<u8>::new().cap(), DEFAULT_CAP);
    assert_eq!(GrowableArray::<u8>::default().cap(), 50);

    assert_eq!(
        GrowableArray::<u64>::try_with_cap(usize::MAX).err(),
        Some(AllocError::CapacityOverflow(CapacityOverflow)),
        "An impossible layout should be reported, not panic."
    );
}

#[test]
fn test_append_and_get() {
    let mut arr = GrowableArray::with_cap(10);
    for i in 0..15 {
        arr.append(i).expect("Appending should succeed.");
        arr.assert_invariants();
    }

    assert_eq!(arr.len(), 15);
    assert_eq!(arr.cap(), 21, "A full capacity of 10 should grow to 21.");
    for i in 0..15 {
        assert_eq!(arr.get(i, -1), i as i32, "Values should keep their insertion order.");
    }
}

#[test]
fn test_growth_policy() {
    let mut arr = GrowableArray::with_cap(0);
    let mut caps = Vec::new();

    for i in 0..15_u8 {
        arr.push(i);
        caps.push(arr.cap());
    }
    caps.dedup();

    assert_eq!(caps, [1, 3, 7, 15], "Capacity should grow as 2c + 1, starting from 0.");
}

#[test]
fn test_failed_append() {
    let mut arr = saturated_zsts();

    let err = arr.append(ZeroSizedType).expect_err("Growing past usize::MAX should fail.");
    assert!(err.cause.is_capacity_overflow());
    assert_eq!(err.into_value(), ZeroSizedType, "The rejected value should be handed back.");

    assert_eq!(arr.len(), usize::MAX);
    assert_eq!(arr.cap(), usize::MAX);

    assert_panics!({ arr.push(ZeroSizedType) });
}

#[test]
fn test_get_out_of_bounds() {
    let mut arr = GrowableArray::with_cap(8);
    arr.push(String::from("a"));

    for index in [1, 7, 8, 99] {
        assert_eq!(
            arr.get(index, String::from("default")),
            "default",
            "Reads past len should return the default, even within capacity."
        );
    }
    assert_eq!((arr.len(), arr.cap()), (1, 8), "Reading shouldn't change the GrowableArray.");

    assert_eq!(arr.get_ref(0).map(String::as_str), Some("a"));
    assert_eq!(arr.get_ref(1), None);
    assert_eq!(arr.get_mut(1), None);
}

#[test]
fn test_set() {
    let mut arr: GrowableArray<_> = (0..5).collect();

    assert_eq!(arr.set(2, 20), Ok(2), "set should return the old value.");
    assert_eq!(arr.get(2, -1), 20);

    assert_eq!(arr.set(5, 50), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(arr.set(99, 99), Err(IndexOutOfBounds { index: 99, len: 5 }));
    assert_eq!(arr.len(), 5, "set shouldn't extend the sequence.");
    assert_eq!(arr, [0, 1, 20, 3, 4].into_iter().collect::<GrowableArray<_>>());

    *arr.get_mut(0).expect("Index 0 is in bounds.") = 10;
    arr[1] = 11;
    assert_eq!(arr[0], 10);
    assert_eq!(arr[1], 11);
}

#[test]
fn test_remove_at() {
    let mut arr: GrowableArray<_> = (0..6).collect();
    let cap = arr.cap();

    assert_eq!(arr.remove_at(2), Ok(2));
    assert_eq!(arr, [0, 1, 3, 4, 5].into_iter().collect::<GrowableArray<_>>(), "Later elements should shift left.");

    assert_eq!(arr.remove_at(4), Ok(5), "Removing the last element should work.");
    assert_eq!(arr.remove_at(0), Ok(0), "Removing the first element should work.");
    assert_eq!(arr, [1, 3, 4].into_iter().collect::<GrowableArray<_>>());

    assert_eq!(arr.len(), 3);
    assert_eq!(arr.cap(), cap, "Removal shouldn't release any capacity.");
    assert_eq!(
        &arr.arr[3..],
        &[0, 0, 0],
        "Vacated slots should be reset to the default value."
    );

    assert_eq!(arr.remove_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(arr, [1, 3, 4].into_iter().collect::<GrowableArray<_>>(), "A failed removal shouldn't change anything.");
    arr.assert_invariants();
}

#[test]
fn test_resize() {
    let mut arr: GrowableArray<_> = (0..10).collect();

    arr.resize(20).expect("Growing should succeed.");
    assert_eq!((arr.len(), arr.cap()), (10, 20));
    for i in 0..10 {
        assert_eq!(arr.get(i, -1), i as i32, "Growing should keep elements in place.");
    }

    arr.resize(20).expect("Resizing to the same capacity should succeed.");
    assert_eq!((arr.len(), arr.cap()), (10, 20));

    arr.resize(4).expect("Shrinking should succeed.");
    assert_eq!((arr.len(), arr.cap()), (4, 4), "Shrinking below len should truncate.");
    assert_eq!(arr, (0..4).collect::<GrowableArray<_>>());
    for i in 4..20 {
        assert_eq!(arr.get(i, -1), -1, "Truncated elements shouldn't be readable.");
    }

    arr.resize(8).expect("Growing should succeed.");
    assert_eq!(arr.len(), 4, "Growing again shouldn't resurrect truncated elements.");
    assert_eq!(arr.get(4, -1), -1);

    arr.resize(0).expect("Resizing to 0 should succeed.");
    assert!(arr.is_empty());
    assert_eq!(arr.cap(), 0);

    arr.push(7);
    assert_eq!((arr.len(), arr.cap(), arr.get(0, -1)), (1, 1, 7));
}

#[test]
fn test_failed_resize() {
    let mut arr: GrowableArray<u64> = (0..10).collect();

    assert_eq!(
        arr.resize(usize::MAX),
        Err(AllocError::CapacityOverflow(CapacityOverflow))
    );
    assert_eq!((arr.len(), arr.cap()), (10, 10), "A failed resize shouldn't change anything.");
    assert_eq!(arr, (0..10).collect::<GrowableArray<_>>());
    arr.assert_invariants();
}

#[test]
fn test_reserve_and_shrink() {
    let mut arr: GrowableArray<u8> = (0..4).collect();

    arr.reserve(2).expect("Reserving should succeed.");
    assert_eq!(arr.cap(), 6);

    arr.reserve(1).expect("Reserving within capacity should succeed.");
    assert_eq!(arr.cap(), 6, "Reserving within capacity shouldn't reallocate.");

    assert!(arr.reserve(usize::MAX).is_err());
    assert_eq!(arr.cap(), 6);

    arr.shrink_to_fit().expect("Shrinking should succeed.");
    assert_eq!((arr.len(), arr.cap()), (4, 4));
}

#[test]
fn test_drop() {
    CountedDrop::take_count();

    let mut arr = GrowableArray::<CountedDrop>::with_cap(5);
    arr.push(CountedDrop(1));
    arr.push(CountedDrop(2));
    assert_eq!(
        CountedDrop::take_count(),
        2,
        "Appending should drop the default values being replaced."
    );

    let removed = arr.remove_at(0).expect("Index 0 is in bounds.");
    assert_eq!(removed, CountedDrop(1));
    drop(removed);
    assert_eq!(CountedDrop::take_count(), 2, "Only the removed value and its temporary should drop.");

    arr.resize(3).expect("Shrinking should succeed.");
    assert_eq!(CountedDrop::take_count(), 2, "Shrinking from 5 to 3 should drop 2 slots.");

    assert!(arr.resize(usize::MAX).is_err());
    assert_eq!(CountedDrop::take_count(), 0, "A failed resize shouldn't drop anything.");

    arr.destroy();
    assert_eq!(
        CountedDrop::take_count(),
        3,
        "Destroying should drop every slot, not just the logical sequence."
    );
}

#[test]
fn test_index_panics() {
    let mut arr: GrowableArray<u32> = GrowableArray::with_cap(4);
    arr.push(1);

    assert_panics!({
        let _value: u32 = arr[1];
    }, "Indexing within capacity but past len should panic.");
    assert_panics!({ arr[4] = 1 });
}

#[test]
fn test_clone_equality_and_debug() {
    let mut arr = GrowableArray::with_cap(3);
    arr.push(1);
    arr.push(2);

    let cloned = arr.clone();
    assert_eq!(cloned, arr, "A clone should be equal.");
    assert_eq!(cloned.cap(), 3, "A clone should keep the capacity.");

    let mut other = GrowableArray::with_cap(10);
    other.push(1);
    other.push(2);
    assert_eq!(arr, other, "Equality should ignore capacity.");

    other.push(3);
    assert_ne!(arr, other);
    other.resize(2).expect("Shrinking should succeed.");
    assert_eq!(arr, other, "Equality should ignore truncated slots.");

    assert_eq!(format!("{arr:?}"), "GrowableArray { contents: [1, 2], len: 2, cap: 3 }");
}

#[test]
fn test_scenario() {
    let mut arr = GrowableArray::with_cap(10);
    for i in 0..15 {
        arr.push(i);
    }
    assert_eq!(arr.len(), 15);
    assert!(arr.cap() >= 15);

    assert_eq!(arr.get(99, -1), -1);
    assert!(arr.set(99, 99).is_err());

    arr.resize(5).expect("Shrinking should succeed.");
    assert_eq!(arr.len(), 5);
    for i in 5..20 {
        assert_eq!(arr.get(i, -1), -1);
    }
    for i in 0..5 {
        assert_eq!(arr.get(i, -1), i as i32);
    }
}
