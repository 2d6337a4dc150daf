#![cfg(feature = "handle")]

use growable_array::collections::contiguous::growable::DEFAULT_CAP;
use growable_array::handle::{self, Handle};

#[test]
fn create_reports_length_and_capacity() {
    for cap in [0, 1, 10, 64] {
        let arr = handle::create::<u8>(cap);
        assert!(arr.is_some());
        assert_eq!(handle::length(&arr), 0);
        assert_eq!(handle::capacity(&arr), cap);
    }

    let arr = handle::create_default::<u8>();
    assert_eq!(handle::capacity(&arr), DEFAULT_CAP);
}

#[test]
fn failed_create_gives_a_null_handle() {
    let arr = handle::create::<u64>(usize::MAX);
    assert!(arr.is_none());
    assert_eq!(handle::length(&arr), 0);
    assert_eq!(handle::capacity(&arr), 0);
}

#[test]
fn null_handles_fail_every_operation() {
    let mut arr: Handle<i32> = None;

    assert!(!handle::append(&mut arr, 1));
    assert_eq!(handle::get(&arr, 0, -1), -1);
    assert!(!handle::set(&mut arr, 0, 1));
    assert!(!handle::resize(&mut arr, 10));
    assert!(!handle::remove_at(&mut arr, 0));

    handle::destroy(&mut arr);
    handle::destroy(&mut arr);
    assert!(arr.is_none(), "Operations on a null handle shouldn't create an array.");
}

#[test]
fn destroy_leaves_a_null_handle() {
    let mut arr = handle::create::<String>(4);
    assert!(handle::append(&mut arr, String::from("widget")));

    handle::destroy(&mut arr);
    assert!(arr.is_none());
    assert_eq!(handle::get(&arr, 0, String::new()), "");
    assert!(!handle::append(&mut arr, String::from("gadget")));
}

#[test]
fn walkthrough() {
    let mut arr = handle::create::<i32>(10);
    assert_eq!((handle::length(&arr), handle::capacity(&arr)), (0, 10));

    for i in 0..15 {
        assert!(handle::append(&mut arr, i));
    }
    assert_eq!(handle::length(&arr), 15);
    assert!(handle::capacity(&arr) >= 15);

    for i in 0..15 {
        assert_eq!(handle::get(&arr, i, -1), i as i32);
        assert!(handle::set(&mut arr, i, i as i32 * 2));
    }
    for i in 0..15 {
        assert_eq!(handle::get(&arr, i, -1), i as i32 * 2);
    }

    assert_eq!(handle::get(&arr, 99, -1), -1);
    assert!(!handle::set(&mut arr, 99, 99));
    assert_eq!(handle::length(&arr), 15);

    assert!(handle::resize(&mut arr, 5));
    assert_eq!((handle::length(&arr), handle::capacity(&arr)), (5, 5));
    for i in 5..20 {
        assert_eq!(handle::get(&arr, i, -1), -1);
    }

    handle::destroy(&mut arr);
    assert!(arr.is_none());
}

#[test]
fn inventory_style_removal() {
    let mut products = handle::create::<String>(2);
    for name in ["bolt", "nut", "washer", "screw"] {
        assert!(handle::append(&mut products, String::from(name)));
    }

    assert!(handle::remove_at(&mut products, 1));
    assert!(!handle::remove_at(&mut products, 3));

    let names: Vec<_> = (0..handle::length(&products))
        .map(|i| handle::get(&products, i, String::new()))
        .collect();
    assert_eq!(names, ["bolt", "washer", "screw"]);
    assert_eq!(handle::capacity(&products), 5);
}
