//! Collection types.
//!
//! # Method
//! Nothing here implements [`Deref<Target = [T]>`](std::ops::Deref) for the growable types: the
//! logical sequence is only reachable through index based methods, which keeps spare capacity from
//! ever being observed.

pub mod contiguous;
