//! A module containing [`Array`], the fixed-size storage block underneath
//! [`GrowableArray`](super::GrowableArray).
//!
//! [`Array`] is also re-exported under the parent module.

mod array;

pub use array::*;
