//! Contiguous collection types. Namely [`Array`] for fixed-size storage and [`GrowableArray`] for
//! sequences that vary in length at runtime.
#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod growable;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use growable::GrowableArray;
