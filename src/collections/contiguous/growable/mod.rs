//! A module containing [`GrowableArray`] and associated types.
//!
//! [`GrowableArray`] is also re-exported under the parent module.

mod error;
mod growable_array;
mod proptests;
mod tests;

pub use error::*;
pub use growable_array::*;
