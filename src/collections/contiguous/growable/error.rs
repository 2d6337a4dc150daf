use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::error::AllocError;

/// The error returned by [`GrowableArray::append`](super::GrowableArray::append) when the storage
/// couldn't grow. The rejected value is handed back rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendError<T> {
    /// The value that was passed to `append`.
    pub value: T,
    /// Why the storage couldn't grow.
    pub cause: AllocError,
}

impl<T> AppendError<T> {
    /// Recovers the value which couldn't be appended.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Discards the rejected value, keeping only the reason for the failure.
    pub fn into_cause(self) -> AllocError {
        self.cause
    }
}

impl<T> Display for AppendError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to append value: {}", self.cause)
    }
}

impl<T: Debug> Error for AppendError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}
