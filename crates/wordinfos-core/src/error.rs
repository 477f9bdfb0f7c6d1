// Error types for the candidate buffer

use std::collections::TryReserveError;

/// Error type for reading from or allocating a [`WordInfos`](crate::WordInfos).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordInfosError {
    /// An accessor was called with `index >= len()`.
    #[error("index {index} out of range for word infos of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Storage for the requested capacity could not be reserved.
    #[error("failed to allocate storage for {capacity} word infos: {source}")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

/// A prepend was rejected because the buffer already holds `capacity` entries.
///
/// The rejected form is handed back untouched, so ownership stays with the
/// caller. Use [`into_form`](Self::into_form) to recover it.
#[derive(Debug, thiserror::Error)]
#[error("word infos buffer is full (capacity {capacity})")]
pub struct PrependError<F> {
    form: F,
    capacity: usize,
}

impl<F> PrependError<F> {
    pub(crate) fn new(form: F, capacity: usize) -> Self {
        Self { form, capacity }
    }

    /// Capacity of the buffer that rejected the form.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Borrow the rejected form.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Take back ownership of the rejected form.
    pub fn into_form(self) -> F {
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_message() {
        let err = WordInfosError::IndexOutOfRange { index: 3, size: 2 };
        assert_eq!(err.to_string(), "index 3 out of range for word infos of size 2");
    }

    #[test]
    fn allocation_error_has_source() {
        let source = Vec::<u8>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = WordInfosError::Allocation { capacity: usize::MAX, source };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn prepend_error_returns_form() {
        let err = PrependError::new(String::from("koira"), 4);
        assert_eq!(err.capacity(), 4);
        assert_eq!(err.form(), "koira");
        assert_eq!(err.to_string(), "word infos buffer is full (capacity 4)");
        assert_eq!(err.into_form(), "koira");
    }
}
