// Fixed-capacity buffer of candidate analyses for one word
//
// Entries are prepended: the most recently inserted candidate is always at
// index 0. The analyzer relies on this reversed order to rank dictionary hits
// against predicted fallbacks, so it must not change to append order.

use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::GrammarId;
use crate::error::{PrependError, WordInfosError};

// ---------------------------------------------------------------------------
// WordInfo
// ---------------------------------------------------------------------------

/// One candidate analysis of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordInfo<F = String> {
    /// Normal (dictionary) form of the word for this candidate.
    pub normal_form: F,

    /// Grammar class of the normal form.
    pub normal_form_id: GrammarId,

    /// Grammar class of the analyzed surface form.
    pub form_id: GrammarId,
}

// ---------------------------------------------------------------------------
// WordInfos
// ---------------------------------------------------------------------------

/// Bounded collection of the candidate analyses of a single word.
///
/// Storage for `capacity` entries is reserved up front and never grows.
/// Once full, further prepends are rejected and the form is handed back
/// to the caller through [`PrependError`]; existing entries are never
/// evicted. The rejection is remembered in a sticky overflow flag.
///
/// A second sticky flag records whether any accepted candidate came from
/// prediction rather than a dictionary match. Both flags are only cleared
/// by [`erase`](Self::erase).
///
/// The form type defaults to `String`. The C bindings store `CString`s so
/// that borrowed NUL-terminated views can be handed out.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordInfos<F = String> {
    capacity: usize,
    entries: VecDeque<WordInfo<F>>,
    prediction: bool,
    overflowed: bool,
}

impl<F> WordInfos<F> {
    /// Create an empty buffer that can hold up to `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if storage for `capacity` entries
    /// exceeds `isize::MAX` bytes, and aborts if the allocator fails, like
    /// any std collection. Use [`try_new`](Self::try_new) to get an error
    /// for both cases instead.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            prediction: false,
            overflowed: false,
        }
    }

    /// Create an empty buffer, reporting allocation failure as an error.
    pub fn try_new(capacity: usize) -> Result<Self, WordInfosError> {
        let mut entries = VecDeque::new();
        entries.try_reserve_exact(capacity).map_err(|source| {
            tracing::debug!(capacity, "word infos allocation failed");
            WordInfosError::Allocation { capacity, source }
        })?;
        Ok(Self {
            capacity,
            entries,
            prediction: false,
            overflowed: false,
        })
    }

    /// Drop every entry and clear both flags. The capacity and the reserved
    /// storage are kept, so the buffer can be reused for the next word.
    pub fn erase(&mut self) {
        self.entries.clear();
        self.prediction = false;
        self.overflowed = false;
    }

    /// Prepend a dictionary candidate. Same as
    /// [`prepend_word_with_prediction`](Self::prepend_word_with_prediction)
    /// with `prediction = false`.
    pub fn prepend_word(
        &mut self,
        form: F,
        normal_form_id: GrammarId,
        form_id: GrammarId,
    ) -> Result<(), PrependError<F>> {
        self.prepend_word_with_prediction(form, normal_form_id, form_id, false)
    }

    /// Insert a candidate at index 0, shifting the existing entries back.
    ///
    /// Takes ownership of `form` on success. When the buffer already holds
    /// `capacity` entries nothing is inserted, the overflow flag is set and
    /// the form is returned inside the error.
    ///
    /// A successful insert with `prediction = true` sets the prediction flag.
    /// Later dictionary inserts do not clear it.
    pub fn prepend_word_with_prediction(
        &mut self,
        form: F,
        normal_form_id: GrammarId,
        form_id: GrammarId,
        prediction: bool,
    ) -> Result<(), PrependError<F>> {
        if self.entries.len() >= self.capacity {
            self.overflowed = true;
            tracing::debug!(
                capacity = self.capacity,
                prediction,
                "word infos full, candidate rejected"
            );
            return Err(PrependError::new(form, self.capacity));
        }

        self.entries.push_front(WordInfo {
            normal_form: form,
            normal_form_id,
            form_id,
        });
        self.prediction |= prediction;
        Ok(())
    }

    /// Maximum number of entries, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any stored candidate was obtained by prediction.
    pub fn is_prediction(&self) -> bool {
        self.prediction
    }

    /// Whether a prepend has been rejected since construction or the last
    /// [`erase`](Self::erase).
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Alias for [`has_overflowed`](Self::has_overflowed).
    ///
    /// This reports a rejected prepend, not `len() == capacity()`; see
    /// [`is_saturated`](Self::is_saturated) for the latter.
    pub fn is_full(&self) -> bool {
        self.overflowed
    }

    /// Whether the next prepend would be rejected.
    pub fn is_saturated(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Entry at `index` (0 = most recently inserted), or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&WordInfo<F>> {
        self.entries.get(index)
    }

    /// Normal form of the entry at `index`.
    pub fn normal_form(&self, index: usize) -> Result<&F, WordInfosError> {
        self.entry(index).map(|info| &info.normal_form)
    }

    /// Grammar class of the normal form of the entry at `index`.
    pub fn normal_form_id(&self, index: usize) -> Result<GrammarId, WordInfosError> {
        self.entry(index).map(|info| info.normal_form_id)
    }

    /// Grammar class of the surface form of the entry at `index`.
    pub fn form_id(&self, index: usize) -> Result<GrammarId, WordInfosError> {
        self.entry(index).map(|info| info.form_id)
    }

    /// Iterate over the entries, most recently inserted first.
    pub fn iter(&self) -> vec_deque::Iter<'_, WordInfo<F>> {
        self.entries.iter()
    }

    fn entry(&self, index: usize) -> Result<&WordInfo<F>, WordInfosError> {
        self.entries.get(index).ok_or(WordInfosError::IndexOutOfRange {
            index,
            size: self.entries.len(),
        })
    }
}

// The derived clone would only reserve room for the current entries.
impl<F: Clone> Clone for WordInfos<F> {
    fn clone(&self) -> Self {
        let mut entries = VecDeque::with_capacity(self.capacity);
        entries.extend(self.entries.iter().cloned());
        Self {
            capacity: self.capacity,
            entries,
            prediction: self.prediction,
            overflowed: self.overflowed,
        }
    }
}

impl<'a, F> IntoIterator for &'a WordInfos<F> {
    type Item = &'a WordInfo<F>;
    type IntoIter = vec_deque::Iter<'a, WordInfo<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
