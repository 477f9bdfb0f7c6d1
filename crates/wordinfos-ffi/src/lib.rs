// FFI functions are inherently unsafe — callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// wordinfos-ffi: C-compatible FFI layer for the word infos buffer.
//
// Exposes the `infos_*` free-function interface used by C and C++ analyzers.
//
// Memory management rules:
// - Opaque `WordInfos` pointer: created by `infos_new`, freed by `infos_free`.
// - Normal forms handed to `infos_prepend_word` must come from `infos_form_new`.
//   On success the buffer owns the form and releases it on erase/free.
//   On failure the caller still owns it and frees it with `infos_form_free`.
// - Normal forms returned by `infos_get_normal_form` are borrowed; they stay
//   valid until the next `infos_erase` or `infos_free` on the same buffer.
// - All strings are UTF-8 (or at least NUL-free byte) C strings.
//
// Error reporting: there is no error channel besides return values. A NULL
// handle or an out-of-range index yields the sentinel documented per function.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use wordinfos_core::{GrammarId, WordInfos as CoreWordInfos};

/// Buffer type behind the opaque `struct WordInfos *` handle.
pub type WordInfos = CoreWordInfos<CString>;

/// Returned by the id getters for a NULL handle or an out-of-range index.
pub const INFOS_INVALID_ID: GrammarId = GrammarId::MAX;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a buffer that can hold up to `max_size` entries.
///
/// Returns NULL if the storage cannot be allocated.
#[unsafe(no_mangle)]
pub extern "C" fn infos_new(max_size: u32) -> *mut WordInfos {
    match WordInfos::try_new(max_size as usize) {
        Ok(infos) => Box::into_raw(Box::new(infos)),
        Err(e) => {
            tracing::debug!(error = %e, "infos_new failed");
            ptr::null_mut()
        }
    }
}

/// Free a buffer created by `infos_new`, including every stored normal form.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_free(wi: *mut WordInfos) {
    if !wi.is_null() {
        drop(unsafe { Box::from_raw(wi) });
    }
}

/// Remove every entry and clear the prediction and overflow flags.
///
/// Normal forms are released by the buffer; callers must not free them.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_erase(wi: *mut WordInfos) {
    if let Some(infos) = unsafe { wi.as_mut() } {
        infos.erase();
    }
}

// ── Normal form allocation ──────────────────────────────────────

/// Copy a C string into a form that `infos_prepend_word` can take over.
///
/// Returns NULL if `s` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_form_new(s: *const c_char) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    unsafe { CStr::from_ptr(s) }.to_owned().into_raw()
}

/// Free a form from `infos_form_new` that was not accepted by a buffer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_form_free(form: *mut c_char) {
    if !form.is_null() {
        drop(unsafe { CString::from_raw(form) });
    }
}

// ── Insertion ───────────────────────────────────────────────────

/// Prepend a candidate; it becomes entry 0.
///
/// `form` must come from `infos_form_new`. Returns `true` if the entry was
/// added, in which case the buffer owns `form`. Returns `false` if `wi` or
/// `form` is NULL or the buffer is full; `form` then remains owned by the
/// caller. A full buffer also sets the flag read by `infos_have_prepend_error`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_prepend_word(
    wi: *mut WordInfos,
    form: *mut c_char,
    n_form_id: GrammarId,
    form_id: GrammarId,
    prediction: bool,
) -> bool {
    let Some(infos) = (unsafe { wi.as_mut() }) else {
        return false;
    };
    if form.is_null() {
        return false;
    }

    let form_ptr = form;
    let form = unsafe { CString::from_raw(form_ptr) };
    match infos.prepend_word_with_prediction(form, n_form_id, form_id, prediction) {
        Ok(()) => true,
        Err(rejected) => {
            // The caller keeps ownership of the same allocation.
            let returned = rejected.into_form().into_raw();
            debug_assert_eq!(returned, form_ptr);
            false
        }
    }
}

// ── Queries ─────────────────────────────────────────────────────

/// Whether any stored entry was obtained by prediction. `false` for NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_is_prediction(wi: *const WordInfos) -> bool {
    unsafe { wi.as_ref() }.is_some_and(WordInfos::is_prediction)
}

/// Whether a prepend was rejected since creation or the last erase.
/// `false` for NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_have_prepend_error(wi: *const WordInfos) -> bool {
    unsafe { wi.as_ref() }.is_some_and(WordInfos::has_overflowed)
}

/// Number of stored entries, or -1 for NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_get_size(wi: *const WordInfos) -> c_int {
    match unsafe { wi.as_ref() } {
        Some(infos) => c_int::try_from(infos.len()).unwrap_or(c_int::MAX),
        None => -1,
    }
}

/// Borrow the normal form of entry `id`.
///
/// Returns NULL for a NULL handle or an out-of-range index. Do NOT free the
/// returned pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_get_normal_form(wi: *const WordInfos, id: u32) -> *const c_char {
    let Some(infos) = (unsafe { wi.as_ref() }) else {
        return ptr::null();
    };
    infos
        .normal_form(id as usize)
        .map_or(ptr::null(), |form| form.as_ptr())
}

/// Grammar id of the normal form of entry `id`, or `INFOS_INVALID_ID`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_get_normal_form_id(wi: *const WordInfos, id: u32) -> GrammarId {
    let Some(infos) = (unsafe { wi.as_ref() }) else {
        return INFOS_INVALID_ID;
    };
    infos.normal_form_id(id as usize).unwrap_or(INFOS_INVALID_ID)
}

/// Grammar id of the surface form of entry `id`, or `INFOS_INVALID_ID`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn infos_get_form_id(wi: *const WordInfos, id: u32) -> GrammarId {
    let Some(infos) = (unsafe { wi.as_ref() }) else {
        return INFOS_INVALID_ID;
    };
    infos.form_id(id as usize).unwrap_or(INFOS_INVALID_ID)
}
