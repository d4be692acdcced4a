// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per function.
#![allow(clippy::missing_safety_doc)]

// metaphone-ffi: C-compatible FFI layer for the Metaphone 3 engine.
//
// Memory management rules:
// - Opaque `MetaphoneHandle` pointer: created by `metaphone_new`, freed by
//   `metaphone_free`.
// - Returned strings: caller must free with `metaphone_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
//
// A handle is not thread-safe; use one handle per thread.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use metaphone_core::EncoderOptions;
use metaphone3::Metaphone3;

/// Opaque engine handle.
pub struct MetaphoneHandle {
    engine: Metaphone3,
}

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new engine.
///
/// Non-zero `encode_vowels` / `encode_exact` switch the options on.
/// A `max_length` of zero or below selects the default length.
#[unsafe(no_mangle)]
pub extern "C" fn metaphone_new(
    encode_vowels: c_int,
    encode_exact: c_int,
    max_length: c_int,
) -> *mut MetaphoneHandle {
    let options = EncoderOptions::new()
        .with_encode_vowels(encode_vowels != 0)
        .with_encode_exact(encode_exact != 0)
        .with_signed_max_length(i64::from(max_length));
    Box::into_raw(Box::new(MetaphoneHandle {
        engine: Metaphone3::new(options),
    }))
}

/// Free a handle created by `metaphone_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_free(handle: *mut MetaphoneHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Options ─────────────────────────────────────────────────────

/// Set one option by name, e.g. `("max_length", "6")`.
///
/// Returns 0 on success, -1 on failure. On failure, if `error_out` is
/// non-NULL, it receives an error string that the caller must free with
/// `metaphone_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_set_option(
    handle: *mut MetaphoneHandle,
    name: *const c_char,
    value: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        set_error(error_out, "handle is null");
        return -1;
    };
    let (Some(name), Some(value)) = (cstr_to_str(name), cstr_to_str(value)) else {
        set_error(error_out, "option name or value is null or not UTF-8");
        return -1;
    };
    match handle.engine.set_option(name, value) {
        Ok(()) => 0,
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

macro_rules! bool_setter {
    ($name:ident, $method:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(handle: *mut MetaphoneHandle, value: c_int) {
            if let Some(handle) = unsafe { handle.as_mut() } {
                let options = handle.engine.options().$method(value != 0);
                handle.engine.set_options(options);
            }
        }
    };
}

bool_setter!(metaphone_set_encode_vowels, with_encode_vowels);
bool_setter!(metaphone_set_encode_exact, with_encode_exact);

#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_set_max_length(handle: *mut MetaphoneHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        let options = handle.engine.options().with_signed_max_length(i64::from(value));
        handle.engine.set_options(options);
    }
}

// ── Encoding ────────────────────────────────────────────────────

/// Encode a word.
///
/// On success writes heap-allocated C strings to `primary_out` and
/// `secondary_out` (either may be NULL to skip it) and returns 0. The
/// secondary code is the empty string when it equals the primary. The
/// caller must free both with `metaphone_free_str`. Returns -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_encode(
    handle: *mut MetaphoneHandle,
    word: *const c_char,
    primary_out: *mut *mut c_char,
    secondary_out: *mut *mut c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    let encoding = handle.engine.encode(word);
    if !primary_out.is_null() {
        unsafe { *primary_out = str_to_c(&encoding.primary) };
    }
    if !secondary_out.is_null() {
        unsafe { *secondary_out = str_to_c(&encoding.secondary) };
    }
    0
}

/// Return the primary code of a word.
///
/// Returns a heap-allocated C string. Caller must free with
/// `metaphone_free_str`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_primary(
    handle: *mut MetaphoneHandle,
    word: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.engine.encode(word).primary)
}

/// Check whether two words share a code.
/// Returns 1 when they do, 0 when they don't, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_sounds_like(
    handle: *mut MetaphoneHandle,
    a: *const c_char,
    b: *const c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    let (Some(a), Some(b)) = (cstr_to_str(a), cstr_to_str(b)) else {
        return -1;
    };
    let a = handle.engine.encode(a);
    let b = handle.engine.encode(b);
    if a.sounds_like(&b) { 1 } else { 0 }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is static. Do NOT free it.
#[unsafe(no_mangle)]
pub extern "C" fn metaphone_version() -> *const c_char {
    static VERSION: &CStr = match CStr::from_bytes_with_nul(
        concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes(),
    ) {
        Ok(v) => v,
        Err(_) => c"",
    };
    VERSION.as_ptr()
}

/// Free a string returned by this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}
