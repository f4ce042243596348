//! C-ABI initialization bridge.
//!
//! Foreign callers hold the engine handle as an untyped pointer and the
//! operating mode as a plain integer; this entry point reinterprets both and
//! forwards to the engine's own initialization routine. It is a pure
//! conduit: no allocation, no I/O, no logging, no status translation.

use std::ffi::c_void;
use std::os::raw::{c_char, c_int};
use std::ptr;

use crate::ffi::{self, TessBaseApi, TessOcrEngineMode};

/// Initialize a live engine handle across the C ABI.
///
/// `handle` must have been produced by `TessBaseAPICreate` and not yet
/// destroyed. `mode` is reinterpreted bit-for-bit into the engine's mode
/// enum with no range check. `data` either points at an in-memory
/// traineddata blob of `data_size` bytes or is null, in which case the
/// engine loads from its default search path. Ownership of every pointer
/// stays with the caller; nothing is retained past return.
///
/// Returns the engine's own status code unchanged. Zero is success; every
/// non-zero value is an engine-defined failure.
///
/// The underlying routine's variable-vector parameters are fixed to null
/// here. The parameter order and widths of this signature are relied upon by
/// existing foreign callers and must not change.
///
/// # Safety
///
/// Undefined behavior if `handle` is not a live engine instance, if `data`
/// does not cover `data_size` bytes, if `configs` does not cover
/// `configs_size` entries, or if any string is not NUL-terminated.
/// Concurrent calls on the same handle must be serialized by the caller;
/// calls on distinct handles are independent.
#[allow(non_snake_case)]
#[no_mangle]
pub unsafe extern "C" fn TessBaseAPI_CustomInitStub(
    handle: *mut c_void,
    data: *const c_char,
    data_size: c_int,
    language: *const c_char,
    mode: u32,
    configs: *mut *mut c_char,
    configs_size: c_int,
    set_only_non_debug_params: bool,
) -> c_int {
    let handle = handle as *mut TessBaseApi;
    let mode = mode as TessOcrEngineMode;
    ffi::TessBaseAPIInit5(
        handle,
        data,
        data_size,
        language,
        mode,
        configs,
        configs_size,
        ptr::null_mut(),
        ptr::null_mut(),
        0,
        if set_only_non_debug_params {
            ffi::TESS_TRUE
        } else {
            ffi::TESS_FALSE
        },
    )
}
