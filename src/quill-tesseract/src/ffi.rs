//! Raw declarations for the Tesseract C API surface this crate touches.
//!
//! The engine library is supplied by the final link; nothing here is
//! implemented on the Rust side outside of test builds, where
//! `crate::fake_engine` provides the symbols.

#![allow(non_snake_case)]

use std::os::raw::{c_char, c_int, c_uint};

/// Opaque Tesseract engine handle (`TessBaseAPI` in the C API).
///
/// Created and destroyed through the engine's own routines; this crate only
/// ever borrows it across single calls.
#[repr(C)]
pub struct TessBaseApi {
    _private: [u8; 0],
}

/// Native engine-mode enumeration (`TessOcrEngineMode`).
///
/// The integer layout must match the engine's enum ordinals exactly.
pub type TessOcrEngineMode = c_uint;

/// Legacy character classifier only.
pub const OEM_TESSERACT_ONLY: TessOcrEngineMode = 0;
/// Neural-net LSTM recognizer only.
pub const OEM_LSTM_ONLY: TessOcrEngineMode = 1;
/// Both recognizers, combined output.
pub const OEM_TESSERACT_LSTM_COMBINED: TessOcrEngineMode = 2;
/// Whatever the loaded model declares as its default.
pub const OEM_DEFAULT: TessOcrEngineMode = 3;

/// C-style boolean as used by the Tesseract C API.
pub type TessBool = c_int;

pub const TESS_TRUE: TessBool = 1;
pub const TESS_FALSE: TessBool = 0;

extern "C" {
    pub fn TessBaseAPICreate() -> *mut TessBaseApi;

    pub fn TessBaseAPIDelete(handle: *mut TessBaseApi);

    pub fn TessBaseAPIInit5(
        handle: *mut TessBaseApi,
        data: *const c_char,
        data_size: c_int,
        language: *const c_char,
        mode: TessOcrEngineMode,
        configs: *mut *mut c_char,
        configs_size: c_int,
        vars_vec: *mut *mut c_char,
        vars_values: *mut *mut c_char,
        vars_vec_size: usize,
        set_only_non_debug_params: TessBool,
    ) -> c_int;

    pub fn TessBaseAPISetVariable(
        handle: *mut TessBaseApi,
        name: *const c_char,
        value: *const c_char,
    ) -> TessBool;

    pub fn TessBaseAPIGetIntVariable(
        handle: *const TessBaseApi,
        name: *const c_char,
        value: *mut c_int,
    ) -> TessBool;

    pub fn TessBaseAPIGetInitLanguagesAsString(handle: *const TessBaseApi) -> *const c_char;

    pub fn TessBaseAPIOem(handle: *const TessBaseApi) -> TessOcrEngineMode;
}
