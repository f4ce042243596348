//! In-process stand-in for the engine's C API, linked only into test builds.
//!
//! Mirrors the engine's observable failure categories closely enough to
//! exercise the bridge: unsupported languages, unusable model blobs, and
//! unreadable config files all fail initialization with a non-zero status,
//! and re-initialization starts from a clean slate. Variable names
//! containing "debug" are treated as debug-only, matching the engine's
//! naming convention for such parameters.

#![allow(non_snake_case)]

use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::fs;
use std::os::raw::{c_char, c_int};
use std::slice;

use crate::ffi::{TessBaseApi, TessBool, TessOcrEngineMode, TESS_FALSE, TESS_TRUE};

const KNOWN_VARIABLES: &[&str] = &[
    "user_defined_dpi",
    "classify_bln_numeric_mode",
    "classify_debug_level",
    "paragraph_debug_level",
    "tessedit_char_whitelist",
    "tessedit_char_blacklist",
];

const SUPPORTED_LANGUAGES: &[&str] = &["eng", "deu", "fra", "jpn"];

#[derive(Default)]
struct FakeEngine {
    languages: CString,
    mode: TessOcrEngineMode,
    variables: HashMap<String, String>,
}

impl FakeEngine {
    fn apply_config_file(&mut self, path: &str, only_non_debug: bool) -> bool {
        let Ok(text) = fs::read_to_string(path) else {
            return false;
        };
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, char::is_whitespace);
            let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
                return false;
            };
            if !KNOWN_VARIABLES.contains(&name) {
                continue;
            }
            if only_non_debug && name.contains("debug") {
                continue;
            }
            self.variables
                .insert(name.to_string(), value.trim().to_string());
        }
        true
    }
}

unsafe fn engine_mut<'a>(handle: *mut TessBaseApi) -> &'a mut FakeEngine {
    &mut *(handle as *mut FakeEngine)
}

unsafe fn engine_ref<'a>(handle: *const TessBaseApi) -> &'a FakeEngine {
    &*(handle as *const FakeEngine)
}

#[no_mangle]
extern "C" fn TessBaseAPICreate() -> *mut TessBaseApi {
    Box::into_raw(Box::new(FakeEngine::default())) as *mut TessBaseApi
}

#[no_mangle]
unsafe extern "C" fn TessBaseAPIDelete(handle: *mut TessBaseApi) {
    drop(Box::from_raw(handle as *mut FakeEngine));
}

#[no_mangle]
unsafe extern "C" fn TessBaseAPIInit5(
    handle: *mut TessBaseApi,
    data: *const c_char,
    data_size: c_int,
    language: *const c_char,
    mode: TessOcrEngineMode,
    configs: *mut *mut c_char,
    configs_size: c_int,
    _vars_vec: *mut *mut c_char,
    _vars_values: *mut *mut c_char,
    _vars_vec_size: usize,
    set_only_non_debug_params: TessBool,
) -> c_int {
    let engine = engine_mut(handle);

    // Re-initialization discards everything from earlier calls.
    engine.variables.clear();
    engine.languages = CString::default();

    if !data.is_null() {
        if data_size <= 0 {
            return -1;
        }
        // Touch the blob the way the engine would while parsing it.
        let blob = slice::from_raw_parts(data as *const u8, data_size as usize);
        let _ = blob.iter().fold(0u8, |acc, byte| acc.wrapping_add(*byte));
    }

    let languages = if language.is_null() {
        "eng".to_string()
    } else {
        match CStr::from_ptr(language).to_str() {
            Ok(tag) => tag.to_string(),
            Err(_) => return -1,
        }
    };
    if languages
        .split('+')
        .any(|tag| !SUPPORTED_LANGUAGES.contains(&tag))
    {
        return -1;
    }

    // A real engine leaves out-of-range modes undefined; the fake bounds
    // them so misuse in tests stays observable instead of corrupting state.
    if mode > 3 {
        return -1;
    }

    let only_non_debug = set_only_non_debug_params != TESS_FALSE;
    if configs_size > 0 {
        if configs.is_null() {
            return -1;
        }
        for i in 0..configs_size as usize {
            let entry = *configs.add(i);
            if entry.is_null() {
                return -1;
            }
            let Ok(path) = CStr::from_ptr(entry).to_str() else {
                return -1;
            };
            if !engine.apply_config_file(path, only_non_debug) {
                return -1;
            }
        }
    }

    engine.languages = CString::new(languages).expect("language tag has no interior nul");
    engine.mode = mode;
    0
}

#[no_mangle]
unsafe extern "C" fn TessBaseAPISetVariable(
    handle: *mut TessBaseApi,
    name: *const c_char,
    value: *const c_char,
) -> TessBool {
    let engine = engine_mut(handle);
    let (Ok(name), Ok(value)) = (CStr::from_ptr(name).to_str(), CStr::from_ptr(value).to_str())
    else {
        return TESS_FALSE;
    };
    if !KNOWN_VARIABLES.contains(&name) {
        return TESS_FALSE;
    }
    engine.variables.insert(name.to_string(), value.to_string());
    TESS_TRUE
}

#[no_mangle]
unsafe extern "C" fn TessBaseAPIGetIntVariable(
    handle: *const TessBaseApi,
    name: *const c_char,
    value: *mut c_int,
) -> TessBool {
    let engine = engine_ref(handle);
    let Ok(name) = CStr::from_ptr(name).to_str() else {
        return TESS_FALSE;
    };
    match engine
        .variables
        .get(name)
        .and_then(|stored| stored.parse::<c_int>().ok())
    {
        Some(parsed) => {
            *value = parsed;
            TESS_TRUE
        }
        None => TESS_FALSE,
    }
}

#[no_mangle]
unsafe extern "C" fn TessBaseAPIGetInitLanguagesAsString(
    handle: *const TessBaseApi,
) -> *const c_char {
    engine_ref(handle).languages.as_ptr()
}

#[no_mangle]
unsafe extern "C" fn TessBaseAPIOem(handle: *const TessBaseApi) -> TessOcrEngineMode {
    engine_ref(handle).mode
}
