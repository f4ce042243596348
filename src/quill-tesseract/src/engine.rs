//! Safe wrapper around a Tesseract engine handle.
//!
//! Owns handle creation and teardown and funnels initialization through the
//! same C-ABI path exported to foreign callers.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr::{self, NonNull};

use tracing::{debug, warn};

use crate::bridge::TessBaseAPI_CustomInitStub;
use crate::config::{EngineConfig, EngineMode, ModelSource};
use crate::error::{OcrError, Result};
use crate::ffi::{self, TessBaseApi};

/// An owned, initialized Tesseract engine instance.
///
/// The handle is exclusively owned. The engine is not reentrant, so the
/// wrapper hands out no aliasing access and is deliberately not `Sync`;
/// callers wanting parallel initialization use one `Engine` per thread.
pub struct Engine {
    handle: NonNull<TessBaseApi>,
}

impl Engine {
    /// Create an engine handle and initialize it from `config`.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        debug!("creating engine handle");
        let raw = unsafe { ffi::TessBaseAPICreate() };
        let handle = NonNull::new(raw).ok_or(OcrError::CreateFailed)?;
        let mut engine = Self { handle };
        engine.init(config)?;
        Ok(engine)
    }

    /// Engine with entirely default initialization.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&EngineConfig::default())
    }

    /// Engine for a specific language tag (e.g. "eng", "eng+fra").
    pub fn with_language(tag: &str) -> Result<Self> {
        Self::new(&EngineConfig::with_language(tag))
    }

    /// Re-run initialization on the live handle.
    ///
    /// The engine treats this as a full re-initialization: the outcome
    /// reflects only `config`, not any earlier state.
    pub fn reinit(&mut self, config: &EngineConfig) -> Result<()> {
        self.init(config)
    }

    fn init(&mut self, config: &EngineConfig) -> Result<()> {
        let language = match &config.language {
            Some(tag) => Some(CString::new(tag.as_str())?),
            None => None,
        };
        let language_ptr = language.as_ref().map_or(ptr::null(), |tag| tag.as_ptr());

        let (data_ptr, data_size) = match &config.model {
            ModelSource::SearchPath => (ptr::null(), 0),
            ModelSource::Memory(blob) => {
                (blob.as_ptr() as *const c_char, blob.len() as c_int)
            }
        };

        // The engine does not retain the config strings; they only have to
        // outlive the call itself.
        let config_files = config
            .config_files
            .iter()
            .map(|path| {
                let path_str = path
                    .to_str()
                    .ok_or_else(|| OcrError::ConfigPath(path.clone()))?;
                Ok(CString::new(path_str)?)
            })
            .collect::<Result<Vec<CString>>>()?;
        let mut config_ptrs: Vec<*mut c_char> = config_files
            .iter()
            .map(|file| file.as_ptr() as *mut c_char)
            .collect();
        let configs_ptr = if config_ptrs.is_empty() {
            ptr::null_mut()
        } else {
            config_ptrs.as_mut_ptr()
        };

        debug!(
            language = config.language.as_deref().unwrap_or("<engine default>"),
            mode = config.mode.as_raw(),
            config_files = config.config_files.len(),
            "initializing engine"
        );

        let status = unsafe {
            TessBaseAPI_CustomInitStub(
                self.handle.as_ptr().cast(),
                data_ptr,
                data_size,
                language_ptr,
                config.mode.as_raw(),
                configs_ptr,
                config_ptrs.len() as c_int,
                config.set_only_non_debug_params,
            )
        };
        if status != 0 {
            warn!(status, "engine initialization failed");
            return Err(OcrError::InitFailed(status));
        }
        Ok(())
    }

    /// Set an engine variable on the initialized handle.
    pub fn set_variable(&mut self, name: &str, value: &str) -> Result<()> {
        let c_name = CString::new(name)?;
        let c_value = CString::new(value)?;
        let accepted = unsafe {
            ffi::TessBaseAPISetVariable(self.handle.as_ptr(), c_name.as_ptr(), c_value.as_ptr())
        };
        if accepted == ffi::TESS_FALSE {
            return Err(OcrError::VariableRejected(name.to_string()));
        }
        Ok(())
    }

    /// Read back an integer variable, if the engine knows it.
    pub fn int_variable(&self, name: &str) -> Result<Option<i32>> {
        let c_name = CString::new(name)?;
        let mut value: c_int = 0;
        let found = unsafe {
            ffi::TessBaseAPIGetIntVariable(self.handle.as_ptr(), c_name.as_ptr(), &mut value)
        };
        Ok((found == ffi::TESS_TRUE).then_some(value))
    }

    /// The languages the handle was last initialized with, as the engine
    /// reports them.
    pub fn init_languages(&self) -> String {
        let raw = unsafe { ffi::TessBaseAPIGetInitLanguagesAsString(self.handle.as_ptr()) };
        if raw.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
    }

    /// The recognition mode the handle is currently using.
    pub fn mode(&self) -> Result<EngineMode> {
        let raw = unsafe { ffi::TessBaseAPIOem(self.handle.as_ptr()) };
        EngineMode::try_from(raw)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        unsafe { ffi::TessBaseAPIDelete(self.handle.as_ptr()) };
    }
}
