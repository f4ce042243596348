//! Engine initialization configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::OcrError;
use crate::ffi::TessOcrEngineMode;

/// Where the engine finds its language model data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelSource {
    /// Let the engine search its default data path.
    SearchPath,
    /// Hand the engine an in-memory traineddata blob.
    Memory(Vec<u8>),
}

/// Recognition strategy selector.
///
/// The integer layout mirrors the engine's native enum ordinals; the raw
/// bridge passes caller-supplied integers through unchecked, while this type
/// is the checked representation for Rust callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum EngineMode {
    /// Legacy character classifier only.
    Legacy = 0,
    /// Neural-net LSTM recognizer only.
    LstmOnly = 1,
    /// Both recognizers, combined output.
    LegacyLstmCombined = 2,
    /// Whatever the loaded model declares as its default.
    Default = 3,
}

impl EngineMode {
    pub(crate) fn as_raw(self) -> TessOcrEngineMode {
        self as TessOcrEngineMode
    }
}

impl TryFrom<u32> for EngineMode {
    type Error = OcrError;

    fn try_from(value: u32) -> Result<Self, OcrError> {
        match value {
            0 => Ok(Self::Legacy),
            1 => Ok(Self::LstmOnly),
            2 => Ok(Self::LegacyLstmCombined),
            3 => Ok(Self::Default),
            other => Err(OcrError::InvalidMode(other)),
        }
    }
}

/// Everything the engine consumes at initialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Language selector (e.g. "eng", "eng+deu"); `None` lets the engine
    /// fall back to its built-in default.
    pub language: Option<String>,

    /// Model data source.
    pub model: ModelSource,

    /// Recognition strategy.
    pub mode: EngineMode,

    /// Config files applied during initialization, in order.
    pub config_files: Vec<PathBuf>,

    /// When set, config variables flagged as debug-only are ignored.
    pub set_only_non_debug_params: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: None,
            model: ModelSource::SearchPath,
            mode: EngineMode::Default,
            config_files: Vec::new(),
            set_only_non_debug_params: false,
        }
    }
}

impl EngineConfig {
    /// Default configuration for a specific language tag.
    pub fn with_language(tag: &str) -> Self {
        Self {
            language: Some(tag.to_string()),
            ..Self::default()
        }
    }
}
