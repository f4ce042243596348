//! quill-tesseract - Tesseract engine bridge for Quill
//!
//! Exposes the C-ABI initialization entry point that foreign callers link
//! against, plus a safe Rust wrapper that owns an engine handle and funnels
//! initialization through the same path. The engine library itself is an
//! external collaborator reached through its C API; this crate performs no
//! OCR of its own.

mod bridge;
mod config;
mod engine;
mod error;
pub mod ffi;

#[cfg(test)]
mod fake_engine;

pub use bridge::TessBaseAPI_CustomInitStub;
pub use config::{EngineConfig, EngineMode, ModelSource};
pub use engine::Engine;
pub use error::{OcrError, Result};

/// Initialize an engine with default settings.
pub fn create_engine() -> Result<Engine> {
    Engine::with_defaults()
}

/// Initialize an engine for a specific language tag (e.g. "eng", "eng+deu").
pub fn create_engine_with_language(tag: &str) -> Result<Engine> {
    Engine::with_language(tag)
}
