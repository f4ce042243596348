use std::ffi::NulError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("failed to create engine handle")]
    CreateFailed,

    #[error("engine initialization failed with status {0}")]
    InitFailed(i32),

    #[error("invalid engine mode value: {0}")]
    InvalidMode(u32),

    #[error("engine rejected variable '{0}'")]
    VariableRejected(String),

    #[error("string contains an interior nul byte: {0}")]
    Nul(#[from] NulError),

    #[error("config file path is not representable at the C boundary: {0:?}")]
    ConfigPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, OcrError>;
