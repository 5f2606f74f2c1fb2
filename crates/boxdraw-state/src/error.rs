// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Ser(#[from] postcard::Error),

    #[error("frame too large")]
    FrameTooLarge,

    #[error("state version mismatch (file {file}, supported {supported})")]
    VersionMismatch { file: u32, supported: u32 },

    #[error("{key}: expected 4 floats, got {len}")]
    MalformedBox { key: String, len: usize },

    #[error("{key} missing (state declares {count} boxes)")]
    MissingBox { key: String, count: u32 },

    #[error("{key}: unexpected value type (expected {expected})")]
    WrongValueType { key: String, expected: &'static str },
}
