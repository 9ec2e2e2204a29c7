use std::path::PathBuf;

use thiserror::Error;

use crate::types::supported_formats;

/// Why a buffer was not accepted as an image.
///
/// Both variants are expected outcomes of classification, not failures of the
/// sniffer itself. The `Display` text is the reason reported to the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("File is too small to be a valid image")]
    TooSmall,

    #[error("File is not a valid image format (expected {expected})", expected = supported_formats())]
    UnrecognizedFormat,
}

impl Rejection {
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Error)]
pub enum SniffError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SniffError>;
