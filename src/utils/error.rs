//! Error types for the tint tool.
//!
//! Provides a closed hierarchy using `thiserror`. Only [`TintError::Config`]
//! is fatal to a batch; decode, encode and IO failures are recovered per
//! file by the batch driver.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tint tool.
#[derive(Error, Debug)]
pub enum TintError {
    /// Invalid configuration: missing input directory, malformed color,
    /// unreadable config file. Nothing is processed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A selected file could not be parsed as an image.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Encoding the tinted image failed.
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// IO error reading or writing a path.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience result type for tint operations.
pub type TintResult<T> = Result<T, TintError>;

// Helper methods for error creation
impl TintError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
