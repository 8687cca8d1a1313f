//! Tint task definition and derivation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::types::TintSettings;
use crate::utils::derive_output_path;

/// Represents a single file tint job: where to read, where to write, and
/// the tint parameters. Created per file during a batch pass and discarded
/// afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct TintTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path where the tinted copy will be written
    pub output_path: PathBuf,
    /// Tint parameters for this file
    pub settings: TintSettings,
}

impl TintTask {
    /// Build the task for one input file, deriving the output path from
    /// the file name and the configured suffix.
    ///
    /// Returns `None` for file names the derivation cannot handle (no
    /// stem, no extension, or non-UTF-8).
    pub fn for_file(input: &Path, output_dir: &Path, settings: &TintSettings) -> Option<Self> {
        let output_path = derive_output_path(input, output_dir, &settings.suffix)?;
        Some(Self {
            input_path: input.to_path_buf(),
            output_path,
            settings: settings.clone(),
        })
    }
}
