//! Core types for tint settings and batch results.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::task::TintTask;

/// Tint parameters applied uniformly to every file in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TintSettings {
    /// Tint color as an RGB triple
    pub color: [u8; 3],
    /// Blend strength: 0.0 keeps the original, 1.0 is the solid tint color
    pub strength: f32,
    /// Suffix inserted before the extension of each output file name
    pub suffix: String,
}

impl Default for TintSettings {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            strength: 0.3,
            suffix: "redtint".to_string(),
        }
    }
}

/// Outcome of tinting a single file.
///
/// A failed file is a record with `success == false`, never an error that
/// crosses the batch boundary.
#[derive(Debug, Clone, Serialize)]
pub struct TintRecord {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path the tinted copy was written to (or would have been)
    pub output_path: PathBuf,
    /// Whether the file was tinted and written
    pub success: bool,
    /// Error message if processing failed
    pub error: Option<String>,
}

impl TintRecord {
    pub fn success(task: &TintTask) -> Self {
        Self {
            input_path: task.input_path.clone(),
            output_path: task.output_path.clone(),
            success: true,
            error: None,
        }
    }

    pub fn failure(task: &TintTask, error: impl Into<String>) -> Self {
        Self {
            input_path: task.input_path.clone(),
            output_path: task.output_path.clone(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Totals for one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Number of files selected for processing
    pub total: usize,
    /// Number of files tinted and written
    pub succeeded: usize,
    /// Failed files as (path, error message) pairs
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            succeeded: 0,
            failed: Vec::new(),
        }
    }
}
