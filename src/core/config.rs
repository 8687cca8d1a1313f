//! Run configuration with documented defaults.
//!
//! Everything the original tool hardcoded lives here as an explicit
//! structure: directories, tint color, blend strength, output suffix.
//! Values come from CLI flags, an optional JSON config file, or the
//! defaults, in that order of precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::TintSettings;
use crate::utils::{TintError, TintResult};

/// Default input directory name (sic).
pub const DEFAULT_INPUT_DIR: &str = "sourses";
/// Default output directory name.
pub const DEFAULT_OUTPUT_DIR: &str = "output_red_tint";

const DEFAULT_WORKERS: usize = 4;

/// Full configuration for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TintConfig {
    /// Directory scanned for image files (non-recursive)
    pub input_dir: PathBuf,
    /// Directory tinted copies are written to; created if absent
    pub output_dir: PathBuf,
    /// Tint parameters applied to every file
    pub settings: TintSettings,
    /// Number of files processed concurrently; 1 is strictly sequential
    pub workers: usize,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            settings: TintSettings::default(),
            workers: DEFAULT_WORKERS,
        }
    }
}

impl TintConfig {
    /// Load a configuration from a JSON file. Missing fields fall back to
    /// the defaults.
    pub fn from_file(path: &Path) -> TintResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| TintError::io(path, e))?;
        serde_json::from_str(&data).map_err(|e| {
            TintError::config(format!("invalid config file {}: {e}", path.display()))
        })
    }

    /// Clamp the blend strength into [0.0, 1.0].
    ///
    /// The interpolation itself stays defined for out-of-range values;
    /// batch runs treat the configured strength as a blend fraction.
    pub fn normalize(&mut self) {
        let strength = self.settings.strength;
        if !(0.0..=1.0).contains(&strength) {
            let clamped = strength.clamp(0.0, 1.0);
            warn!("strength {strength} is outside [0, 1], clamping to {clamped}");
            self.settings.strength = clamped;
        }
    }
}

/// Parse an `RRGGBB` hex string into an RGB triple.
pub fn parse_hex_color(color: &str) -> TintResult<[u8; 3]> {
    if color.len() != 6 || !color.is_ascii() {
        return Err(TintError::config(format!(
            "color must be 6 hex digits (RRGGBB), got '{color}'"
        )));
    }

    let mut buf = [0u8; 3];
    for (i, channel) in buf.iter_mut().enumerate() {
        let idx = i * 2;
        *channel = u8::from_str_radix(&color[idx..(idx + 2)], 16).map_err(|e| {
            TintError::config(format!("invalid hex color '{color}': {e}"))
        })?;
    }

    Ok(buf)
}
