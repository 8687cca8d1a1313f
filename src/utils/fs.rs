use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::utils::error::{TintError, TintResult};
use crate::utils::formats::ImageFormat;

/// List the image files in the immediate entries of `dir`.
///
/// Non-recursive. Subdirectories and files with missing or unsupported
/// extensions are skipped, not reported as errors. No ordering is
/// guaranteed beyond what the filesystem enumeration yields.
pub fn scan_input_dir(dir: &Path) -> TintResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| TintError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TintError::io(dir, e))?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(|e| TintError::io(&path, e))?;
        if !file_type.is_file() {
            debug!("skipping {}: not a regular file", path.display());
            continue;
        }

        if ImageFormat::from_path(&path).is_none() {
            debug!("skipping {}: unsupported extension", path.display());
            continue;
        }

        files.push(path);
    }

    Ok(files)
}

/// Derive the output path for an input file: `name.ext` becomes
/// `name_<suffix>.ext` under `output_dir`, preserving the extension
/// spelling of the input.
///
/// Returns `None` when the file name has no stem or extension, or is not
/// valid UTF-8.
pub fn derive_output_path(input: &Path, output_dir: &Path, suffix: &str) -> Option<PathBuf> {
    let stem = input.file_stem()?.to_str()?;
    let ext = input.extension()?.to_str()?;
    Some(output_dir.join(format!("{stem}_{suffix}.{ext}")))
}

/// Create a directory and any missing parents.
pub fn ensure_dir(path: &Path) -> TintResult<()> {
    fs::create_dir_all(path).map_err(|e| TintError::io(path, e))
}
