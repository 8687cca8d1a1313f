//! Image decode and atomic encode.

use std::path::Path;

use image::{DynamicImage, RgbImage};
use tempfile::NamedTempFile;

use crate::utils::{ImageFormat, TintError, TintResult};

/// Decode an image file. The format is detected by the decoder itself,
/// not by the extension.
pub fn load_image(path: &Path) -> TintResult<DynamicImage> {
    image::open(path).map_err(|source| TintError::decode(path, source))
}

/// Encode an image to `path`, choosing the encoder from the destination
/// extension (case-insensitive).
///
/// The bytes are written to a temporary file in the destination directory
/// and renamed into place, so a failed or interrupted encode never leaves
/// a partial file at the destination.
pub fn save_image(image: &RgbImage, path: &Path) -> TintResult<()> {
    let format = ImageFormat::from_path(path).ok_or_else(|| {
        TintError::config(format!(
            "output path has no supported extension: {}",
            path.display()
        ))
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| TintError::io(dir, e))?;
    image
        .write_to(tmp.as_file_mut(), format.encoder_format())
        .map_err(|source| TintError::encode(path, source))?;

    tmp.persist(path)
        .map(|_| ())
        .map_err(|e| TintError::io(path, e.error))
}
