use std::path::Path;
use std::str::FromStr;

use crate::utils::error::TintError;

/// Image formats the tool reads and writes, keyed by file extension.
///
/// Selection and encoding both go through this enum: a directory entry
/// whose extension does not map to a variant is skipped, and the encoder
/// for an output file is chosen from its extension the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
}

impl ImageFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Png => &["png"],
            Self::Bmp => &["bmp"],
            Self::Gif => &["gif"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Format for a file path, `None` when the extension is missing or
    /// unsupported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_str(ext).ok()
    }

    /// The matching encoder format in the `image` crate.
    pub fn encoder_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Gif => image::ImageFormat::Gif,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = TintError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "bmp" => Ok(Self::Bmp),
            "gif" => Ok(Self::Gif),
            _ => Err(TintError::config(format!(
                "unsupported image format: {ext}"
            ))),
        }
    }
}
