pub mod error;
pub mod formats;
pub mod fs;

pub use error::{TintError, TintResult};
pub use formats::ImageFormat;
pub use fs::{derive_output_path, ensure_dir, scan_input_dir};
