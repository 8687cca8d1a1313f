// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;
pub mod worker;

// Public exports for external consumers
pub use crate::core::{parse_hex_color, BatchSummary, TintConfig, TintRecord, TintSettings, TintTask};
pub use crate::processing::{tint_image, BatchProcessor, BatchProgress};
pub use crate::utils::{ImageFormat, TintError, TintResult};
pub use crate::worker::WorkerPool;
