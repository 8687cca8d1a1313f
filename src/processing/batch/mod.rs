mod processor;

pub use processor::{BatchProcessor, BatchProgress};
