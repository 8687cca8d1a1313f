mod batch;
mod io;
mod tint;

pub use batch::{BatchProcessor, BatchProgress};
pub use io::{load_image, save_image};
pub use tint::tint_image;
