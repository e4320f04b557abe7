//! Dataset loading and descriptor inference.

mod infer;
mod loader;

pub use infer::infer_columns;
pub use loader::{Loader, LoaderConfig};
