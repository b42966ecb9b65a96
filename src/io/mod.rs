//! File input and output.

pub mod reader;
pub mod writer;

pub use reader::{CatalogReader, LoadResult, LoadStatistics, LoadedCatalog};
pub use writer::{CatalogWriter, WriteOptions, WriteStatistics};
