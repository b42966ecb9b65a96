//! pocat - Concatenate gettext message catalogs into a single catalog.
//!
//! This library merges `.po` catalogs the way `msgcat` does:
//!
//! - Catalog parsing with line-accurate errors
//! - First-occurrence-wins deduplication of entries and headers
//! - Ordering by merge order, by identity, or by source location
//! - Comment, entry and header filtering
//! - Canonical serialization with configurable line wrapping
//! - Parallel file loading
//!
//! # Examples
//!
//! ## Merging catalog texts
//!
//! ```
//! use pocat::config::MergeOptions;
//! use pocat::merge::{self, SortOrder};
//!
//! let a = "msgid \"b\"\nmsgstr \"\"\n";
//! let b = "msgid \"a\"\nmsgstr \"\"\n";
//!
//! let options = MergeOptions {
//!     order: SortOrder::ByIdentity,
//!     ..MergeOptions::default()
//! };
//! let merged = merge::merge(&[a, b], &options).unwrap();
//! assert_eq!(merged, "msgid \"a\"\nmsgstr \"\"\n\nmsgid \"b\"\nmsgstr \"\"\n");
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pocat::config::MergeOptions;
//! use pocat::io::{CatalogReader, CatalogWriter};
//! use pocat::merge;
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = vec![PathBuf::from("ja.po"), PathBuf::from("ja-extra.po")];
//! let (loaded, _stats) = CatalogReader::new().load_catalogs(&paths, 4).await?;
//!
//! let catalogs = loaded.into_iter().map(|l| l.catalog).collect();
//! let output = merge::merge_catalogs(catalogs, &MergeOptions::default());
//!
//! CatalogWriter::new().save(&output.text, Path::new("merged.po")).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod po;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use catalog::{Catalog, Entry};
pub use config::{Config, MergeOptions};
pub use error::{ParseError, PoCatError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
