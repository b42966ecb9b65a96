//! Reading and writing the textual catalog format.
//!
//! - [`parser`]: text to [`Catalog`](crate::catalog::Catalog)
//! - [`serializer`]: [`Catalog`](crate::catalog::Catalog) to text, with wrapping
//! - [`escape`]: quoted-string escapes shared by both directions

pub mod escape;
pub mod parser;
pub mod serializer;

pub use parser::parse_catalog;
pub use serializer::{DEFAULT_WIDTH, Serializer, WrapOptions, serialize_catalog};
