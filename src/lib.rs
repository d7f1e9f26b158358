//! # bib2html
//!
//! Converts a restricted BibTeX dialect into a styled HTML publication list.
//!
//! ## Architecture
//!
//! - [`parser`]: splits the input into entries and parses `@article` fields
//! - [`models`]: segments, article records and passthrough blocks
//! - [`render`]: HTML list items and the surrounding document
//! - [`convert`]: the single forward pass tying parsing and rendering together
//! - [`utils`]: LaTeX escape translation and path handling
//! - [`config`]: configuration management
//!
//! ```rust
//! use bib2html::{convert_str, Config};
//!
//! let bib = "@article{key1,\n  author = \"A. One\",\n  year = \"2020\",\n  \
//!            title = \"A Title\",\n  journal = \"J\",\n}\n";
//! let (html, stats) = convert_str(bib, &Config::default()).unwrap();
//! assert_eq!(stats.articles, 1);
//! assert!(html.contains("<span class=\"year\">2020</span>,"));
//! ```

pub mod config;
pub mod convert;
pub mod models;
pub mod parser;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use convert::{convert, convert_str, ConversionStats, ConvertError};
pub use models::ArticleRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
