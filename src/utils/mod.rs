//! Utility modules supporting the conversion.
//!
//! - [`latex`]: translation of LaTeX escapes and macros into Unicode and HTML
//! - [`paths`]: input extension checks and default output paths
//!
//! ```rust
//! use bib2html::utils::untex;
//!
//! assert_eq!(untex(r"\emph{Homo sapiens} at 4$^{\circ}$"), "<i>Homo sapiens</i> at 4°");
//! ```

pub mod latex;
pub mod paths;

pub use latex::{unescape_ampersand, untex};
pub use paths::{check_extension, open_input, resolve_output_path, PathError};
