//! Parsing of the restricted BibTeX dialect.
//!
//! The input is processed in one forward pass:
//!
//! - [`Segmenter`] groups lines into brace-balanced [`RawSegment`]s
//! - [`classify`] tags each segment as article, HTML passthrough or ignored
//! - [`parse_article`] turns an article segment into an [`ArticleRecord`]
//! - [`extract_html`] strips the markers from a passthrough segment
//!
//! ```rust
//! use bib2html::parser::{classify, parse_article, Segmenter};
//! use bib2html::models::EntryKind;
//!
//! let bib = "@article{key1,\n  author = \"A. One\",\n  year = \"2020\",\n}\n";
//! let segment = Segmenter::new(bib.as_bytes()).next().unwrap().unwrap();
//! let entry = classify(segment);
//! assert_eq!(entry.kind, EntryKind::Article);
//!
//! let record = parse_article(&entry.segment).unwrap();
//! assert_eq!(record.key, "key1");
//! assert_eq!(record.year(), Some("2020"));
//! ```
//!
//! [`RawSegment`]: crate::models::RawSegment
//! [`ArticleRecord`]: crate::models::ArticleRecord

mod article;
mod classify;
mod html;
mod segment;

pub use article::parse_article;
pub use classify::classify;
pub use html::extract_html;
pub use segment::Segmenter;

/// Errors raised while reading or parsing entries
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Reading the input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while braces were still open
    #[error("Unterminated entry starting at line {line}: {depth} unclosed brace(s) at end of input")]
    UnterminatedEntry { line: usize, depth: i64 },

    /// A closing brace with no matching opening brace
    #[error("Unbalanced closing brace at line {line}")]
    UnbalancedBraces { line: usize },

    /// The opening line of an article carries no key
    #[error("Article at line {line} has no key")]
    MissingKey { line: usize },

    /// A line inside an article that is neither a field nor the final brace
    #[error("Article {key}: expected a field or a single closing brace, found {line:?}")]
    UnexpectedLine { key: String, line: String },

    /// A field value that runs past the end of its entry
    #[error("Article {key}: field {field} is not terminated")]
    UnterminatedField { key: String, field: String },
}
