//! Entry models produced while scanning a bibliography file.

use std::collections::BTreeMap;
use std::fmt;

/// One brace-balanced group of source lines
///
/// Lines are right-trimmed and never blank. Across all lines the number of
/// `{` equals the number of `}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment {
    /// 1-based line number of the first line in the input
    pub start_line: usize,

    /// The lines of the segment, in input order
    pub lines: Vec<String>,
}

impl RawSegment {
    /// Create a segment from its lines
    pub fn new(start_line: usize, lines: Vec<String>) -> Self {
        Self { start_line, lines }
    }

    /// The first line, if any
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

/// What a segment holds, decided from the leading token of its first line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// `@article{key,`
    Article,
    /// `@comment{html, ...}`
    HtmlPassthrough,
    /// Anything else; dropped without error
    Ignored,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Article => write!(f, "article"),
            EntryKind::HtmlPassthrough => write!(f, "html"),
            EntryKind::Ignored => write!(f, "ignored"),
        }
    }
}

/// A segment tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub kind: EntryKind,
    pub segment: RawSegment,
}

/// A normalized field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain display text
    Text(String),
    /// Ordered list, used by `author` and `star_author`
    List(Vec<String>),
}

impl FieldValue {
    /// Returns the text, or `None` for a list value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// Returns the list, or `None` for a text value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }
}

/// A parsed `@article` entry
///
/// Every stored value is already normalized and ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Citation key from the opening line
    pub key: String,

    /// Lower-case field name to normalized value
    pub fields: BTreeMap<String, FieldValue>,
}

impl ArticleRecord {
    /// Fields that must be present to render an article
    pub const REQUIRED_FIELDS: [&'static str; 4] = ["author", "year", "title", "journal"];

    /// Create an empty record for a key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Store a field, replacing any earlier value with the same name
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Whether a field was given
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Text value of a field
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_text)
    }

    /// List value of a field
    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).and_then(FieldValue::as_list)
    }

    pub fn authors(&self) -> Option<&[String]> {
        self.list("author")
    }

    pub fn star_authors(&self) -> Option<&[String]> {
        self.list("star_author")
    }

    pub fn year(&self) -> Option<&str> {
        self.text("year")
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn journal(&self) -> Option<&str> {
        self.text("journal")
    }

    pub fn volume(&self) -> Option<&str> {
        self.text("volume")
    }

    pub fn pages(&self) -> Option<&str> {
        self.text("pages")
    }

    pub fn doi(&self) -> Option<&str> {
        self.text("doi")
    }

    pub fn url(&self) -> Option<&str> {
        self.text("url")
    }

    pub fn pdf(&self) -> Option<&str> {
        self.text("pdf")
    }

    /// Names of required fields this record lacks
    pub fn missing_required(&self) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| !self.has(name))
            .collect()
    }
}

/// Raw HTML passed through to the output unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlBlock {
    pub text: String,
}

impl HtmlBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
