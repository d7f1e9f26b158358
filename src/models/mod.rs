//! Core data models for bibliography entries.

mod entry;

pub use entry::{ArticleRecord, ClassifiedEntry, EntryKind, FieldValue, HtmlBlock, RawSegment};
