use crate::models::{ClassifiedEntry, EntryKind, RawSegment};

pub(crate) const ARTICLE_MARKER: &str = "@article{";
pub(crate) const HTML_MARKER: &str = "@comment{html,";

/// Tag a segment by the first whitespace-delimited token of its first line
///
/// Matching is case-insensitive.
pub fn classify(segment: RawSegment) -> ClassifiedEntry {
    let token = segment
        .first_line()
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let kind = if token.starts_with(ARTICLE_MARKER) {
        EntryKind::Article
    } else if token.starts_with(HTML_MARKER) {
        EntryKind::HtmlPassthrough
    } else {
        EntryKind::Ignored
    };

    ClassifiedEntry { kind, segment }
}
