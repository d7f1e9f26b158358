use super::classify::HTML_MARKER;
use crate::models::{HtmlBlock, RawSegment};

/// Strip the `@comment{html,` marker and the closing brace from a
/// passthrough segment, keeping the inner lines verbatim
pub fn extract_html(segment: &RawSegment) -> HtmlBlock {
    let marker_len = HTML_MARKER.chars().count();
    let mut lines = segment.lines.clone();

    if let Some(first) = lines.first_mut() {
        *first = first.chars().skip(marker_len).collect();
    }
    if let Some(last) = lines.last_mut() {
        last.pop();
    }

    HtmlBlock::new(lines.join("\n"))
}
