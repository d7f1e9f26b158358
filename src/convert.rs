//! The conversion pass from BibTeX text to an HTML document.

use crate::config::Config;
use crate::models::EntryKind;
use crate::parser::{classify, extract_html, parse_article, ParseError, Segmenter};
use crate::render::{DocumentWriter, RenderError};
use std::io::{BufRead, Write};

/// Errors that abort a conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Counts of what a conversion produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub articles: usize,
    pub html_blocks: usize,
    pub ignored: usize,
}

/// Convert every entry of `input` and write the HTML document to `output`
///
/// Entries are handled strictly in input order. The first error stops the
/// conversion; whatever was already written to `output` is left as is.
pub fn convert<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &Config,
) -> Result<ConversionStats, ConvertError> {
    let mut stats = ConversionStats::default();
    let mut doc = DocumentWriter::start(output, config)?;

    for segment in Segmenter::new(input) {
        let entry = classify(segment?);
        let line = entry.segment.start_line;
        let kind = entry.kind;

        match entry.kind {
            EntryKind::Article => {
                let record = parse_article(&entry.segment)?;
                tracing::debug!(line, kind = %kind, key = %record.key, "entry");
                doc.article(&record)?;
                stats.articles += 1;
            }
            EntryKind::HtmlPassthrough => {
                tracing::debug!(line, kind = %kind, "entry");
                doc.html_block(&extract_html(&entry.segment))?;
                stats.html_blocks += 1;
            }
            EntryKind::Ignored => {
                tracing::debug!(
                    line,
                    kind = %kind,
                    first = entry.segment.first_line().unwrap_or_default(),
                    "ignoring entry"
                );
                stats.ignored += 1;
            }
        }
    }

    doc.finish()?;
    Ok(stats)
}

/// Convert a string, returning the HTML document
pub fn convert_str(input: &str, config: &Config) -> Result<(String, ConversionStats), ConvertError> {
    let mut out = Vec::new();
    let stats = convert(input.as_bytes(), &mut out, config)?;
    Ok((String::from_utf8_lossy(&out).into_owned(), stats))
}
