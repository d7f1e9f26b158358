//! HTML list item for one article.

use super::RenderError;
use crate::config::LinkConfig;
use crate::models::ArticleRecord;
use crate::utils::latex::NBSP;
use std::io::Write;

const INDENT: &str = "    ";
const INDENT2: &str = "        ";

/// Renders [`ArticleRecord`]s as `<li>` fragments
#[derive(Debug, Clone)]
pub struct ArticleRenderer<'a> {
    links: &'a LinkConfig,
}

impl<'a> ArticleRenderer<'a> {
    pub fn new(links: &'a LinkConfig) -> Self {
        Self { links }
    }

    /// Write the list item for `record`
    ///
    /// Fails on the first of [`ArticleRecord::REQUIRED_FIELDS`] that is missing.
    pub fn render<W: Write>(&self, record: &ArticleRecord, out: &mut W) -> Result<(), RenderError> {
        if let Some(field) = record.missing_required().first() {
            return Err(RenderError::MissingField {
                key: record.key.clone(),
                field: field.to_string(),
            });
        }
        let authors = record.authors().unwrap_or_default();
        let year = record.year().unwrap_or_default();
        let title = record.title().unwrap_or_default();
        let journal = record.journal().unwrap_or_default();

        let authors = highlight_authors(authors, record.star_authors().unwrap_or_default());

        writeln!(out, "<li>")?;
        writeln!(out, "{INDENT}<span class=\"author\">")?;
        for line in author_lines(&authors) {
            writeln!(out, "{INDENT2}{line}")?;
        }
        writeln!(out, "{INDENT}</span>")?;

        writeln!(out, "{INDENT}<span class=\"year\">{year}</span>,")?;

        writeln!(out, "{INDENT}<span class=\"title\">")?;
        writeln!(out, "{INDENT2}{title}")?;
        writeln!(out, "{INDENT}</span>")?;

        writeln!(out, "{INDENT}<span class=\"journal\">{journal}</span>,")?;

        if let Some(volume) = record.volume() {
            writeln!(out, "{INDENT}<span class=\"volume\">{volume}</span>,")?;
        }

        // Pages take the place of the doi; the doi still feeds the link below
        match (record.pages(), record.doi()) {
            (Some(pages), _) => writeln!(out, "{INDENT}<span class=\"pages\">{pages}</span>.")?,
            (None, Some(doi)) => writeln!(out, "{INDENT}<span class=\"doi\">doi:{doi}</span>,")?,
            (None, None) => {}
        }

        self.write_links(record, year, out)?;

        writeln!(out, "</li>")?;
        Ok(())
    }

    /// Link target for the record: its url, else one built from its doi
    pub fn link_url(&self, record: &ArticleRecord) -> Option<String> {
        record.url().map(str::to_string).or_else(|| {
            record
                .doi()
                .map(|doi| format!("{}{}", self.links.doi_resolver, doi))
        })
    }

    fn write_links<W: Write>(
        &self,
        record: &ArticleRecord,
        year: &str,
        out: &mut W,
    ) -> Result<(), RenderError> {
        let pdf = record.pdf();
        let url = self.link_url(record);
        if pdf.is_none() && url.is_none() {
            return Ok(());
        }

        write!(out, "{INDENT}<br>[{NBSP}")?;
        if let Some(pdf) = pdf {
            write!(out, "<a href=\"{}/{}/{}\">pdf</a>", self.links.pdf_dir, year, pdf)?;
        }
        if pdf.is_some() && url.is_some() {
            write!(out, " |\n{INDENT2}  ")?;
        }
        if let Some(url) = &url {
            write!(out, "<a href=\"{url}\">link</a>")?;
        }
        writeln!(out, "{NBSP}]")?;
        Ok(())
    }
}

/// Wrap every author containing one of `stars` in a `selected` span
fn highlight_authors(authors: &[String], stars: &[String]) -> Vec<String> {
    authors
        .iter()
        .map(|author| {
            if stars.iter().any(|star| author.contains(star.as_str())) {
                format!("<span class=\"selected\">{author}</span>")
            } else {
                author.clone()
            }
        })
        .collect()
}

/// One line per author: `A`, `A` / `and B`, or `A,` / `B,` / `and C`
fn author_lines(authors: &[String]) -> Vec<String> {
    match authors {
        [] => Vec::new(),
        [only] => vec![only.clone()],
        [first, second] => vec![first.clone(), format!("and {second}")],
        [init @ .., last] => init
            .iter()
            .map(|author| format!("{author},"))
            .chain(std::iter::once(format!("and {last}")))
            .collect(),
    }
}
