//! HTML output.
//!
//! [`DocumentWriter`] writes the header, then articles and passthrough
//! blocks in input order, opening an `<ol>` when an article follows
//! anything else and closing it before a passthrough block or the footer.

mod article;
mod template;

pub use article::ArticleRenderer;
pub use template::{header, FOOTER};

use crate::config::Config;
use crate::models::{ArticleRecord, HtmlBlock};
use std::io::Write;

/// Errors raised while writing HTML
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A field needed for every article is absent
    #[error("Article {key}: missing required field {field}")]
    MissingField { key: String, field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Streams a complete HTML document to a writer
pub struct DocumentWriter<'a, W: Write> {
    out: W,
    config: &'a Config,
    in_list: bool,
}

impl<'a, W: Write> DocumentWriter<'a, W> {
    /// Create the writer and emit the document header
    pub fn start(mut out: W, config: &'a Config) -> Result<Self, RenderError> {
        out.write_all(header(&config.document.title).as_bytes())?;
        Ok(Self {
            out,
            config,
            in_list: false,
        })
    }

    /// Write one article as a list item, opening a list if needed
    pub fn article(&mut self, record: &ArticleRecord) -> Result<(), RenderError> {
        if !self.in_list {
            self.in_list = true;
            self.out.write_all(b"\n<ol>\n")?;
        }
        ArticleRenderer::new(&self.config.links).render(record, &mut self.out)
    }

    /// Write a passthrough block surrounded by blank lines, closing any open list
    pub fn html_block(&mut self, block: &HtmlBlock) -> Result<(), RenderError> {
        self.close_list()?;
        write!(self.out, "\n{}\n\n", block.text)?;
        Ok(())
    }

    /// Close any open list, write the footer and hand back the writer
    pub fn finish(mut self) -> Result<W, RenderError> {
        self.close_list()?;
        self.out.write_all(FOOTER.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn close_list(&mut self) -> Result<(), RenderError> {
        if self.in_list {
            self.in_list = false;
            self.out.write_all(b"</ol>\n\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;

    fn record(key: &str) -> ArticleRecord {
        let mut r = ArticleRecord::new(key);
        r.insert("author", FieldValue::List(vec![key.to_string()]));
        r.insert("year", FieldValue::Text("2001".to_string()));
        r.insert("title", FieldValue::Text("T".to_string()));
        r.insert("journal", FieldValue::Text("J".to_string()));
        r
    }

    #[test]
    fn test_empty_document() {
        let config = Config::default();
        let out = DocumentWriter::start(Vec::new(), &config)
            .unwrap()
            .finish()
            .unwrap();
        let html = String::from_utf8(out).unwrap();
        assert_eq!(html, format!("{}{}", header("Oseano"), FOOTER));
    }

    #[test]
    fn test_list_transitions() {
        let config = Config::default();
        let mut doc = DocumentWriter::start(Vec::new(), &config).unwrap();
        doc.article(&record("a")).unwrap();
        doc.article(&record("b")).unwrap();
        doc.html_block(&HtmlBlock::new("<h2>Reports</h2>")).unwrap();
        doc.html_block(&HtmlBlock::new("<p>x</p>")).unwrap();
        doc.article(&record("c")).unwrap();
        let html = String::from_utf8(doc.finish().unwrap()).unwrap();

        assert_eq!(html.matches("<ol>").count(), 2);
        assert_eq!(html.matches("</ol>").count(), 2);
        assert!(html.contains("</li>\n</ol>\n\n\n<h2>Reports</h2>\n\n\n<p>x</p>\n\n\n<ol>\n<li>"));
        assert!(html.ends_with(&format!("</li>\n</ol>\n\n{FOOTER}")));
    }

    #[test]
    fn test_title_from_config() {
        let mut config = Config::default();
        config.document.title = "My papers".to_string();
        let out = DocumentWriter::start(Vec::new(), &config)
            .unwrap()
            .finish()
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("<title>My papers</title>"));
    }
}
