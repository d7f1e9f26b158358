//! Field parsing for `@article` entries.
//!
//! The dialect is line oriented. A field starts on a line whose second word
//! is `=`, and its value may continue over following lines until the last
//! word closes the value (`",` or `},`, a lone word ending in `,`, or a lone
//! `}`). Every field must therefore be followed by a comma, the last one
//! included, and the entry must end with `}` on a line of its own.

use super::classify::ARTICLE_MARKER;
use super::ParseError;
use crate::models::{ArticleRecord, FieldValue, RawSegment};
use crate::utils::latex::{unescape_ampersand, untex, EN_DASH, NBSP};

/// Parse an article segment into a record of normalized fields
pub fn parse_article(segment: &RawSegment) -> Result<ArticleRecord, ParseError> {
    let mut lines = segment.lines.iter();

    let key = lines
        .next()
        .and_then(|line| extract_key(line))
        .ok_or(ParseError::MissingKey {
            line: segment.start_line,
        })?;
    let mut record = ArticleRecord::new(key);

    while let Some(line) = lines.next() {
        let words: Vec<&str> = line.split_whitespace().collect();

        if words.len() > 1 && words[1] == "=" {
            let name = words[0].to_lowercase();
            let mut data: Vec<&str> = words[2..].to_vec();

            while !value_complete(&data) {
                let next = lines.next().ok_or_else(|| ParseError::UnterminatedField {
                    key: record.key.clone(),
                    field: name.clone(),
                })?;
                data.extend(next.split_whitespace());
            }

            let joined = data.join(" ");
            let value = normalize_field(&name, strip_delimiters(&joined));
            tracing::trace!(key = %record.key, field = %name, "parsed field");
            record.insert(name, value);
        } else if words != ["}"] {
            return Err(ParseError::UnexpectedLine {
                key: record.key.clone(),
                line: line.clone(),
            });
        }
    }

    Ok(record)
}

/// Key from an opening line such as `@article{Smith2020,`
fn extract_key(line: &str) -> Option<String> {
    let token = line.split_whitespace().next()?;
    let rest: String = token.chars().skip(ARTICLE_MARKER.len()).collect();
    let key = rest.strip_suffix(',').unwrap_or(&rest);
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

/// Whether the collected words hold a whole field value
fn value_complete(data: &[&str]) -> bool {
    match data.last() {
        None => false,
        Some(last) => {
            last.ends_with("\",")
                || last.ends_with("},")
                || (data.len() == 1 && last.ends_with(','))
                || *last == "}"
        }
    }
}

/// Remove one opening `"` or `{`, then a trailing `,`, then one closing `"` or `}`
fn strip_delimiters(value: &str) -> &str {
    let value = value.strip_prefix(['"', '{']).unwrap_or(value);
    let value = value.strip_suffix(',').unwrap_or(value);
    value.strip_suffix(['"', '}']).unwrap_or(value)
}

fn normalize_field(name: &str, value: &str) -> FieldValue {
    match name {
        "author" | "star_author" => FieldValue::List(
            value
                .split(" and ")
                .map(|author| untex(&author.replace(' ', &NBSP.to_string())))
                .collect(),
        ),
        "title" => FieldValue::Text(untex(value).replace(['{', '}'], "")),
        "journal" => FieldValue::Text(unescape_ampersand(value)),
        "pages" => FieldValue::Text(value.replace('-', &EN_DASH.to_string())),
        _ => FieldValue::Text(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> RawSegment {
        RawSegment::new(1, text.lines().map(|l| l.trim_end().to_string()).collect())
    }

    fn nbsp(s: &str) -> String {
        s.replace(' ', "\u{00A0}")
    }

    #[test]
    fn test_basic_article() {
        let record = parse_article(&segment(
            "@article{key1,\n  author = \"A. One\",\n  year = \"2020\",\n  title = \"A Title\",\n  journal = \"J\",\n}",
        ))
        .unwrap();

        assert_eq!(record.key, "key1");
        assert_eq!(record.authors(), Some(&[nbsp("A. One")][..]));
        assert_eq!(record.year(), Some("2020"));
        assert_eq!(record.title(), Some("A Title"));
        assert_eq!(record.journal(), Some("J"));
        assert!(record.missing_required().is_empty());
    }

    #[test]
    fn test_key_without_comma() {
        let record = parse_article(&segment("@article{lonely\n}")).unwrap();
        assert_eq!(record.key, "lonely");
        assert!(record.fields.is_empty());
    }

    #[test]
    fn test_missing_key() {
        let err = parse_article(&segment("@article{ key,\n}")).unwrap_err();
        assert!(matches!(err, ParseError::MissingKey { line: 1 }));
    }

    #[test]
    fn test_field_name_lowercased_and_braces() {
        let record =
            parse_article(&segment("@article{k,\n  Volume = {42},\n  YEAR = 1999,\n}")).unwrap();
        assert_eq!(record.volume(), Some("42"));
        assert_eq!(record.year(), Some("1999"));
    }

    #[test]
    fn test_multi_line_value() {
        let record = parse_article(&segment(
            "@article{k,\n  title = {A very long title\n     spanning three\n     lines},\n}",
        ))
        .unwrap();
        assert_eq!(record.title(), Some("A very long title spanning three lines"));
    }

    #[test]
    fn test_value_on_next_line() {
        let record = parse_article(&segment("@article{k,\n  journal =\n    \"ICES J\",\n}")).unwrap();
        assert_eq!(record.journal(), Some("ICES J"));
    }

    #[test]
    fn test_last_field_closed_by_entry_brace() {
        // Value runs into the lone closing brace, which ends the entry too
        let record = parse_article(&segment("@article{k,\n  volume = 5\n}")).unwrap();
        assert_eq!(record.volume(), Some("5 "));
    }

    #[test]
    fn test_authors_split_and_translated() {
        let record = parse_article(&segment(
            "@article{k,\n  author = {Bj{\\o}rn {\\AA}dlandsvik and Frode Vikeb{\\o}\n     and Ann Other},\n}",
        ))
        .unwrap();
        assert_eq!(
            record.authors().unwrap(),
            &[nbsp("Bjørn Ådlandsvik"), nbsp("Frode Vikebø"), nbsp("Ann Other")]
        );
    }

    #[test]
    fn test_star_author_list() {
        let record =
            parse_article(&segment("@article{k,\n  star_author = {Ådlandsvik and Vikebø},\n}"))
                .unwrap();
        assert_eq!(record.star_authors().unwrap().len(), 2);
    }

    #[test]
    fn test_title_italics_and_braces_removed() {
        let record = parse_article(&segment(
            "@article{k,\n  title = {Growth of \\emph{Gadus {morhua}} in the {North} Sea},\n}",
        ))
        .unwrap();
        assert_eq!(
            record.title(),
            Some("Growth of <i>Gadus morhua</i> in the North Sea")
        );
    }

    #[test]
    fn test_journal_ampersand_only() {
        let record = parse_article(&segment(
            "@article{k,\n  journal = {Fish \\& Fisheries \\emph{x}},\n}",
        ))
        .unwrap();
        assert_eq!(record.journal(), Some("Fish & Fisheries \\emph{x}"));
    }

    #[test]
    fn test_pages_en_dash() {
        let record = parse_article(&segment("@article{k,\n  pages = \"10-20\",\n}")).unwrap();
        assert_eq!(record.pages(), Some("10\u{2013}20"));
    }

    #[test]
    fn test_other_fields_verbatim() {
        let record = parse_article(&segment(
            "@article{k,\n  doi = {10.1/a-b_c},\n  url = \"http://x.org/p?a=1&b=2\",\n}",
        ))
        .unwrap();
        assert_eq!(record.doi(), Some("10.1/a-b_c"));
        assert_eq!(record.url(), Some("http://x.org/p?a=1&b=2"));
    }

    #[test]
    fn test_unexpected_line() {
        let err = parse_article(&segment("@article{k,\n  year = 2000,\n  garbage here\n}")).unwrap_err();
        match err {
            ParseError::UnexpectedLine { key, line } => {
                assert_eq!(key, "k");
                assert_eq!(line, "  garbage here");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_closing_brace_with_trailing_text_rejected() {
        assert!(parse_article(&segment("@article{k,\n  year = 2000,\n} extra")).is_err());
    }

    #[test]
    fn test_unterminated_field() {
        let err = parse_article(&segment("@article{k,\n  title = {No comma\n  here}")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnterminatedField { ref field, .. } if field == "title"
        ));
    }

    /// Write a record back out as BibTeX, one `name = {value},` per field,
    /// optionally breaking each multi-word value over two lines
    fn to_bibtex(record: &ArticleRecord, wrap: bool) -> String {
        let mut out = format!("@article{{{},\n", record.key);
        for (name, value) in &record.fields {
            let text = match value {
                FieldValue::Text(s) => s.clone(),
                FieldValue::List(items) => items.join(" and ").replace('\u{00A0}', " "),
            };
            let words: Vec<&str> = text.split(' ').collect();
            if wrap && words.len() > 1 {
                let mid = words.len() / 2;
                out.push_str(&format!(
                    "  {} = {{{}\n      {}}},\n",
                    name,
                    words[..mid].join(" "),
                    words[mid..].join(" ")
                ));
            } else {
                out.push_str(&format!("  {} = {{{}}},\n", name, text));
            }
        }
        out.push('}');
        out
    }

    #[test]
    fn test_reparse_after_serializing() {
        let text = "@article{Smith2020,\n  author = {Ann Smith and Bo Jones\n     and Carl Berg},\n  \
                    star_author = {Smith},\n  year = 2020,\n  title = \"Drift of larvae\n     in the Barents Sea\",\n  \
                    journal = {Marine Ecology},\n  volume = {12},\n  pages = {10-20},\n  doi = {10.1/xyz},\n}";
        let record = parse_article(&segment(text)).unwrap();
        assert_eq!(record.fields.len(), 8);

        for wrap in [false, true] {
            let written = to_bibtex(&record, wrap);
            let reparsed = parse_article(&segment(&written)).unwrap();
            assert_eq!(reparsed, record, "wrap = {wrap}:\n{written}");
        }
    }

    #[test]
    fn test_serialized_wrap_spans_lines() {
        let record = parse_article(&segment("@article{k,\n  title = {Two words},\n}")).unwrap();
        assert_eq!(
            to_bibtex(&record, true),
            "@article{k,\n  title = {Two\n      words},\n}"
        );
        assert_eq!(to_bibtex(&record, false), "@article{k,\n  title = {Two words},\n}");
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("\"abc\","), "abc");
        assert_eq!(strip_delimiters("{abc},"), "abc");
        assert_eq!(strip_delimiters("abc,"), "abc");
        assert_eq!(strip_delimiters("{{abc}},"), "{abc}");
        assert_eq!(strip_delimiters("\""), "");
    }
}
