//! Static parts of the generated document.

const HEADER_TOP: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN"
    "http://www.w3.org/TR/html4/strict.dtd">

<head>
  <meta http-equiv=Content-Type content="text/html; charset=utf-8">
"#;

const HEADER_STYLE: &str = r#"  <style type="text/css">
     span.selected {color: #0040A0}
     span.author {color: #008000}
     span.title {color: #A00000}
     span.journal {font-style: italic}
     span.volume {font-weight: bold}
     li {margin-top: 8px; margin-bottom: 16px}
   </style>
</head>

<body>

"#;

/// Closing part of the document
pub const FOOTER: &str = "

</body>
</html>
";

/// Document header with the given `<title>`
pub fn header(title: &str) -> String {
    format!("{HEADER_TOP}  <title>{title}</title>\n{HEADER_STYLE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let h = header("Publications");
        assert!(h.starts_with("<!DOCTYPE HTML"));
        assert!(h.contains("  <title>Publications</title>\n  <style"));
        assert!(h.contains("span.selected {color: #0040A0}"));
        assert!(h.ends_with("<body>\n\n"));
    }

    #[test]
    fn test_footer() {
        assert!(FOOTER.ends_with("</body>\n</html>\n"));
    }
}
