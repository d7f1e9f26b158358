//! Translation of the small set of LaTeX constructs found in bibliography
//! fields into Unicode and HTML.
//!
//! Supported:
//!
//! - `$^{\circ}$` as a degree sign
//! - `\emph{...}` and `\textit{...}` as `<i>...</i>`, allowing one level of
//!   nested braces inside the argument
//! - `\&` as `&`
//! - `$\beta$` as a Greek beta
//! - `{\AE}`, `{\O}`, `{\AA}`, `{\ae}`, `{\o}`, `{\aa}`

use regex::Regex;
use std::sync::OnceLock;

/// Unicode en dash, used for page ranges
pub const EN_DASH: char = '\u{2013}';

/// Unicode non-breaking space
pub const NBSP: char = '\u{00A0}';

const DEGREE: &str = "\u{00B0}";
const BETA: &str = "\u{03B2}";

/// Plain substitutions applied after italics, in order
const LETTERS: [(&str, &str); 6] = [
    (r"{\AE}", "Æ"),
    (r"{\O}", "Ø"),
    (r"{\AA}", "Å"),
    (r"{\ae}", "æ"),
    (r"{\o}", "ø"),
    (r"{\aa}", "å"),
];

static ITALIC: OnceLock<Option<Regex>> = OnceLock::new();

fn italic_regex() -> Option<&'static Regex> {
    ITALIC
        .get_or_init(|| {
            // \emph{ (...{...})* ... }
            Regex::new(r"\\(?:emph|textit)\{((?:[^{}]*\{[^{}]*\})*.*?)\}").ok()
        })
        .as_ref()
}

/// Replace LaTeX escapes and macros with Unicode text and HTML tags
///
/// Text without any of the supported constructs is returned unchanged, and
/// translating already translated text is a no-op.
pub fn untex(text: &str) -> String {
    let mut s = text.replace(r"$^{\circ}$", DEGREE);
    if let Some(re) = italic_regex() {
        s = re.replace_all(&s, "<i>${1}</i>").into_owned();
    }
    let mut s = s.replace(r"\&", "&").replace(r"$\beta$", BETA);
    for (macro_text, letter) in LETTERS {
        s = s.replace(macro_text, letter);
    }
    s
}

/// Replace the escaped ampersand only
pub fn unescape_ampersand(text: &str) -> String {
    text.replace(r"\&", "&")
}
