//! Splitting the input into brace-balanced segments.

use super::ParseError;
use crate::models::RawSegment;
use std::io::BufRead;

/// Lazy iterator over the [`RawSegment`]s of a reader
///
/// Blank lines are skipped. Each remaining line is right-trimmed and added
/// to the current segment, and the brace depth is updated by the number of
/// `{` minus the number of `}` on the line. A segment is yielded whenever the
/// depth is back at zero, so text outside any braces becomes a segment of
/// its own.
///
/// Once an error has been yielded the iterator is finished.
pub struct Segmenter<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> Segmenter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            done: false,
        }
    }

    fn fail(&mut self, err: ParseError) -> Option<Result<RawSegment, ParseError>> {
        self.done = true;
        Some(Err(err))
    }
}

/// Net change in brace depth contributed by one line
fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |depth, c| match c {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}

impl<R: BufRead> Iterator for Segmenter<R> {
    type Item = Result<RawSegment, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut lines = Vec::new();
        let mut start_line = 0;
        let mut depth: i64 = 0;

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return self.fail(ParseError::Io(e)),
                None => {
                    self.done = true;
                    if lines.is_empty() {
                        return None;
                    }
                    return Some(Err(ParseError::UnterminatedEntry {
                        line: start_line,
                        depth,
                    }));
                }
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }
            if lines.is_empty() {
                start_line = self.line_no;
            }

            depth += brace_delta(&line);
            lines.push(line.trim_end().to_string());

            if depth < 0 {
                return self.fail(ParseError::UnbalancedBraces { line: self.line_no });
            }
            if depth == 0 {
                return Some(Ok(RawSegment::new(start_line, lines)));
            }
        }
    }
}
