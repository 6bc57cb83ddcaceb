//! Bionic-style emphasis: the leading half of every word is wrapped in `<b>`.

use crate::markup::{BOLD_CLOSE, BOLD_OPEN, SYLLABLE_MARKER};

/// Emphasize the first `ceil(n / 2)` characters of every whitespace-delimited
/// token. Whitespace runs are copied through untouched, and a syllable marker
/// inside the emphasized prefix gets its own nested bold span.
///
/// Total over all inputs and not idempotent: running it twice double-wraps.
pub fn emphasize(text: &str) -> String {
    let mut output = String::with_capacity(text.len() * 2);
    for segment in Segments::new(text) {
        match segment {
            Segment::Whitespace(run) => output.push_str(run),
            Segment::Token(token) => push_emphasized_token(token, &mut output),
        }
    }
    output
}

fn push_emphasized_token(token: &str, output: &mut String) {
    let n = token.chars().count();
    if n == 0 {
        return;
    }
    let mid = n.div_ceil(2);
    let split_at = token
        .char_indices()
        .nth(mid)
        .map(|(idx, _)| idx)
        .unwrap_or(token.len());
    let (prefix, suffix) = token.split_at(split_at);

    output.push_str(BOLD_OPEN);
    for ch in prefix.chars() {
        if ch == SYLLABLE_MARKER {
            output.push_str(BOLD_OPEN);
            output.push(ch);
            output.push_str(BOLD_CLOSE);
        } else {
            output.push(ch);
        }
    }
    output.push_str(BOLD_CLOSE);
    output.push_str(suffix);
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Whitespace(&'a str),
    Token(&'a str),
}

/// Alternating whitespace runs and tokens, in source order.
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let in_whitespace = first.is_whitespace();
        let end = self
            .rest
            .char_indices()
            .find(|(_, ch)| ch.is_whitespace() != in_whitespace)
            .map(|(idx, _)| idx)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(if in_whitespace {
            Segment::Whitespace(head)
        } else {
            Segment::Token(head)
        })
    }
}
