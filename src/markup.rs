//! Helpers for the small markup dialect produced by the transform pipeline.
//!
//! Annotated text only ever contains `<b>`/`</b>` emphasis tags and the
//! syllable marker `·`; everything else is user text.

use once_cell::sync::Lazy;
use regex::Regex;

pub const BOLD_OPEN: &str = "<b>";
pub const BOLD_CLOSE: &str = "</b>";
/// Middle dot (U+00B7) inserted between syllables.
pub const SYLLABLE_MARKER: char = '·';

static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Plain text suitable for speech: every tag and syllable marker removed.
pub fn speakable_text(markup: &str) -> String {
    RE_TAG
        .replace_all(markup, "")
        .chars()
        .filter(|ch| *ch != SYLLABLE_MARKER)
        .collect()
}

/// A contiguous piece of rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
}

/// Split annotated text into runs for the rich-text renderer.
///
/// Bold tags may nest; a run is bold while at least one `<b>` is open.
/// Unbalanced closing tags are ignored, and any other `<...>` sequence is
/// kept as literal text.
pub fn styled_runs(markup: &str) -> Vec<StyledRun> {
    let mut runs: Vec<StyledRun> = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    let mut rest = markup;

    while !rest.is_empty() {
        let tag_delta = if rest.starts_with(BOLD_OPEN) {
            Some((BOLD_OPEN.len(), true))
        } else if rest.starts_with(BOLD_CLOSE) {
            Some((BOLD_CLOSE.len(), false))
        } else {
            None
        };

        match tag_delta {
            Some((len, opening)) => {
                let was_bold = depth > 0;
                if opening {
                    depth += 1;
                } else {
                    depth = depth.saturating_sub(1);
                }
                if was_bold != (depth > 0) {
                    flush_run(&mut runs, &mut current, was_bold);
                }
                rest = &rest[len..];
            }
            None => {
                let Some(ch) = rest.chars().next() else {
                    break;
                };
                current.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    flush_run(&mut runs, &mut current, depth > 0);
    runs
}

fn flush_run(runs: &mut Vec<StyledRun>, current: &mut String, bold: bool) {
    if current.is_empty() {
        return;
    }
    let text = std::mem::take(current);
    match runs.last_mut() {
        Some(last) if last.bold == bold => last.text.push_str(&text),
        _ => runs.push(StyledRun { text, bold }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speakable_text_drops_tags_and_markers() {
        assert_eq!(speakable_text("<b>He</b>llo ·wor·ld"), "Hello world");
        assert_eq!(
            speakable_text("<b>im<b>·</b>por</b>·tant"),
            "important"
        );
    }

    #[test]
    fn speakable_text_keeps_lone_angle_brackets() {
        assert_eq!(speakable_text("1 < 2"), "1 < 2");
    }

    #[test]
    fn runs_follow_bold_nesting() {
        let runs = styled_runs("<b>im<b>·</b>por</b>·tant go");
        assert_eq!(
            runs,
            vec![
                StyledRun {
                    text: "im·por".to_string(),
                    bold: true
                },
                StyledRun {
                    text: "·tant go".to_string(),
                    bold: false
                },
            ]
        );
    }

    #[test]
    fn runs_treat_unknown_tags_as_text() {
        let runs = styled_runs("<i>x</i> <b>y</b>");
        assert_eq!(runs[0].text, "<i>x</i> ");
        assert!(!runs[0].bold);
        assert_eq!(runs[1].text, "y");
        assert!(runs[1].bold);
    }

    #[test]
    fn stray_close_tag_is_ignored() {
        let runs = styled_runs("a</b>b");
        assert_eq!(
            runs,
            vec![StyledRun {
                text: "ab".to_string(),
                bold: false
            }]
        );
    }
}
