//! Inline style parsing for a single line of text.
//!
//! One combined pattern is scanned left-to-right; the alternation order
//! (bold, italic, code, link) is the tie-break when two markers start at
//! the same position, which the regex crate's leftmost-first matching
//! gives us directly. Matched inner text is taken literally; markers do
//! not nest. A marker without a closer on the same line never matches and
//! stays literal text.

use std::sync::LazyLock;

use regex::Regex;

/// Combined inline marker pattern. Alternative order is load-bearing:
/// bold before italic before code before link.
static INLINE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.+?)\*\*|\*(.+?)\*|`(.+?)`|\[([^\]]+)\]\(([^)]+)\)")
        .expect("inline marker pattern is valid")
});

/// Style carried by one inline span. At most one style per span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
}

/// A run of text with zero or one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            style: SpanStyle::Plain,
        }
    }

    fn styled(text: &str, style: SpanStyle) -> Self {
        Self {
            text: text.to_string(),
            style,
        }
    }
}

/// Parsed inline content: a bare string when no marker matched, otherwise
/// the left-to-right span sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Plain(String),
    Spans(Vec<Span>),
}

impl Inline {
    /// The concatenated text content, styles stripped.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Plain(text) => text.clone(),
            Inline::Spans(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

/// Splits one line (or joined blockquote text) into styled spans.
///
/// Returns `Inline::Plain` when the text contains no recognized marker.
pub fn parse_inline(text: &str) -> Inline {
    let mut spans: Vec<Span> = Vec::new();
    let mut last = 0;

    for caps in INLINE_MARKER.captures_iter(text) {
        let m = caps.get(0).expect("group 0 of a match always exists");
        if m.start() > last {
            spans.push(Span::plain(&text[last..m.start()]));
        }

        if let Some(inner) = caps.get(1) {
            spans.push(Span::styled(inner.as_str(), SpanStyle::Bold));
        } else if let Some(inner) = caps.get(2) {
            spans.push(Span::styled(inner.as_str(), SpanStyle::Italic));
        } else if let Some(inner) = caps.get(3) {
            spans.push(Span::styled(inner.as_str(), SpanStyle::Code));
        } else if let (Some(label), Some(url)) = (caps.get(4), caps.get(5)) {
            spans.push(Span::styled(
                label.as_str(),
                SpanStyle::Link {
                    url: url.as_str().to_string(),
                },
            ));
        }

        last = m.end();
    }

    if spans.is_empty() {
        return Inline::Plain(text.to_string());
    }

    if last < text.len() {
        spans.push(Span::plain(&text[last..]));
    }

    Inline::Spans(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_is_plain() {
        assert_eq!(
            parse_inline("just some text"),
            Inline::Plain("just some text".to_string())
        );
    }

    #[test]
    fn test_empty_is_plain() {
        assert_eq!(parse_inline(""), Inline::Plain(String::new()));
    }

    #[test]
    fn test_bold_round_trip() {
        // A line that is only a bold marker parses to a single bold span
        // with no residual plain spans.
        let parsed = parse_inline("**bold text**");
        assert_eq!(
            parsed,
            Inline::Spans(vec![Span::styled("bold text", SpanStyle::Bold)])
        );
    }

    #[test]
    fn test_mixed_styles_in_order() {
        let parsed = parse_inline("a **b** and *c* then `d` see [e](https://x)");
        let Inline::Spans(spans) = parsed else {
            panic!("expected spans");
        };
        assert_eq!(spans[0], Span::plain("a "));
        assert_eq!(spans[1], Span::styled("b", SpanStyle::Bold));
        assert_eq!(spans[2], Span::plain(" and "));
        assert_eq!(spans[3], Span::styled("c", SpanStyle::Italic));
        assert_eq!(spans[4], Span::plain(" then "));
        assert_eq!(spans[5], Span::styled("d", SpanStyle::Code));
        assert_eq!(spans[6], Span::plain(" see "));
        assert_eq!(
            spans[7],
            Span::styled(
                "e",
                SpanStyle::Link {
                    url: "https://x".to_string()
                }
            )
        );
        assert_eq!(spans.len(), 8);
    }

    #[test]
    fn test_tie_break_bold_wins_over_italic() {
        // `***x***`: at the first position both bold and italic could
        // start; bold wins, consuming `***x**` with inner text `*x`, and
        // the trailing `*` is literal.
        let parsed = parse_inline("***x***");
        assert_eq!(
            parsed,
            Inline::Spans(vec![
                Span::styled("*x", SpanStyle::Bold),
                Span::plain("*"),
            ])
        );
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        assert_eq!(
            parse_inline("**not closed"),
            Inline::Plain("**not closed".to_string())
        );
        assert_eq!(
            parse_inline("`still open"),
            Inline::Plain("`still open".to_string())
        );
    }

    #[test]
    fn test_inner_text_not_rescanned() {
        // Markers do not nest: the inner text of a code span stays literal.
        let parsed = parse_inline("`a **b** c`");
        assert_eq!(
            parsed,
            Inline::Spans(vec![Span::styled("a **b** c", SpanStyle::Code)])
        );
    }

    #[test]
    fn test_trailing_text_after_last_marker() {
        let parsed = parse_inline("*x* tail");
        assert_eq!(
            parsed,
            Inline::Spans(vec![
                Span::styled("x", SpanStyle::Italic),
                Span::plain(" tail"),
            ])
        );
    }

    #[test]
    fn test_non_greedy_matching() {
        let parsed = parse_inline("**a** middle **b**");
        let Inline::Spans(spans) = parsed else {
            panic!("expected spans");
        };
        assert_eq!(spans[0], Span::styled("a", SpanStyle::Bold));
        assert_eq!(spans[1], Span::plain(" middle "));
        assert_eq!(spans[2], Span::styled("b", SpanStyle::Bold));
    }

    #[test]
    fn test_marker_must_close_on_same_line() {
        // Blockquote text is joined with newlines; `.` does not cross them.
        assert_eq!(
            parse_inline("**a\nb**"),
            Inline::Plain("**a\nb**".to_string())
        );
    }

    #[test]
    fn test_plain_text_helper() {
        assert_eq!(parse_inline("a **b** c").plain_text(), "a b c");
    }
}
