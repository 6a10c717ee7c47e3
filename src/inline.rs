//! Inline tokenizer: turns a line of markdown into formatted spans.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::span::{Span, SpanKind};

/// Delimiter passes, applied in this order. Spans classified by an earlier
/// pass are never split again.
const DELIMITERS: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("_", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// `![alt](url)` when the first group is `!`, otherwise `[text](url)`.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Split inline markdown into spans in document order.
///
/// Fails if any delimiter occurs an odd number of times in unformatted text.
/// Unclosed link or image syntax is kept as plain text.
pub fn tokenize(text: &str) -> Result<Vec<Span>, Error> {
    let mut spans = vec![Span::plain(text)];
    for (delimiter, kind) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
    }

    Ok(extract_links(spans)
        .into_iter()
        .filter(|span| !(span.is_plain() && span.text().is_empty()))
        .collect())
}

/// Replace each plain span with the pieces between `delimiter` pairs.
///
/// Odd-numbered pieces take `kind`; the rest stay plain. Links and images
/// carry a target and cannot come from a delimiter pair.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, Error> {
    if matches!(kind, SpanKind::Link | SpanKind::Image) {
        return Err(Error::UnsupportedSpanKind { kind });
    }

    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text().split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnbalancedDelimiter {
                delimiter,
                text: span.text().to_string(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 0 {
                out.push(Span::plain(part));
            } else {
                out.push(Span::styled(kind, part));
            }
        }
    }

    Ok(out)
}

/// Pull links and images out of plain spans, scanning left to right.
fn extract_links(spans: Vec<Span>) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text();
        let mut last = 0;
        for caps in LINK_PATTERN.captures_iter(text) {
            let whole = caps.get_match();
            out.push(Span::plain(&text[last..whole.start()]));
            if caps[1].is_empty() {
                out.push(Span::link(&caps[2], &caps[3]));
            } else {
                out.push(Span::image(&caps[2], &caps[3]));
            }
            last = whole.end();
        }
        out.push(Span::plain(&text[last..]));
    }

    out
}
