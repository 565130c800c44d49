//! Line classification.
//!
//! Every line is classified on its own, by shape:
//!
//! - zero indentation: a transaction header (`DATE [*|!] payee`) or an inert
//!   `Other` line (directives, top-level comments, anything unrecognized);
//! - indented, in priority order: a posting with an amount, a comment line
//!   (`;`), then a posting without an amount.
//!
//! Nothing here fails. A line that looks like a header but is not shaped like
//! one is kept as `Other` so the text around it is preserved verbatim.

use tracing::debug;

/// Symbols that may lead an amount.
const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Header status marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `*`
    Cleared,
    /// `!`
    Pending,
}

/// Shape of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Header {
        date: &'a str,
        marker: Option<Marker>,
        payee: &'a str,
    },
    PostingWithAmount {
        account: &'a str,
        amount: &'a str,
        comment: &'a str,
    },
    PostingBare {
        account: &'a str,
        comment: &'a str,
    },
    Comment(&'a str),
    Other,
    Blank,
}

impl LineKind<'_> {
    /// Indented lines belong to whichever record is open.
    pub fn is_indented(&self) -> bool {
        matches!(
            self,
            LineKind::PostingWithAmount { .. } | LineKind::PostingBare { .. } | LineKind::Comment(_)
        )
    }
}

/// A classified, non-blank line and its zero-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub kind: LineKind<'a>,
}

/// Classify every non-blank line of `text`.
pub fn lex(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for (number, raw) in text.split('\n').enumerate() {
        let kind = classify(raw);
        match kind {
            LineKind::Blank => continue,
            LineKind::Other if raw.starts_with(|c: char| c.is_ascii_digit()) => {
                debug!(line = number, "date-like line is not a transaction header; kept verbatim");
            }
            _ => {}
        }
        lines.push(Line { number, kind });
    }
    lines
}

/// Classify one line (terminator optional).
pub fn classify(raw: &str) -> LineKind<'_> {
    let line = raw.trim_end();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with(char::is_whitespace) {
        classify_indented(line.trim_start())
    } else {
        header(line).unwrap_or(LineKind::Other)
    }
}

/// `YYYY/MM/DD`, digits only, no calendar check.
pub fn is_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(pos, byte)| match pos {
            4 | 7 => *byte == b'/',
            _ => byte.is_ascii_digit(),
        })
}

fn header(line: &str) -> Option<LineKind<'_>> {
    let date = line.get(..10)?;
    if !is_date_shape(date) {
        return None;
    }
    let rest = &line[10..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.trim_start();
    let (marker, payee) = if let Some(payee) = rest.strip_prefix('*') {
        (Some(Marker::Cleared), payee)
    } else if let Some(payee) = rest.strip_prefix('!') {
        (Some(Marker::Pending), payee)
    } else {
        (None, rest)
    };

    Some(LineKind::Header {
        date,
        marker,
        payee: payee.trim(),
    })
}

fn classify_indented(body: &str) -> LineKind<'_> {
    if let Some(kind) = posting_with_amount(body) {
        return kind;
    }
    if let Some(text) = body.strip_prefix(';') {
        return LineKind::Comment(text.trim());
    }
    let (account, comment) = split_comment(body);
    LineKind::PostingBare { account, comment }
}

/// Find the first whitespace run (two or more characters, or containing a
/// tab) that is followed by an amount. The account is everything before it
/// and may not contain `;`.
fn posting_with_amount(body: &str) -> Option<LineKind<'_>> {
    let bytes = body.as_bytes();
    let limit = body.find(';').unwrap_or(body.len());
    let mut pos = 0;

    while pos < limit {
        if !is_blank(bytes[pos]) {
            pos += 1;
            continue;
        }
        let run_start = pos;
        while pos < bytes.len() && is_blank(bytes[pos]) {
            pos += 1;
        }
        let run = &body[run_start..pos];
        let separates = run.len() >= 2 || run.contains('\t');
        if run_start > 0 && separates && starts_with_amount(&body[pos..]) {
            let (amount, comment) = split_comment(&body[pos..]);
            return Some(LineKind::PostingWithAmount {
                account: body[..run_start].trim(),
                amount,
                comment,
            });
        }
    }

    None
}

/// Whether `account` would be cut short on re-parse because a separator
/// inside it is followed by something amount-shaped.
pub(crate) fn splits_before_amount(account: &str) -> bool {
    posting_with_amount(account.trim()).is_some()
}

/// Optional currency symbol and optional `-` in either order, then a digit.
pub(crate) fn starts_with_amount(text: &str) -> bool {
    let mut rest = text;
    let mut symbol = false;
    if let Some(stripped) = rest.strip_prefix(&CURRENCY_SYMBOLS[..]) {
        rest = stripped;
        symbol = true;
    }
    if let Some(stripped) = rest.strip_prefix('-') {
        rest = stripped;
    }
    if !symbol {
        if let Some(stripped) = rest.strip_prefix(&CURRENCY_SYMBOLS[..]) {
            rest = stripped;
        }
    }
    rest.starts_with(|c: char| c.is_ascii_digit())
}

fn split_comment(text: &str) -> (&str, &str) {
    match text.split_once(';') {
        Some((before, after)) => (before.trim(), after.trim()),
        None => (text.trim(), ""),
    }
}

fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}
