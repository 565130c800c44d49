//! Line numbering over a text snapshot.
//!
//! Lines are the `\n`-separated segments of the text. A final `\n` does not
//! start another line, so `"a\nb\n"` and `"a\nb"` both have two lines.

/// Byte offsets of every line start in one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
    text_len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts = Vec::new();
        if !text.is_empty() {
            starts.push(0);
        }
        for (pos, byte) in text.bytes().enumerate() {
            if byte == b'\n' && pos + 1 < text.len() {
                starts.push(pos + 1);
            }
        }
        Self {
            starts,
            text_len: text.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Byte offset where `line` begins; `line_count()` maps to the end of
    /// the text.
    pub fn offset(&self, line: usize) -> usize {
        self.starts.get(line).copied().unwrap_or(self.text_len)
    }

    /// Line contents without their terminator.
    pub fn line<'a>(&self, text: &'a str, line: usize) -> &'a str {
        let start = self.offset(line);
        let end = self.offset(line + 1);
        text[start..end].trim_end_matches('\n').trim_end_matches('\r')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_lines() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 0);
        assert_eq!(index.offset(0), 0);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(LineIndex::new("a\nb\n").line_count(), 2);
        assert_eq!(LineIndex::new("a\nb").line_count(), 2);
        assert_eq!(LineIndex::new("a\n\n").line_count(), 2);
    }

    #[test]
    fn test_offsets() {
        let text = "ab\ncd\n\nef";
        let index = LineIndex::new(text);
        assert_eq!(index.offset(0), 0);
        assert_eq!(index.offset(1), 3);
        assert_eq!(index.offset(2), 6);
        assert_eq!(index.offset(3), 7);
        assert_eq!(index.offset(4), text.len());
        assert_eq!(index.line(text, 3), "ef");
        assert_eq!(index.line(text, 2), "");
    }

    #[test]
    fn test_crlf_line_contents() {
        let text = "a\r\nb\r\n";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line(text, 0), "a");
        assert_eq!(index.offset(1), 3);
    }
}
