use std::ops::Range;

/// In-memory text buffer standing in for the host editor view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
    /// Cursor position in chars
    cursor: usize,
}

impl EditorBuffer {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.chars().count());
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Word touching the cursor, if any
    pub fn current_word(&self) -> Option<&str> {
        self.word_range().map(|range| &self.text[range])
    }

    /// Replace the word touching the cursor and move the cursor after the
    /// inserted text. Returns false when there is no word to replace.
    pub fn replace_current_word(&mut self, replacement: &str) -> bool {
        let Some(range) = self.word_range() else {
            return false;
        };

        let start_chars = self.text[..range.start].chars().count();
        self.text.replace_range(range, replacement);
        self.cursor = start_chars + replacement.chars().count();
        true
    }

    /// Byte range of the word at or just before the cursor
    fn word_range(&self) -> Option<Range<usize>> {
        let chars: Vec<(usize, char)> = self.text.char_indices().collect();
        let at = |i: usize| chars.get(i).is_some_and(|&(_, c)| is_word_char(c));

        let anchor = if at(self.cursor) {
            self.cursor
        } else if self.cursor > 0 && at(self.cursor - 1) {
            self.cursor - 1
        } else {
            return None;
        };

        let mut start = anchor;
        while start > 0 && at(start - 1) {
            start -= 1;
        }
        let mut end = anchor + 1;
        while at(end) {
            end += 1;
        }

        let byte_start = chars[start].0;
        let byte_end = chars.get(end).map_or(self.text.len(), |&(i, _)| i);
        Some(byte_start..byte_end)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_at_cursor() {
        let buffer = EditorBuffer::new("the quick fox", 5);
        assert_eq!(buffer.current_word(), Some("quick"));

        // Cursor right after a word
        let buffer = EditorBuffer::new("the quick fox", 9);
        assert_eq!(buffer.current_word(), Some("quick"));

        let buffer = EditorBuffer::new("빠르다 말", 1);
        assert_eq!(buffer.current_word(), Some("빠르다"));
    }

    #[test]
    fn test_no_word_at_cursor() {
        assert_eq!(EditorBuffer::new("a  b", 2).current_word(), None);
        assert_eq!(EditorBuffer::new("", 0).current_word(), None);
        assert_eq!(EditorBuffer::new("  ...", 10).current_word(), None);
    }

    #[test]
    fn test_replace_current_word() {
        let mut buffer = EditorBuffer::new("아주 빠르다 말", 4);
        assert!(buffer.replace_current_word("신속하다"));
        assert_eq!(buffer.text(), "아주 신속하다 말");
        assert_eq!(buffer.cursor(), 7);

        let mut buffer = EditorBuffer::new("    ", 2);
        assert!(!buffer.replace_current_word("x"));
        assert_eq!(buffer.text(), "    ");
    }
}
