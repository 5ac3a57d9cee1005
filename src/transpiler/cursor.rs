/// Forward-only cursor over the markup being converted.
///
/// Reading is destructive in the sense that the position only ever moves
/// forward; the underlying text is never modified.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_walks_multibyte_characters() {
        let mut cursor = Cursor::new("añb");
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.bump(), Some('ñ'));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.bump(), Some('b'));
        assert_eq!(cursor.rest(), "");
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new("[x");
        assert_eq!(cursor.peek(), Some('['));
        assert_eq!(cursor.rest(), "[x");
    }
}
