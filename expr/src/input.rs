/// Byte position into an input string
pub type Pos = usize;

/// A cursor over an expression string.
/// It keeps track of the byte position of the next character.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: Pos,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The remaining, not yet consumed input
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek the next character without consuming it
    pub fn first(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume characters as long as `pred` holds
    pub fn eat_while<P>(&mut self, mut pred: P)
    where
        P: FnMut(char) -> bool,
    {
        while let Some(c) = self.first() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// The input slice between `start` and the current position
    pub fn slice_from(&self, start: Pos) -> &'a str {
        &self.input[start..self.pos]
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.first()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}

impl std::iter::FusedIterator for Cursor<'_> {}
