//! Word scanning for grammar text.
//!
//! Grammar text is a stream of whitespace-separated words. A `#` at the start
//! of a word begins a comment that runs to the end of the line.

/// Whitespace recognized between grammar words.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Byte offset of the next word in `text`, skipping whitespace and comments.
///
/// Returns `text.len()` if only whitespace and comments remain.
pub fn skip_space(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    loop {
        while i < bytes.len() && is_space(bytes[i]) {
            i += 1;
        }
        if bytes.get(i) != Some(&b'#') {
            return i;
        }
        while i < bytes.len() && bytes[i] != b'\n' {
            i += 1;
        }
    }
}

/// Pull the next word off the front of `input`.
///
/// `input` is advanced to the character right after the word. Returns `None`
/// (leaving `input` empty) when no words remain.
pub fn extract_word<'a>(input: &mut &'a str) -> Option<&'a str> {
    let rest = &input[skip_space(input)..];
    let end = rest.bytes().position(is_space).unwrap_or(rest.len());
    let (word, tail) = rest.split_at(end);
    *input = tail;
    (!word.is_empty()).then_some(word)
}

/// Iterator over `(offset, word)` pairs of grammar text.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
    len: usize,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            len: text.len(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let word = extract_word(&mut self.rest)?;
        let offset = self.len - self.rest.len() - word.len();
        Some((offset, word))
    }
}

impl std::iter::FusedIterator for Words<'_> {}
