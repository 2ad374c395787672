use crate::scanner::Scanner;

// A tokenizer that splits input on each delimiter.
// Delimiters are kept as single-char tokens, runs between them are one token.
pub struct DelimTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    delims: &'static [char],
}

impl<I: Iterator<Item=char>> DelimTokenizer<I> {
    pub fn new(source: I, delims: &'static [char]) -> Self {
        DelimTokenizer{src: Scanner::new(source), delims}
    }
}

impl<I: Iterator<Item=char>> Iterator for DelimTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        if self.src.until_any(self.delims) {
            Some(self.src.extract_string())
        } else if self.src.accept_any(self.delims).is_some() {
            Some(self.src.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
