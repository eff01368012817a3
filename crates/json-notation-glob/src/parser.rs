//! Glob notation tokenizer.

use crate::error::InvalidReason;
use crate::note::Note;

/// Splits notation text (without the `!` marker) into notes.
///
/// Grammar: dot-separated bare identifiers or `*`, and bracket tokens
/// `[N]`, `[*]`, `['key']`, `["key"]`, `` [`key`] `` which never take a
/// preceding dot.
pub struct GlobParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> GlobParser<'a> {
    /// Tokenize notation text.
    pub fn parse(input: &'a str) -> Result<Vec<Note>, InvalidReason> {
        let mut parser = Self { input, pos: 0 };
        parser.parse_notes()
    }

    fn parse_notes(&mut self) -> Result<Vec<Note>, InvalidReason> {
        if self.is_at_end() {
            return Err(InvalidReason::Empty);
        }

        let mut notes = vec![self.parse_head()?];

        while let Some(c) = self.peek() {
            match c {
                '.' => {
                    let dot = self.pos;
                    self.advance();
                    match self.peek() {
                        Some('[') => return Err(InvalidReason::DotBeforeBracket(dot)),
                        None => return Err(InvalidReason::UnexpectedEnd),
                        Some(_) => notes.push(self.parse_dotted()?),
                    }
                }
                '[' => notes.push(self.parse_bracket()?),
                other => return Err(InvalidReason::UnexpectedChar(other, self.pos)),
            }
        }

        Ok(notes)
    }

    fn parse_head(&mut self) -> Result<Note, InvalidReason> {
        match self.peek() {
            Some('[') => self.parse_bracket(),
            Some(_) => self.parse_dotted(),
            None => Err(InvalidReason::UnexpectedEnd),
        }
    }

    fn parse_dotted(&mut self) -> Result<Note, InvalidReason> {
        match self.peek() {
            Some('*') => {
                self.advance();
                Ok(Note::ObjectWildcard)
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                Ok(Note::Identifier(self.parse_identifier()))
            }
            Some(c) => Err(InvalidReason::UnexpectedChar(c, self.pos)),
            None => Err(InvalidReason::UnexpectedEnd),
        }
    }

    fn parse_identifier(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                self.advance();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    fn parse_bracket(&mut self) -> Result<Note, InvalidReason> {
        let open = self.pos;
        self.advance();

        match self.peek() {
            None => Err(InvalidReason::UnclosedBracket(open)),
            Some(']') => Err(InvalidReason::EmptyBrackets(open)),
            Some('*') => {
                self.advance();
                self.close(open)?;
                Ok(Note::ArrayWildcard)
            }
            Some(quote @ ('\'' | '"' | '`')) => self.parse_quoted(quote),
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while matches!(self.peek(), Some(d) if d.is_ascii_digit()) {
                    self.advance();
                }
                let index = self.input[start..self.pos]
                    .parse::<usize>()
                    .map_err(|_| InvalidReason::IndexOverflow(start))?;
                self.close(open)?;
                Ok(Note::Index(index))
            }
            Some(c) => Err(InvalidReason::UnexpectedChar(c, self.pos)),
        }
    }

    // The key ends at the first quote that is immediately followed by `]`.
    fn parse_quoted(&mut self, quote: char) -> Result<Note, InvalidReason> {
        let quote_pos = self.pos;
        self.advance();
        let start = self.pos;

        loop {
            match self.peek() {
                None => return Err(InvalidReason::UnclosedQuote(quote_pos)),
                Some(c) if c == quote && self.input[self.pos + c.len_utf8()..].starts_with(']') => {
                    let key = self.input[start..self.pos].to_string();
                    self.advance();
                    self.advance();
                    return Ok(Note::QuotedKey(key));
                }
                Some(_) => self.advance(),
            }
        }
    }

    fn close(&mut self, open: usize) -> Result<(), InvalidReason> {
        match self.peek() {
            Some(']') => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(InvalidReason::UnexpectedChar(c, self.pos)),
            None => Err(InvalidReason::UnclosedBracket(open)),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}
