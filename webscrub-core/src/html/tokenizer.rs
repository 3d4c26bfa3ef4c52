// webscrub-core/src/html/tokenizer.rs
//! A single-pass lexical HTML tokenizer.
//!
//! This is deliberately not a conforming HTML5 parser: there is no tree
//! construction, no implicit tag closing and no foster parenting. The input
//! fragment is split into a flat stream of tokens that the sanitizer can
//! filter and re-serialize. Character references in attribute values are
//! decoded here (and re-encoded on output) so that sanitizing already
//! sanitized markup is a fixed point; text spans are left untouched.
//!
//! License: MIT OR Apache-2.0

use crate::errors::WebscrubError;

/// A single `name="value"` pair on a tag, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A start, end, or self-closing tag with its ordered attributes.
///
/// Tag and attribute names are ASCII-lowercased during tokenization, which
/// is what makes the sanitizer's case-insensitive allow-list checks plain
/// string comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<Attribute>,
}

/// One lexical unit of the input fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag(Tag),
    EndTag(Tag),
    SelfClosingTag(Tag),
    Text(String),
    Comment(String),
    Doctype(String),
}

/// Byte-cursor tokenizer over an HTML fragment.
///
/// `next_token` yields `Ok(None)` on clean end of input. Input that ends in
/// the middle of a tag, quoted attribute value, comment, or doctype is a
/// malformed stream and yields `WebscrubError::UnexpectedEof`.
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, WebscrubError> {
        if self.pos >= self.input.len() {
            return Ok(None);
        }
        if self.starts_markup(self.pos) {
            return self.markup().map(Some);
        }
        Ok(Some(self.text()))
    }

    fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// A `<` opens markup only when followed by `/`, `!`, `?` or a letter.
    /// Anything else (`a < b`, a trailing `<`) is ordinary text.
    fn starts_markup(&self, at: usize) -> bool {
        if self.input[at] != b'<' {
            return false;
        }
        match self.input.get(at + 1) {
            Some(&c) => c == b'/' || c == b'!' || c == b'?' || c.is_ascii_alphabetic(),
            None => false,
        }
    }

    fn text(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1; // first byte is part of the text even if it is '<'
        while self.pos < self.input.len() && !self.starts_markup(self.pos) {
            self.pos += 1;
        }
        Token::Text(String::from_utf8_lossy(&self.input[start..self.pos]).into_owned())
    }

    fn markup(&mut self) -> Result<Token, WebscrubError> {
        // self.pos is at '<' and a second byte is known to exist
        match self.input[self.pos + 1] {
            b'!' => self.declaration(),
            b'?' => {
                self.pos += 2;
                self.bogus_comment()
            }
            b'/' => {
                if matches!(self.input.get(self.pos + 2), Some(c) if c.is_ascii_alphabetic()) {
                    self.tag(true)
                } else {
                    self.pos += 2;
                    self.bogus_comment()
                }
            }
            _ => self.tag(false),
        }
    }

    /// `<!--` comments, `<!doctype>` declarations, and the `<!whatever>`
    /// leftovers browsers treat as bogus comments.
    fn declaration(&mut self) -> Result<Token, WebscrubError> {
        let rest = &self.input[self.pos..];
        if rest.starts_with(b"<!--") {
            let body_start = self.pos + 4;
            match find_subslice(self.input, b"-->", body_start) {
                Some(end) => {
                    let body =
                        String::from_utf8_lossy(&self.input[body_start..end]).into_owned();
                    self.pos = end + 3;
                    Ok(Token::Comment(body))
                }
                None => Err(WebscrubError::UnexpectedEof(self.input.len())),
            }
        } else if rest.len() >= 9 && rest[..9].eq_ignore_ascii_case(b"<!doctype") {
            let body_start = self.pos + 9;
            match find_byte(self.input, b'>', body_start) {
                Some(end) => {
                    let body = String::from_utf8_lossy(&self.input[body_start..end])
                        .trim()
                        .to_string();
                    self.pos = end + 1;
                    Ok(Token::Doctype(body))
                }
                None => Err(WebscrubError::UnexpectedEof(self.input.len())),
            }
        } else {
            self.pos += 2;
            self.bogus_comment()
        }
    }

    /// Consumes up to the next `>` and reports the span as a comment.
    fn bogus_comment(&mut self) -> Result<Token, WebscrubError> {
        let start = self.pos;
        match find_byte(self.input, b'>', start) {
            Some(end) => {
                self.pos = end + 1;
                Ok(Token::Comment(
                    String::from_utf8_lossy(&self.input[start..end]).into_owned(),
                ))
            }
            None => Err(WebscrubError::UnexpectedEof(self.input.len())),
        }
    }

    fn tag(&mut self, is_end: bool) -> Result<Token, WebscrubError> {
        self.pos += if is_end { 2 } else { 1 };

        let name_start = self.pos;
        while matches!(self.current(), Some(c) if is_name_byte(c)) {
            self.pos += 1;
        }
        let name = String::from_utf8_lossy(&self.input[name_start..self.pos])
            .to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;
        loop {
            self.skip_whitespace();
            match self.current() {
                None => return Err(WebscrubError::UnexpectedEof(self.pos)),
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') => {
                    // only meaningful directly before '>'; stray slashes
                    // between attributes are discarded like browsers do
                    self.pos += 1;
                    if self.current() == Some(b'>') {
                        self.pos += 1;
                        self_closing = true;
                        break;
                    }
                }
                Some(_) => {
                    let attr = self.attribute()?;
                    attrs.push(attr);
                }
            }
        }

        let tag = Tag { name, attrs };
        if is_end {
            Ok(Token::EndTag(tag))
        } else if self_closing {
            Ok(Token::SelfClosingTag(tag))
        } else {
            Ok(Token::StartTag(tag))
        }
    }

    fn attribute(&mut self) -> Result<Attribute, WebscrubError> {
        let name_start = self.pos;
        while matches!(self.current(), Some(c)
            if !c.is_ascii_whitespace() && c != b'=' && c != b'/' && c != b'>')
        {
            self.pos += 1;
        }
        let name = String::from_utf8_lossy(&self.input[name_start..self.pos])
            .to_ascii_lowercase();

        self.skip_whitespace();
        if self.current() != Some(b'=') {
            // bare attribute, e.g. <input disabled>
            return Ok(Attribute {
                name,
                value: String::new(),
            });
        }
        self.pos += 1;
        self.skip_whitespace();

        let raw = match self.current() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let value_start = self.pos;
                match find_byte(self.input, quote, value_start) {
                    Some(end) => {
                        self.pos = end + 1;
                        &self.input[value_start..end]
                    }
                    None => return Err(WebscrubError::UnexpectedEof(self.input.len())),
                }
            }
            _ => {
                let value_start = self.pos;
                while matches!(self.current(), Some(c)
                    if !c.is_ascii_whitespace() && c != b'>')
                {
                    self.pos += 1;
                }
                &self.input[value_start..self.pos]
            }
        };

        let decoded =
            html_escape::decode_html_entities(&String::from_utf8_lossy(raw)).into_owned();
        Ok(Attribute {
            name,
            value: decoded,
        })
    }
}

fn is_name_byte(c: u8) -> bool {
    !c.is_ascii_whitespace() && c != b'/' && c != b'>' && c != b'='
}

fn find_byte(haystack: &[u8], needle: u8, start: usize) -> Option<usize> {
    haystack
        .iter()
        .skip(start)
        .position(|&c| c == needle)
        .map(|i| i + start)
}

fn find_subslice(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    if start > haystack.len() {
        return None;
    }
    haystack[start..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + start)
}
