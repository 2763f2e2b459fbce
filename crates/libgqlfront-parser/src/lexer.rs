//! A pull-based lexer over `&str` input.
//!
//! Dispatch on the first byte of every token goes through the `const`
//! classification table in [`char_class`](crate::token::char_class), so the
//! hot loop never walks a chain of conditionals. Names, numbers and
//! punctuators borrow directly from the source text; string values borrow
//! as well unless escape processing or de-indentation changed them, in
//! which case they are decoded through a scratch buffer owned by the lexer.
//!
//! Errors are fatal: once [`Lexer::next_token()`] fails, the caller should
//! abandon the parse.
//!
//! ```rust
//! use libgqlfront_parser::Lexer;
//! use libgqlfront_parser::token::TokenKind;
//!
//! let kinds: Vec<TokenKind> = Lexer::new("{ name }", "query.graphql")
//!     .map(|token| token.unwrap().kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::BraceOpen,
//!     TokenKind::Name,
//!     TokenKind::BraceClose,
//!     TokenKind::Eof,
//! ]);
//! ```

use crate::token::char_class;
use crate::token::char_class::CharClass;
use crate::token::decode_block_string;
use crate::token::Token;
use crate::token::TokenKind;
use crate::Location;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use std::borrow::Cow;
use std::sync::Arc;

pub struct Lexer<'src> {
    /// The full text being lexed.
    text: &'src str,

    /// Label attached to every emitted [`Location`].
    source: Arc<str>,

    /// Current byte offset; the remaining input is `&text[offset..]`.
    offset: usize,

    /// 0-based line of `offset`.
    line: usize,

    /// 0-based character column of `offset`.
    column: usize,

    /// 0-based UTF-16 code unit column of `offset`.
    column_utf16: usize,

    /// Set after `\r` so that the `\n` of a `\r\n` pair does not count as a
    /// second line break.
    last_char_was_cr: bool,

    /// Decode buffer for string values that cannot borrow from the source.
    /// Each value is still copied out into an exact-size `String`; keeping
    /// the buffer only means its capacity is grown once, not per token.
    scratch: String,

    /// Set once `Eof` has been produced or an error was returned.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(text: &'src str, source: impl Into<Arc<str>>) -> Self {
        Self {
            text,
            source: source.into(),
            offset: 0,
            line: 0,
            column: 0,
            column_utf16: 0,
            last_char_was_cr: false,
            scratch: String::new(),
            finished: false,
        }
    }

    /// The label this lexer stamps onto locations.
    pub fn source(&self) -> &Arc<str> {
        &self.source
    }

    /// The location of the next unread character.
    pub fn location(&self) -> Location {
        Location::new(
            self.source.clone(),
            self.line,
            self.column,
            self.column_utf16,
            self.offset,
        )
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn peek_byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.offset).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    /// Consumes one character, keeping line and column tracking current.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => self.start_new_line(),
            '\r' => {
                self.start_new_line();
                self.last_char_was_cr = true;
            },
            _ => {
                self.column += 1;
                self.column_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }
        Some(ch)
    }

    /// Consumes `n` bytes that are known to be ASCII and not line
    /// terminators.
    fn advance_ascii(&mut self, n: usize) {
        self.offset += n;
        self.column += n;
        self.column_utf16 += n;
        self.last_char_was_cr = false;
    }

    fn start_new_line(&mut self) {
        self.line += 1;
        self.column = 0;
        self.column_utf16 = 0;
    }

    /// Consumes a run of ASCII digits and returns how many there were.
    fn eat_digits(&mut self) -> usize {
        let count = self.text.as_bytes()[self.offset..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.advance_ascii(count);
        count
    }

    // =========================================================================
    // Main loop
    // =========================================================================

    /// Produces the next token, or `Eof` once the input is exhausted.
    ///
    /// Calling this again after `Eof` keeps returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token<'src>, SyntaxError> {
        loop {
            let Some(byte) = self.peek_byte() else {
                self.finished = true;
                return Ok(Token::new(
                    TokenKind::Eof,
                    Cow::Borrowed(""),
                    self.location(),
                ));
            };
            match char_class::classify(byte) {
                Some(CharClass::Ignored) => self.advance_ascii(1),
                Some(CharClass::LineTerminator) => {
                    self.bump();
                },
                Some(CharClass::Comment) => self.skip_comment(),
                Some(CharClass::Punctuator(kind)) => {
                    let text = self.text;
                    let start = self.location();
                    let lexeme = &text[self.offset..self.offset + 1];
                    self.advance_ascii(1);
                    return Ok(Token::new(kind, Cow::Borrowed(lexeme), start));
                },
                Some(CharClass::Dot) => return self.lex_spread(),
                Some(CharClass::Quote) => return self.lex_string(),
                Some(CharClass::NameStart) => return Ok(self.lex_name()),
                Some(CharClass::Digit | CharClass::Minus) => return self.lex_number(),
                None => {
                    let start = self.location();
                    match self.bump() {
                        Some('\u{FEFF}') => continue,
                        Some(found) => {
                            return Err(SyntaxError::new(
                                SyntaxErrorKind::UnexpectedCharacter { found },
                                start,
                            ));
                        },
                        None => continue,
                    }
                },
            }
        }
    }

    /// Skips from `#` up to (not including) the next line terminator.
    fn skip_comment(&mut self) {
        let rest = &self.text[self.offset..];
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let comment = &rest[..len];
        self.offset += len;
        self.column += comment.chars().count();
        self.column_utf16 += comment.encode_utf16().count();
        self.last_char_was_cr = false;
    }

    // =========================================================================
    // Spread
    // =========================================================================

    fn lex_spread(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.location();
        let text = self.text;
        let dots = text.as_bytes()[self.offset..]
            .iter()
            .take(3)
            .take_while(|b| **b == b'.')
            .count();
        match dots {
            3 => {
                let lexeme = &text[self.offset..self.offset + 3];
                self.advance_ascii(3);
                Ok(Token::new(TokenKind::Spread, Cow::Borrowed(lexeme), start))
            },
            2 => Err(SyntaxError::new(SyntaxErrorKind::IncompleteSpread, start)),
            _ => Err(SyntaxError::new(SyntaxErrorKind::UnexpectedDot, start)),
        }
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Names match `/[_A-Za-z][_0-9A-Za-z]*/`. Keywords are plain names.
    fn lex_name(&mut self) -> Token<'src> {
        let start = self.location();
        let text = self.text;
        let len = text.as_bytes()[self.offset..]
            .iter()
            .take_while(|b| char_class::is_name_continue(**b))
            .count();
        let name = &text[self.offset..self.offset + len];
        self.advance_ascii(len);
        Token::new(TokenKind::Name, Cow::Borrowed(name), start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an `Int` or `Float`.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fraction: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.location();
        let text = self.text;
        let num_start = self.offset;
        let lexeme = |lexer: &Self| text[num_start..lexer.offset].to_string();

        if self.peek_byte() == Some(b'-') {
            self.advance_ascii(1);
            if !self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::MissingDigitAfterMinus,
                    start,
                ));
            }
        }

        if self.peek_byte() == Some(b'0') {
            self.advance_ascii(1);
            if self.eat_digits() > 0 {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::LeadingZero { lexeme: lexeme(self) },
                    start,
                ));
            }
        } else {
            self.eat_digits();
        }

        let mut is_float = false;

        if self.peek_byte() == Some(b'.') {
            self.advance_ascii(1);
            is_float = true;
            if self.eat_digits() == 0 {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::MissingFractionDigits { lexeme: lexeme(self) },
                    start,
                ));
            }
        }

        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            self.advance_ascii(1);
            is_float = true;
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.advance_ascii(1);
            }
            if self.eat_digits() == 0 {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::MissingExponentDigits { lexeme: lexeme(self) },
                    start,
                ));
            }
        }

        if let Some(next) = self.peek_byte()
            && (next == b'.' || next == b'_' || next.is_ascii_alphabetic())
        {
            return Err(SyntaxError::new(
                SyntaxErrorKind::InvalidNumberSuffix {
                    lexeme: lexeme(self),
                    next: next as char,
                },
                start,
            ));
        }

        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
        Ok(Token::new(kind, Cow::Borrowed(&text[num_start..self.offset]), start))
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.location();
        let text = self.text;
        if text[self.offset..].starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.advance_ascii(1);
        let content_start = self.offset;
        // Flips on at the first escape; from then on the value is built in
        // `scratch` instead of borrowed.
        let mut decoding = false;
        loop {
            match self.peek_char() {
                None | Some('\n' | '\r') => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnterminatedString,
                        start,
                    ));
                },
                Some('"') => {
                    let value = if decoding {
                        Cow::Owned(self.scratch.clone())
                    } else {
                        Cow::Borrowed(&text[content_start..self.offset])
                    };
                    self.advance_ascii(1);
                    return Ok(Token::new(TokenKind::String, value, start));
                },
                Some('\\') => {
                    if !decoding {
                        self.scratch.clear();
                        self.scratch.push_str(&text[content_start..self.offset]);
                        decoding = true;
                    }
                    let ch = self.lex_escape(&start)?;
                    self.scratch.push(ch);
                },
                Some(ch) => {
                    self.bump();
                    if decoding {
                        self.scratch.push(ch);
                    }
                },
            }
        }
    }

    /// Decodes one escape sequence starting at the backslash.
    fn lex_escape(&mut self, string_start: &Location) -> Result<char, SyntaxError> {
        let escape_start = self.location();
        let escape_offset = self.offset;
        self.advance_ascii(1);
        let decoded = match self.peek_char() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                self.advance_ascii(1);
                return self.lex_unicode_escape(escape_start, escape_offset);
            },
            None | Some('\n' | '\r') => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnterminatedString,
                    string_start.clone(),
                ));
            },
            Some(other) => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::InvalidEscape {
                        sequence: format!("\\{other}"),
                    },
                    escape_start,
                ));
            },
        };
        self.advance_ascii(1);
        Ok(decoded)
    }

    /// Handles `\uXXXX` (including surrogate pairs) and `\u{X...}`. The
    /// `\u` has already been consumed.
    fn lex_unicode_escape(
        &mut self,
        escape_start: Location,
        escape_offset: usize,
    ) -> Result<char, SyntaxError> {
        let text = self.text;
        let invalid = |lexer: &Self| {
            SyntaxError::new(
                SyntaxErrorKind::InvalidUnicodeEscape {
                    sequence: text[escape_offset..lexer.offset].to_string(),
                },
                escape_start.clone(),
            )
        };

        if self.peek_byte() == Some(b'{') {
            self.advance_ascii(1);
            let digits_start = self.offset;
            let count = text.as_bytes()[self.offset..]
                .iter()
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            self.advance_ascii(count);
            let digits = &text[digits_start..self.offset];
            if digits.is_empty() || self.peek_byte() != Some(b'}') {
                return Err(invalid(self));
            }
            self.advance_ascii(1);
            return u32::from_str_radix(digits, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| invalid(self));
        }

        let first = self.read_hex4().ok_or_else(|| invalid(self))?;
        match first {
            0xD800..=0xDBFF => {
                if !text[self.offset..].starts_with("\\u") {
                    return Err(invalid(self));
                }
                self.advance_ascii(2);
                let second = self.read_hex4().ok_or_else(|| invalid(self))?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(invalid(self));
                }
                let combined = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
                char::from_u32(combined).ok_or_else(|| invalid(self))
            },
            _ => char::from_u32(first).ok_or_else(|| invalid(self)),
        }
    }

    /// Reads exactly four hex digits. On failure, any hex digits that were
    /// present have been consumed so the error can quote them.
    fn read_hex4(&mut self) -> Option<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = self.peek_byte().and_then(|b| (b as char).to_digit(16))?;
            self.advance_ascii(1);
            value = value * 16 + digit;
        }
        Some(value)
    }

    fn lex_block_string(&mut self, start: Location) -> Result<Token<'src>, SyntaxError> {
        let text = self.text;
        self.advance_ascii(3);
        let content_start = self.offset;
        loop {
            let rest = &text[self.offset..];
            if rest.starts_with("\"\"\"") {
                let content = &text[content_start..self.offset];
                self.advance_ascii(3);
                let value = decode_block_string(content, &mut self.scratch);
                return Ok(Token::new(TokenKind::BlockString, value, start));
            }
            if rest.starts_with("\\\"\"\"") {
                self.advance_ascii(4);
                continue;
            }
            if self.bump().is_none() {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnterminatedBlockString,
                    start,
                ));
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, SyntaxError>;

    /// Yields every token up to and including `Eof`, then `None`. After an
    /// error no further items are produced.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}
