//! Per-byte classification tables driving the lexer's main dispatch.
//!
//! Both tables are built at compile time by `const fn`s and are never
//! mutated, so they need no synchronization. Only ASCII bytes are
//! classified; every byte >= 0x80 maps to `None` and the lexer decodes the
//! full character on that slow path.

use crate::token::TokenKind;

/// What the lexer should do when it sees a given leading byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CharClass {
    /// Space, tab and comma.
    Ignored,
    /// `\n` or `\r`.
    LineTerminator,
    /// `#`
    Comment,
    /// Any single-character punctuator.
    Punctuator(TokenKind),
    /// `.`
    Dot,
    /// `"`
    Quote,
    /// `[_A-Za-z]`
    NameStart,
    /// `[0-9]`
    Digit,
    /// `-`
    Minus,
}

static CHAR_CLASSES: [Option<CharClass>; 256] = char_class_lut();
static NAME_CONTINUE: [bool; 256] = name_continue_lut();

#[inline]
pub(crate) fn classify(byte: u8) -> Option<CharClass> {
    CHAR_CLASSES[byte as usize]
}

/// `[_A-Za-z0-9]`
#[inline]
pub(crate) fn is_name_continue(byte: u8) -> bool {
    NAME_CONTINUE[byte as usize]
}

const fn char_class_lut() -> [Option<CharClass>; 256] {
    let mut lut = [None; 256];
    lut[b' ' as usize] = Some(CharClass::Ignored);
    lut[b'\t' as usize] = Some(CharClass::Ignored);
    lut[b',' as usize] = Some(CharClass::Ignored);
    lut[b'\n' as usize] = Some(CharClass::LineTerminator);
    lut[b'\r' as usize] = Some(CharClass::LineTerminator);
    lut[b'#' as usize] = Some(CharClass::Comment);

    lut[b'!' as usize] = Some(CharClass::Punctuator(TokenKind::Bang));
    lut[b'$' as usize] = Some(CharClass::Punctuator(TokenKind::Dollar));
    lut[b'&' as usize] = Some(CharClass::Punctuator(TokenKind::Ampersand));
    lut[b'(' as usize] = Some(CharClass::Punctuator(TokenKind::ParenOpen));
    lut[b')' as usize] = Some(CharClass::Punctuator(TokenKind::ParenClose));
    lut[b':' as usize] = Some(CharClass::Punctuator(TokenKind::Colon));
    lut[b'=' as usize] = Some(CharClass::Punctuator(TokenKind::Equals));
    lut[b'@' as usize] = Some(CharClass::Punctuator(TokenKind::At));
    lut[b'[' as usize] = Some(CharClass::Punctuator(TokenKind::BracketOpen));
    lut[b']' as usize] = Some(CharClass::Punctuator(TokenKind::BracketClose));
    lut[b'{' as usize] = Some(CharClass::Punctuator(TokenKind::BraceOpen));
    lut[b'}' as usize] = Some(CharClass::Punctuator(TokenKind::BraceClose));
    lut[b'|' as usize] = Some(CharClass::Punctuator(TokenKind::Pipe));

    lut[b'.' as usize] = Some(CharClass::Dot);
    lut[b'"' as usize] = Some(CharClass::Quote);
    lut[b'-' as usize] = Some(CharClass::Minus);
    lut[b'_' as usize] = Some(CharClass::NameStart);

    let mut b = b'a';
    while b <= b'z' {
        lut[b as usize] = Some(CharClass::NameStart);
        lut[(b - b'a' + b'A') as usize] = Some(CharClass::NameStart);
        b += 1;
    }

    let mut d = b'0';
    while d <= b'9' {
        lut[d as usize] = Some(CharClass::Digit);
        d += 1;
    }

    lut
}

const fn name_continue_lut() -> [bool; 256] {
    let mut lut = [false; 256];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        lut[i] = b == b'_' || b.is_ascii_alphanumeric();
        i += 1;
    }
    lut
}
