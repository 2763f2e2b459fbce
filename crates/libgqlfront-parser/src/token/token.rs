use crate::token::TokenKind;
use crate::Location;
use std::borrow::Cow;

/// A single lexed token.
///
/// `value` is the raw lexeme for punctuators, names and numbers (borrowed
/// from the source text) and the fully decoded content for both string
/// forms. Decoded strings borrow from the source as well when no escape
/// processing or de-indentation changed them.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: Cow<'src, str>,
    pub location: Location,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, value: Cow<'src, str>, location: Location) -> Self {
        Self { kind, value, location }
    }

    /// True when this token is a `Name` spelled exactly `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.value == keyword
    }

    /// Renders the token for use in diagnostics, e.g. `` `{` ``,
    /// `Name "foo"` or `end of input`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Name | TokenKind::Int | TokenKind::Float => {
                format!("{} \"{}\"", self.kind, self.value)
            },
            _ => self.kind.to_string(),
        }
    }

    /// Converts borrowed values into owned ones so the token can outlive
    /// its source text.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            value: Cow::Owned(self.value.into_owned()),
            location: self.location,
        }
    }
}
