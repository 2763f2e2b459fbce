use crate::token::Token;
use crate::Lexer;
use crate::SyntaxError;

/// One-token lookahead over a [`Lexer`].
///
/// The current token is lexed eagerly, so a lexical error in the token
/// *after* the one being consumed is reported by [`consume()`]. Since every
/// error aborts the parse this only shifts when it is noticed, not where it
/// is reported.
///
/// [`consume()`]: TokenStream::consume
pub struct TokenStream<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
}

impl<'src> TokenStream<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Result<Self, SyntaxError> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// The next token, without consuming it. At end of input this is the
    /// `Eof` token.
    pub fn peek(&self) -> &Token<'src> {
        &self.current
    }

    /// Returns the current token and advances past it.
    pub fn consume(&mut self) -> Result<Token<'src>, SyntaxError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}
