//! Recursive-descent parser for schema and request documents.
//!
//! Productions shared by both grammars (values, type references,
//! directives, arguments, selection sets) live in their own submodules as
//! methods on [`Parser`]; `schema_document` and `request_document` hold
//! the two thin top-level dispatchers.
//!
//! The first error aborts the parse and is returned to the caller.

mod directives;
mod request_document;
mod schema_document;
mod selections;
mod type_references;
mod values;

use crate::ast::RequestDocument;
use crate::ast::SchemaDocument;
use crate::token::Token;
use crate::token::TokenKind;
use crate::Lexer;
use crate::Location;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::TokenStream;
use std::sync::Arc;

pub(crate) type ParseResult<T> = Result<T, SyntaxError>;

/// Where a value is being parsed, which decides whether variables are
/// allowed and how to describe the position if one shows up anyway.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ValueContext {
    /// Field arguments and directives in operations; variables allowed.
    AllowVariables,
    /// `$var: Type = <here>`
    VariableDefaultValue,
    /// Arguments of directives applied in the type system or to variable
    /// definitions.
    ConstDirectiveArgument,
    /// `arg: Type = <here>` in argument and input field definitions.
    InputDefaultValue,
}

impl ValueContext {
    pub(crate) fn allows_variables(&self) -> bool {
        matches!(self, ValueContext::AllowVariables)
    }

    pub(crate) fn description(&self) -> &'static str {
        match self {
            ValueContext::AllowVariables => "a value",
            ValueContext::VariableDefaultValue => "a variable default value",
            ValueContext::ConstDirectiveArgument => "a constant directive argument",
            ValueContext::InputDefaultValue => "an input value default",
        }
    }
}

pub struct Parser<'src> {
    tokens: TokenStream<'src>,
    source: Arc<str>,
    recursion_depth: usize,
}

impl<'src> Parser<'src> {
    /// Maximum nesting of lists, objects, list type references and
    /// selection sets.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn new(text: &'src str, source: impl Into<Arc<str>>) -> ParseResult<Self> {
        let lexer = Lexer::new(text, source);
        let source = lexer.source().clone();
        Ok(Self {
            tokens: TokenStream::new(lexer)?,
            source,
            recursion_depth: 0,
        })
    }

    /// Parses the whole input with the type-system grammar.
    pub fn parse_schema_document(mut self) -> ParseResult<SchemaDocument> {
        let definitions = self.parse_type_system_definitions()?;
        Ok(SchemaDocument {
            source: self.source,
            definitions,
        })
    }

    /// Parses the whole input with the request grammar.
    pub fn parse_request_document(mut self) -> ParseResult<RequestDocument> {
        let definitions = self.parse_executable_definitions()?;
        Ok(RequestDocument {
            source: self.source,
            definitions,
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek(&self) -> &Token<'src> {
        self.tokens.peek()
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// True for a `Name` token spelled `keyword`.
    fn peek_is_keyword(&self, keyword: &str) -> bool {
        self.peek().is_keyword(keyword)
    }

    fn peek_location(&self) -> Location {
        self.peek().location.clone()
    }

    fn consume(&mut self) -> ParseResult<Token<'src>> {
        self.tokens.consume()
    }

    /// Consumes the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> ParseResult<Option<Token<'src>>> {
        if self.peek_is(kind) {
            self.consume().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consumes a token of the given kind or fails naming what was found.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        if self.peek_is(kind) {
            self.consume()
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// Consumes a `Name` token and returns its text and location.
    fn expect_name(&mut self) -> ParseResult<(String, Location)> {
        let token = self.expect(TokenKind::Name)?;
        Ok((token.value.into_owned(), token.location))
    }

    /// Consumes a `Name` token spelled exactly `keyword`.
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<Location> {
        if self.peek_is_keyword(keyword) {
            return Ok(self.consume()?.location);
        }
        let token = self.peek();
        let kind = if token.kind == TokenKind::Eof {
            SyntaxErrorKind::UnexpectedEof {
                expected: format!("`{keyword}`"),
            }
        } else {
            SyntaxErrorKind::UnexpectedKeyword {
                expected: keyword.to_string(),
                found: token.describe(),
            }
        };
        Err(SyntaxError::new(kind, token.location.clone()))
    }

    /// Builds the error for a current token that does not fit `expected`.
    fn unexpected(&self, expected: impl Into<String>) -> SyntaxError {
        let token = self.peek();
        let kind = if token.kind == TokenKind::Eof {
            SyntaxErrorKind::UnexpectedEof {
                expected: expected.into(),
            }
        } else {
            SyntaxErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: token.describe(),
            }
        };
        SyntaxError::new(kind, token.location.clone())
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            return Err(SyntaxError::new(
                SyntaxErrorKind::RecursionLimitExceeded,
                self.peek_location(),
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }
}

/// Parses `text` as a type-system document.
///
/// `source` labels every location in the result and in errors, typically
/// a file path.
pub fn parse_schema_document(
    text: &str,
    source: impl Into<Arc<str>>,
) -> Result<SchemaDocument, SyntaxError> {
    Parser::new(text, source)?.parse_schema_document()
}

/// Parses `text` as a request document of operations and fragments.
pub fn parse_request_document(
    text: &str,
    source: impl Into<Arc<str>>,
) -> Result<RequestDocument, SyntaxError> {
    Parser::new(text, source)?.parse_request_document()
}
