//! Lexer and recursive-descent parser for GraphQL-style schema (SDL) and
//! request documents.
//!
//! The two grammars share one [`Lexer`] and every value, type-reference,
//! directive and selection production. Parsing produces a location-tagged
//! syntax tree ([`ast`]); the first lexical or syntactic problem is
//! returned as a [`SyntaxError`].
//!
//! ```rust
//! let doc = libgqlfront_parser::parse_schema_document(
//!     "type Query { hello: String }",
//!     "schema.graphql",
//! ).unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//! ```

pub mod ast;
mod document_kind;
mod lexer;
mod location;
mod parser;
mod syntax_error;
pub mod token;
mod token_stream;

pub use document_kind::DocumentKind;
pub use lexer::Lexer;
pub use location::Location;
pub use parser::parse_request_document;
pub use parser::parse_schema_document;
pub use parser::Parser;
pub use syntax_error::SyntaxError;
pub use syntax_error::SyntaxErrorKind;
pub use token_stream::TokenStream;

/// Creates a [`Lexer`] over `text`; iterate it to pull tokens.
pub fn lex<'src>(text: &'src str, source: impl Into<std::sync::Arc<str>>) -> Lexer<'src> {
    Lexer::new(text, source)
}

#[cfg(test)]
mod tests;
