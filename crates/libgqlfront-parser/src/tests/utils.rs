//! Shared helpers for parser and lexer tests.

use crate::ast;
use crate::token::TokenKind;
use crate::Lexer;
use crate::SyntaxError;
use crate::SyntaxErrorKind;

pub const TEST_SOURCE: &str = "test.graphql";

pub fn parse_schema(text: &str) -> ast::SchemaDocument {
    crate::parse_schema_document(text, TEST_SOURCE)
        .unwrap_or_else(|err| panic!("expected `{text}` to parse: {err}"))
}

pub fn parse_request(text: &str) -> ast::RequestDocument {
    crate::parse_request_document(text, TEST_SOURCE)
        .unwrap_or_else(|err| panic!("expected `{text}` to parse: {err}"))
}

pub fn schema_error(text: &str) -> SyntaxError {
    match crate::parse_schema_document(text, TEST_SOURCE) {
        Ok(doc) => panic!("expected `{text}` to fail, got {doc:?}"),
        Err(err) => err,
    }
}

pub fn request_error(text: &str) -> SyntaxError {
    match crate::parse_request_document(text, TEST_SOURCE) {
        Ok(doc) => panic!("expected `{text}` to fail, got {doc:?}"),
        Err(err) => err,
    }
}

/// Lexes all of `text`, panicking on the first error.
pub fn lex_all(text: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(text, TEST_SOURCE)
        .map(|token| {
            let token = token.unwrap_or_else(|err| panic!("lex error in `{text}`: {err}"));
            (token.kind, token.value.into_owned())
        })
        .collect()
}

/// Lexes `text` until the first error and returns its kind.
pub fn lex_error(text: &str) -> SyntaxErrorKind {
    for token in Lexer::new(text, TEST_SOURCE) {
        if let Err(err) = token {
            return err.kind().clone();
        }
    }
    panic!("expected `{text}` to produce a lexical error");
}

/// The single type definition in `text`.
pub fn single_type(text: &str) -> ast::TypeDefinition {
    let doc = parse_schema(text);
    assert_eq!(doc.definitions.len(), 1, "expected one definition in `{text}`");
    match doc.definitions.into_iter().next() {
        Some(ast::TypeSystemDefinition::Type(def)) => def,
        other => panic!("expected a type definition, got {other:?}"),
    }
}

/// The first object type in `text`.
pub fn first_object_type(text: &str) -> ast::ObjectTypeDefinition {
    match single_type(text) {
        ast::TypeDefinition::Object(obj) => obj,
        other => panic!("expected an object type, got {other:?}"),
    }
}
