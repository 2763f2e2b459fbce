//! Tests for syntax error kinds, messages and locations.

use crate::tests::utils::request_error;
use crate::tests::utils::schema_error;
use crate::DocumentKind;
use crate::SyntaxErrorKind;

// =============================================================================
// Top level
// =============================================================================

#[test]
fn request_keyword_in_schema_document() {
    let err = schema_error("query Q { a }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnrecognizedKeyword {
            keyword: "query".to_string(),
            document: DocumentKind::Schema,
        },
    );
    assert_eq!(err.message(), "Unrecognized keyword `query` in schema document");
}

#[test]
fn shorthand_query_in_schema_document() {
    let err = schema_error("{ a }");
    assert_eq!(
        err.message(),
        "Unrecognized token `{` at the top level of a schema document",
    );
}

#[test]
fn type_system_keyword_in_request_document() {
    let err = request_error("type T { a: Int }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnrecognizedKeyword {
            keyword: "type".to_string(),
            document: DocumentKind::Request,
        },
    );
}

#[test]
fn extend_in_request_document() {
    let err = request_error("extend type T @d");
    assert_eq!(err.kind(), &SyntaxErrorKind::ExtensionNotAllowed);
    assert_eq!(
        err.message(),
        "`extend` definitions are not allowed in a request document",
    );
}

#[test]
fn stray_token_in_request_document() {
    let err = request_error("query Q { a } 42");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnrecognizedToken {
            found: "Int \"42\"".to_string(),
            document: DocumentKind::Request,
        },
    );
}

#[test]
fn description_without_definition() {
    let err = schema_error("\"dangling\"");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedEof {
            expected: "a definition after description".to_string(),
        },
    );
}

#[test]
fn two_descriptions_in_a_row() {
    let err = schema_error("\"one\" \"two\" scalar S");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedToken {
            expected: "a definition after description".to_string(),
            found: "String".to_string(),
        },
    );
    assert_eq!(err.location().column(), 6);
}

#[test]
fn described_extension_is_rejected() {
    let err = schema_error("\"doc\" extend scalar S @d");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedToken {
            expected: "a definition after description".to_string(),
            found: "Name \"extend\"".to_string(),
        },
    );
}

// =============================================================================
// Definitions
// =============================================================================

#[test]
fn missing_colon_in_field() {
    let err = schema_error("type T { f Int }");
    assert_eq!(err.message(), "Expected `:` but found Name \"Int\"");
}

#[test]
fn empty_field_set_is_rejected() {
    let err = schema_error("type T {}");
    assert_eq!(err.message(), "Expected Name but found `}`");
}

#[test]
fn empty_argument_list_is_rejected() {
    let err = schema_error("type T { f(): Int }");
    assert_eq!(err.message(), "Expected Name but found `)`");
}

#[test]
fn enum_value_cannot_be_a_literal_keyword() {
    for keyword in ["true", "false", "null"] {
        let err = schema_error(&format!("enum E {{ A {keyword} }}"));
        assert_eq!(
            err.kind(),
            &SyntaxErrorKind::UnexpectedToken {
                expected: "an enum value name".to_string(),
                found: format!("Name \"{keyword}\""),
            },
        );
    }
}

#[test]
fn directive_definition_requires_on() {
    let err = schema_error("directive @d FIELD");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedKeyword {
            expected: "on".to_string(),
            found: "Name \"FIELD\"".to_string(),
        },
    );
    assert_eq!(err.message(), "Expected keyword `on` but found Name \"FIELD\"");
}

#[test]
fn unknown_directive_location() {
    let err = schema_error("directive @d on FIELD | NOWHERE");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnknownDirectiveLocation {
            name: "NOWHERE".to_string(),
        },
    );
    assert_eq!(err.location().column(), 24);
}

#[test]
fn directive_locations_must_not_be_empty() {
    let err = schema_error("directive @d on");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedEof {
            expected: "a directive location".to_string(),
        },
    );
}

#[test]
fn bad_root_operation_type() {
    let err = schema_error("schema { fragment: F }");
    assert_eq!(
        err.message(),
        "Expected `query`, `mutation` or `subscription` but found Name \"fragment\"",
    );
}

#[test]
fn union_without_members_after_equals() {
    let err = schema_error("union U =");
    assert_eq!(err.message(), "Unexpected end of input, expected Name");
}

// =============================================================================
// Extensions
// =============================================================================

#[test]
fn unrecognized_extension() {
    let err = schema_error("extend directive @d on FIELD");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnrecognizedExtension {
            keyword: "directive".to_string(),
        },
    );
    assert_eq!(err.message(), "Unrecognized type extension `extend directive`");
}

/// Each `extend` form needs at least one of its clauses; the error points
/// at `extend`.
#[test]
fn empty_extensions() {
    let cases = [
        ("extend schema", "schema", "directives or root operation types"),
        ("extend scalar S", "scalar", "directives"),
        ("extend type T", "type", "an implements clause, directives or a field set"),
        (
            "extend interface I",
            "interface",
            "an implements clause, directives or a field set",
        ),
        ("extend union U", "union", "directives or union members"),
        ("extend enum E", "enum", "directives or enum values"),
        ("extend input I", "input", "directives or input fields"),
    ];
    for (text, construct, clauses) in cases {
        let err = schema_error(&format!("scalar X\n{text}"));
        assert_eq!(
            err.kind(),
            &SyntaxErrorKind::EmptyExtension { construct, clauses },
            "{text}",
        );
        assert_eq!(err.location().line(), 1, "{text}");
        assert_eq!(err.location().column(), 0, "{text}");
    }
}

#[test]
fn empty_extension_message() {
    let err = schema_error("extend union U");
    assert_eq!(
        err.message(),
        "`extend union` must specify at least one of directives or union members",
    );
}

// =============================================================================
// Request documents
// =============================================================================

#[test]
fn fragment_named_on() {
    let err = request_error("fragment on on User { id }");
    assert_eq!(err.kind(), &SyntaxErrorKind::FragmentNamedOn);
    assert_eq!(err.location().column(), 9);
}

#[test]
fn fragment_requires_type_condition() {
    let err = request_error("fragment F User { id }");
    assert_eq!(err.message(), "Expected keyword `on` but found Name \"User\"");
}

#[test]
fn empty_selection_set() {
    let err = request_error("{ }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::InvalidSelection {
            found: "`}`".to_string(),
        },
    );
    assert_eq!(err.message(), "Invalid token `}` in selection set");
}

#[test]
fn unclosed_selection_set() {
    let err = request_error("{ a { b }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedEof {
            expected: "a selection".to_string(),
        },
    );
}

#[test]
fn invalid_token_in_selection_set() {
    let err = request_error("{ a 1 }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::InvalidSelection {
            found: "Int \"1\"".to_string(),
        },
    );
}

#[test]
fn variable_definition_requires_dollar() {
    let err = request_error("query Q(id: ID) { a }");
    assert_eq!(err.message(), "Expected `$` but found Name \"id\"");
}

#[test]
fn empty_argument_list_in_field() {
    let err = request_error("{ f() }");
    assert_eq!(err.message(), "Expected Name but found `)`");
}

#[test]
fn selection_sets_beyond_the_limit() {
    let text = format!("{}a{}", "{ a ".repeat(100), " }".repeat(100));
    assert_eq!(
        request_error(&text).kind(),
        &SyntaxErrorKind::RecursionLimitExceeded,
    );
}

// =============================================================================
// Lexical errors surface through the parser
// =============================================================================

#[test]
fn lexical_error_in_schema() {
    let err = schema_error("type T { f(a: Int = 01): Int }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::LeadingZero {
            lexeme: "01".to_string(),
        },
    );
    assert_eq!(
        err.to_string(),
        "test.graphql:1:21: error: Invalid number `01`: leading zeros are not allowed",
    );
}

#[test]
fn lexical_error_in_request() {
    let err = request_error("{ a .. b }");
    assert_eq!(err.kind(), &SyntaxErrorKind::IncompleteSpread);
}
