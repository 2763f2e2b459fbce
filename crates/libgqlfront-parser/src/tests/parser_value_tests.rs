//! Tests for value literals in constant and non-constant positions.

use crate::ast::ExecutableDefinition;
use crate::ast::Selection;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::tests::utils::first_object_type;
use crate::tests::utils::parse_request;
use crate::tests::utils::request_error;
use crate::tests::utils::schema_error;
use crate::SyntaxErrorKind;

/// Parses `value` as the argument of a field in a shorthand query.
fn argument_value(value: &str) -> Value {
    let doc = parse_request(&format!("{{ f(a: {value}) }}"));
    let Some(ExecutableDefinition::Operation(op)) = doc.definitions.into_iter().next() else {
        panic!("expected an operation");
    };
    let Some(Selection::Field(field)) = op.selection_set.selections.into_iter().next() else {
        panic!("expected a field");
    };
    field.arguments.into_iter().next().unwrap().value
}

/// Parses `value` as the default of an argument definition.
fn default_value(value: &str) -> Value {
    let obj = first_object_type(&format!("type T {{ f(a: In = {value}): Int }}"));
    obj.fields[0].arguments[0].default_value.clone().unwrap()
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn keywords_become_null_and_booleans() {
    assert_eq!(argument_value("null").kind, ValueKind::Null);
    assert_eq!(argument_value("true").kind, ValueKind::Boolean(true));
    assert_eq!(argument_value("false").kind, ValueKind::Boolean(false));
}

#[test]
fn other_names_are_enum_values() {
    assert_eq!(argument_value("RED").kind, ValueKind::Enum("RED".to_string()));
    assert_eq!(argument_value("nulls").kind, ValueKind::Enum("nulls".to_string()));
}

/// Numbers keep their exact lexeme.
#[test]
fn numbers_keep_their_lexeme() {
    assert_eq!(argument_value("-0").kind, ValueKind::Int("-0".to_string()));
    assert_eq!(
        argument_value("1.50e10").kind,
        ValueKind::Float("1.50e10".to_string()),
    );
    assert_eq!(
        argument_value("123456789012345678901234567890").kind,
        ValueKind::Int("123456789012345678901234567890".to_string()),
    );
}

#[test]
fn strings_and_block_strings() {
    assert_eq!(
        argument_value(r#""a\nb""#).kind,
        ValueKind::String("a\nb".to_string()),
    );
    assert_eq!(
        argument_value("\"\"\"\n    block\n\"\"\"").kind,
        ValueKind::String("block".to_string()),
    );
}

#[test]
fn variables_are_allowed_in_arguments() {
    let value = argument_value("$id");
    assert_eq!(value.kind, ValueKind::Variable("id".to_string()));
    assert!(!value.is_const());
}

// =============================================================================
// Lists and objects
// =============================================================================

#[test]
fn lists_may_be_empty_and_nested() {
    let value = argument_value("[[], [1, $x], \"s\"]");
    let ValueKind::List(items) = &value.kind else {
        panic!("expected a list");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].kind, ValueKind::List(Vec::new()));
    assert!(!value.is_const());
    assert_eq!(value.to_string(), "[[], [1, $x], \"s\"]");
}

#[test]
fn objects_keep_field_order_and_duplicates() {
    let value = argument_value("{ b: 1, a: { c: null }, b: 2 }");
    let ValueKind::Object(fields) = &value.kind else {
        panic!("expected an object");
    };
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "b"]);
    assert!(value.is_const());
    assert_eq!(value.to_string(), "{b: 1, a: {c: null}, b: 2}");
}

#[test]
fn empty_object() {
    assert_eq!(argument_value("{}").kind, ValueKind::Object(Vec::new()));
}

#[test]
fn value_locations() {
    let value = argument_value("[1, 2]");
    assert_eq!(value.location.column(), 7);
    let ValueKind::List(items) = &value.kind else {
        panic!("expected a list");
    };
    assert_eq!(items[1].location.column(), 11);
}

#[test]
fn display_escapes_strings() {
    let value = argument_value(r#""q\"\\\t""#);
    assert_eq!(value.to_string(), r#""q\"\\\t""#);
}

// =============================================================================
// Constant contexts
// =============================================================================

#[test]
fn default_values_are_constant() {
    assert_eq!(default_value("3").kind, ValueKind::Int("3".to_string()));
    assert!(default_value("[{ a: [ENUM] }]").is_const());
}

#[test]
fn variable_in_argument_default_is_rejected() {
    let err = schema_error("type T { f(a: Int = $v): Int }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::TokenNotAllowed {
            found: "`$`".to_string(),
            context: "an input value default".to_string(),
        },
    );
    assert_eq!(err.message(), "`$` is not allowed in an input value default");
}

#[test]
fn nested_variable_in_const_context_is_rejected() {
    let err = schema_error("input I { f: [Int] = [1, $v] }");
    assert_eq!(err.location().column(), 25);
}

#[test]
fn variable_in_type_system_directive_is_rejected() {
    let err = schema_error("scalar S @dir(a: $v)");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::TokenNotAllowed {
            found: "`$`".to_string(),
            context: "a constant directive argument".to_string(),
        },
    );
}

#[test]
fn variable_in_variable_default_is_rejected() {
    let err = request_error("query Q($a: Int = $b) { f }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::TokenNotAllowed {
            found: "`$`".to_string(),
            context: "a variable default value".to_string(),
        },
    );
}

#[test]
fn missing_value() {
    let err = request_error("{ f(a: ) }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedToken {
            expected: "a value".to_string(),
            found: "`)`".to_string(),
        },
    );
}

#[test]
fn unclosed_list_reaches_end_of_input() {
    let err = request_error("{ f(a: [1, 2");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedEof {
            expected: "a value".to_string(),
        },
    );
}

/// Nesting beyond the recursion limit is a syntax error, not a stack
/// overflow.
#[test]
fn deeply_nested_lists_hit_the_recursion_limit() {
    let text = format!("{{ f(a: {}1{}) }}", "[".repeat(200), "]".repeat(200));
    let err = request_error(&text);
    assert_eq!(err.kind(), &SyntaxErrorKind::RecursionLimitExceeded);
}
