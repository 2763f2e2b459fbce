//! Tests for the request grammar.

use crate::ast::ExecutableDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::ValueKind;
use crate::tests::utils::parse_request;

#[test]
fn shorthand_query() {
    let doc = parse_request("{ me { name } }");
    let op = doc.operation(None).unwrap();
    assert_eq!(op.kind, OperationKind::Query);
    assert!(op.name.is_none());
    assert!(op.variables.is_empty());
    let Selection::Field(me) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(me.name, "me");
    assert_eq!(me.selection_set.as_ref().unwrap().selections.len(), 1);
}

#[test]
fn named_operations_of_each_kind() {
    let doc = parse_request(
        "query Q { a }
         mutation M { b }
         subscription S { c }
         query { d }",
    );
    let kinds: Vec<(OperationKind, Option<&str>)> = doc
        .operations()
        .map(|op| (op.kind, op.name.as_deref()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (OperationKind::Query, Some("Q")),
            (OperationKind::Mutation, Some("M")),
            (OperationKind::Subscription, Some("S")),
            (OperationKind::Query, None),
        ],
    );
    assert_eq!(doc.operation(Some("M")).unwrap().kind, OperationKind::Mutation);
    assert!(doc.operation(Some("missing")).is_none());
}

#[test]
fn variable_definitions() {
    let doc = parse_request(
        "query Q($id: ID!, $first: Int = 10 @tag(name: \"x\"), $tags: [String!]) @op { a }",
    );
    let op = doc.operation(Some("Q")).unwrap();
    assert_eq!(op.variables.len(), 3);
    assert_eq!(op.variables[0].name, "id");
    assert_eq!(op.variables[0].ty.to_string(), "ID!");
    assert_eq!(
        op.variables[1].default_value.as_ref().map(|v| &v.kind),
        Some(&ValueKind::Int("10".to_string())),
    );
    assert_eq!(op.variables[1].directives[0].name, "tag");
    assert_eq!(op.variables[2].ty.list_depth(), 1);
    assert_eq!(op.directives[0].name, "op");
    assert_eq!(op.variables[0].location.column(), 8);
}

#[test]
fn fields_with_alias_arguments_and_directives() {
    let doc = parse_request("{ small: picture(size: 64, crop: $c) @include(if: $show) }");
    let op = doc.operation(None).unwrap();
    let Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(field.alias.as_deref(), Some("small"));
    assert_eq!(field.name, "picture");
    assert_eq!(field.response_key(), "small");
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(
        field.arguments[1].value.kind,
        ValueKind::Variable("c".to_string()),
    );
    assert_eq!(field.directives[0].name, "include");
    assert!(field.selection_set.is_none());
    assert_eq!(field.location.column(), 2);
}

#[test]
fn response_key_defaults_to_name() {
    let doc = parse_request("{ plain }");
    let Selection::Field(field) = &doc.operation(None).unwrap().selection_set.selections[0]
    else {
        panic!("expected a field");
    };
    assert_eq!(field.response_key(), "plain");
}

#[test]
fn fragment_spreads_and_inline_fragments() {
    let doc = parse_request(
        "{
            ...UserFields @skip(if: false)
            ... on User { id }
            ... @include(if: true) { name }
            ... { age }
         }",
    );
    let selections = &doc.operation(None).unwrap().selection_set.selections;
    assert_eq!(selections.len(), 4);

    let Selection::FragmentSpread(spread) = &selections[0] else {
        panic!("expected a fragment spread");
    };
    assert_eq!(spread.name, "UserFields");
    assert_eq!(spread.directives[0].name, "skip");

    let Selection::InlineFragment(typed) = &selections[1] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(typed.type_condition.as_deref(), Some("User"));

    let Selection::InlineFragment(directed) = &selections[2] else {
        panic!("expected an inline fragment");
    };
    assert!(directed.type_condition.is_none());
    assert_eq!(directed.directives[0].name, "include");

    let Selection::InlineFragment(bare) = &selections[3] else {
        panic!("expected an inline fragment");
    };
    assert!(bare.type_condition.is_none());
    assert!(bare.directives.is_empty());
}

#[test]
fn fragment_definitions_and_lookup() {
    let doc = parse_request(
        "query { ...F }
         fragment F on User @dir { id ...G }
         fragment G on User { name }",
    );
    assert_eq!(doc.fragments().count(), 2);
    let f = doc.fragment("F").unwrap();
    assert_eq!(f.type_condition, "User");
    assert_eq!(f.directives[0].name, "dir");
    assert_eq!(f.selection_set.selections.len(), 2);
    assert!(doc.fragment("H").is_none());
    assert!(matches!(doc.definitions[1], ExecutableDefinition::Fragment(_)));
}

#[test]
fn deeply_nested_selections_within_the_limit() {
    let depth = 40;
    let text = format!("{}leaf{}", "{ a ".repeat(depth), " }".repeat(depth));
    let doc = parse_request(&text);
    let mut set = &doc.operation(None).unwrap().selection_set;
    let mut levels = 1;
    while let Some(Selection::Field(field)) = set.selections.first() {
        let Some(inner) = &field.selection_set else {
            break;
        };
        set = inner;
        levels += 1;
    }
    assert_eq!(levels, depth);
}

#[test]
fn empty_request_document() {
    assert!(parse_request("  # nothing\n").definitions.is_empty());
}
