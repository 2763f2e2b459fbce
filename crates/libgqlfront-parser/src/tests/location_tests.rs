//! Tests for `Location` and the positions the parser attaches to nodes.

use crate::ast::TypeDefinition;
use crate::ast::TypeSystemDefinition;
use crate::tests::utils::first_object_type;
use crate::tests::utils::parse_schema;
use crate::tests::utils::schema_error;
use crate::Location;

/// Verifies that `Display` renders 1-based line and column.
#[test]
fn display_is_one_based() {
    let location = Location::new("schema.graphql".into(), 2, 4, 4, 30);
    assert_eq!(location.to_string(), "schema.graphql:3:5");
}

#[test]
fn start_of_and_builtin() {
    let start = Location::start_of("a.graphql");
    assert_eq!(start.source(), "a.graphql");
    assert_eq!((start.line(), start.column(), start.offset()), (0, 0, 0));
    assert_eq!(Location::builtin().source(), "<builtin>");
}

/// A described definition is located at its description.
#[test]
fn definition_location_starts_at_description() {
    let doc = parse_schema("\n\n  \"doc\"\n  type Foo { a: Int }");
    let Some(TypeSystemDefinition::Type(TypeDefinition::Object(obj))) =
        doc.definitions.first()
    else {
        panic!("expected an object type");
    };
    assert_eq!(obj.location.line(), 2);
    assert_eq!(obj.location.column(), 2);
}

#[test]
fn undescribed_definition_location_is_its_keyword() {
    let obj = first_object_type("   type Foo {\n  bar: Int\n}");
    assert_eq!(obj.location.line(), 0);
    assert_eq!(obj.location.column(), 3);
    assert_eq!(obj.fields[0].location.line(), 1);
    assert_eq!(obj.fields[0].location.column(), 2);
    assert_eq!(obj.fields[0].ty.location().column(), 7);
}

#[test]
fn errors_carry_the_document_source() {
    let err = crate::parse_schema_document("type", "my/schema.graphql").unwrap_err();
    assert_eq!(err.location().source(), "my/schema.graphql");
    assert_eq!(
        err.to_string(),
        "my/schema.graphql:1:5: error: Unexpected end of input, expected Name",
    );
}

#[test]
fn error_locations_point_at_the_offending_token() {
    let err = schema_error("type Foo {\n  bar Int\n}");
    assert_eq!(err.location().line(), 1);
    assert_eq!(err.location().column(), 6);
}
