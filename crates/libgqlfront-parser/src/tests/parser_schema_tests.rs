//! Tests for the type-system grammar.

use crate::ast::DirectiveLocation;
use crate::ast::OperationKind;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeSystemDefinition;
use crate::ast::ValueKind;
use crate::tests::utils::first_object_type;
use crate::tests::utils::parse_schema;
use crate::tests::utils::single_type;

// =============================================================================
// Minimal definitions
// =============================================================================

/// Every definition kind parses from its minimal form with the exact name
/// and an empty description.
#[test]
fn minimal_definitions_have_empty_descriptions() {
    let cases = [
        ("scalar Foo", "Foo"),
        ("type Bar", "Bar"),
        ("interface Baz", "Baz"),
        ("union Qux", "Qux"),
        ("enum Quux", "Quux"),
        ("input Corge", "Corge"),
    ];
    for (text, name) in cases {
        let def = single_type(text);
        assert_eq!(def.name(), name, "{text}");
        assert_eq!(def.description(), "", "{text}");
    }
}

#[test]
fn minimal_schema_definition() {
    let doc = parse_schema("schema { query: Q }");
    let Some(TypeSystemDefinition::Schema(schema)) = doc.definitions.first() else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.description, "");
    assert_eq!(schema.operation_types.len(), 1);
    assert_eq!(schema.operation_types[0].operation, OperationKind::Query);
    assert_eq!(schema.operation_types[0].named_type.as_str(), "Q");
}

#[test]
fn minimal_directive_definition() {
    let doc = parse_schema("directive @d on FIELD");
    let Some(TypeSystemDefinition::Directive(directive)) = doc.definitions.first() else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name, "d");
    assert_eq!(directive.description, "");
    assert!(!directive.repeatable);
    assert!(directive.arguments.is_empty());
    assert_eq!(directive.locations.len(), 1);
    assert!(directive.locations.contains(DirectiveLocation::Field));
}

#[test]
fn empty_document_has_no_definitions() {
    assert!(parse_schema("").definitions.is_empty());
    assert!(parse_schema("# nothing here\n").definitions.is_empty());
}

// =============================================================================
// Descriptions
// =============================================================================

#[test]
fn descriptions_attach_to_the_next_definition() {
    let doc = parse_schema(
        r#"
        "a scalar"
        scalar A
        """
        an object
        """
        type B
        scalar C
        "#,
    );
    let descriptions: Vec<&str> = doc
        .definitions
        .iter()
        .map(|def| match def {
            TypeSystemDefinition::Type(ty) => ty.description(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(descriptions, vec!["a scalar", "an object", ""]);
}

#[test]
fn member_descriptions() {
    let obj = first_object_type(
        r#"type T {
            "field doc"
            f(
              "arg doc"
              a: Int
              b: Int
            ): Int
            g: Int
        }"#,
    );
    assert_eq!(obj.fields[0].description, "field doc");
    assert_eq!(obj.fields[0].arguments[0].description, "arg doc");
    assert_eq!(obj.fields[0].arguments[1].description, "");
    assert_eq!(obj.fields[1].description, "");
}

#[test]
fn described_field_location_is_its_description() {
    let obj = first_object_type("type T {\n  \"doc\" f: Int\n}");
    assert_eq!(obj.fields[0].location.column(), 2);
}

// =============================================================================
// Type definitions
// =============================================================================

#[test]
fn object_with_interfaces_directives_and_fields() {
    let obj = first_object_type(
        "type User implements & Node & Entity @key(fields: \"id\") {
            id: ID!
            friends(first: Int = 10, after: String): [User!]! @deprecated
        }",
    );
    let interfaces: Vec<&str> = obj.interfaces.iter().map(|n| n.as_str()).collect();
    assert_eq!(interfaces, vec!["Node", "Entity"]);
    assert_eq!(obj.directives.len(), 1);
    assert_eq!(obj.directives[0].name, "key");
    assert_eq!(
        obj.directives[0].argument("fields").map(|a| &a.value.kind),
        Some(&ValueKind::String("id".to_string())),
    );
    assert_eq!(obj.fields.len(), 2);

    let friends = &obj.fields[1];
    assert_eq!(friends.name, "friends");
    assert_eq!(friends.arguments.len(), 2);
    assert_eq!(
        friends.arguments[0].default_value.as_ref().map(|v| &v.kind),
        Some(&ValueKind::Int("10".to_string())),
    );
    assert!(friends.arguments[1].default_value.is_none());
    assert_eq!(friends.ty.to_string(), "[User!]!");
    assert_eq!(friends.directives[0].name, "deprecated");
}

#[test]
fn interface_implementing_interfaces() {
    let TypeDefinition::Interface(iface) =
        single_type("interface Named implements Node { name: String }")
    else {
        panic!("expected an interface");
    };
    assert_eq!(iface.interfaces[0].as_str(), "Node");
    assert_eq!(iface.fields[0].name, "name");
}

#[test]
fn union_members_with_optional_leading_pipe() {
    for text in ["union U = A | B | C", "union U = | A | B | C", "union U @d = A|B|C"] {
        let TypeDefinition::Union(union) = single_type(text) else {
            panic!("expected a union");
        };
        let members: Vec<&str> = union.members.iter().map(|n| n.as_str()).collect();
        assert_eq!(members, vec!["A", "B", "C"], "{text}");
    }
}

#[test]
fn enum_values() {
    let TypeDefinition::Enum(en) = single_type(
        r#"enum Color { "the red one" RED GREEN @deprecated(reason: "no") BLUE }"#,
    ) else {
        panic!("expected an enum");
    };
    let names: Vec<&str> = en.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["RED", "GREEN", "BLUE"]);
    assert_eq!(en.values[0].description, "the red one");
    assert_eq!(en.values[1].directives[0].name, "deprecated");
}

#[test]
fn input_object_fields() {
    let TypeDefinition::InputObject(input) =
        single_type("input Point { x: Float! = 0.0 y: Float! = 0 }")
    else {
        panic!("expected an input object");
    };
    assert_eq!(input.fields.len(), 2);
    assert_eq!(
        input.fields[0].default_value.as_ref().map(|v| &v.kind),
        Some(&ValueKind::Float("0.0".to_string())),
    );
}

/// Duplicate member names are accepted here; the semantic layer rejects
/// them.
#[test]
fn duplicate_members_are_kept() {
    let obj = first_object_type("type T { a: Int a: String }");
    assert_eq!(obj.fields.len(), 2);
}

#[test]
fn directive_definition_with_arguments_and_locations() {
    let doc = parse_schema(
        "directive @foo (bar: Int = 3) repeatable on
            | FIELD_DEFINITION
            | ENUM
            | INPUT_FIELD_DEFINITION",
    );
    let Some(TypeSystemDefinition::Directive(directive)) = doc.definitions.first() else {
        panic!("expected a directive definition");
    };
    assert!(directive.repeatable);
    assert_eq!(directive.arguments[0].name, "bar");
    assert_eq!(
        directive.arguments[0].default_value.as_ref().map(|v| &v.kind),
        Some(&ValueKind::Int("3".to_string())),
    );
    let locations: Vec<DirectiveLocation> = directive.locations.iter().collect();
    assert_eq!(
        locations,
        vec![
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::Enum,
            DirectiveLocation::InputFieldDefinition,
        ],
    );
}

#[test]
fn schema_definition_with_all_roots() {
    let doc = parse_schema(
        "\"root\" schema @d { query: Q mutation: M subscription: S }",
    );
    let Some(TypeSystemDefinition::Schema(schema)) = doc.definitions.first() else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.description, "root");
    assert_eq!(schema.directives[0].name, "d");
    let roots: Vec<(OperationKind, &str)> = schema
        .operation_types
        .iter()
        .map(|root| (root.operation, root.named_type.as_str()))
        .collect();
    assert_eq!(
        roots,
        vec![
            (OperationKind::Query, "Q"),
            (OperationKind::Mutation, "M"),
            (OperationKind::Subscription, "S"),
        ],
    );
}

/// Keywords are not reserved as names.
#[test]
fn keywords_as_names() {
    let obj = first_object_type("type type { type: type input: schema on: on }");
    assert_eq!(obj.name, "type");
    let names: Vec<&str> = obj.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["type", "input", "on"]);
}

// =============================================================================
// Extensions
// =============================================================================

#[test]
fn every_extension_form() {
    let doc = parse_schema(
        "extend schema @d
         extend scalar S @d
         extend type T implements I
         extend interface I { f: Int }
         extend union U = A
         extend enum E { X }
         extend input In { f: Int }",
    );
    assert_eq!(doc.definitions.len(), 7);
    assert!(matches!(doc.definitions[0], TypeSystemDefinition::SchemaExtension(_)));

    let names: Vec<&str> = doc.definitions[1..]
        .iter()
        .map(|def| match def {
            TypeSystemDefinition::TypeExtension(ext) => ext.name(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["S", "T", "I", "U", "E", "In"]);
}

#[test]
fn extension_location_is_the_extend_keyword() {
    let doc = parse_schema("  extend type T @d");
    let Some(TypeSystemDefinition::TypeExtension(TypeExtension::Object(ext))) =
        doc.definitions.first()
    else {
        panic!("expected an object extension");
    };
    assert_eq!(ext.location.column(), 2);
    assert_eq!(ext.directives[0].name, "d");
}

#[test]
fn schema_extension_with_operation_types() {
    let doc = parse_schema("extend schema { mutation: M }");
    let Some(TypeSystemDefinition::SchemaExtension(ext)) = doc.definitions.first() else {
        panic!("expected a schema extension");
    };
    assert!(ext.directives.is_empty());
    assert_eq!(ext.operation_types[0].operation, OperationKind::Mutation);
}
