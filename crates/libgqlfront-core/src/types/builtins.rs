use crate::types::DirectiveDefinition;
use crate::types::InputValue;
use crate::types::NamedTypeRef;
use crate::types::ScalarType;
use crate::types::TypeDefinition;
use crate::types::TypeRef;
use crate::NamedRef;
use indexmap::IndexMap;
use libgqlfront_parser::ast::DirectiveLocation;
use libgqlfront_parser::ast::DirectiveLocations;
use libgqlfront_parser::ast::Nullability;
use libgqlfront_parser::ast::Value;
use libgqlfront_parser::ast::ValueKind;
use libgqlfront_parser::Location;

pub const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

pub const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = ["skip", "include", "deprecated", "specifiedBy"];

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// The scalars every graph starts with.
pub(crate) fn builtin_types() -> Vec<TypeDefinition> {
    BUILTIN_SCALAR_NAMES
        .iter()
        .map(|name| {
            TypeDefinition::Scalar(ScalarType {
                description: String::new(),
                name: name.to_string(),
                directives: vec![],
                location: Location::builtin(),
                builtin: true,
            })
        })
        .collect()
}

/// `@skip`, `@include`, `@deprecated` and `@specifiedBy`.
pub(crate) fn builtin_directives() -> Vec<DirectiveDefinition> {
    let conditional_locations = [
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
    ];
    vec![
        directive(
            "skip",
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
            vec![argument("if", "Skipped when true.", "Boolean", Nullability::NonNull, None)],
            conditional_locations.into_iter().collect(),
        ),
        directive(
            "include",
            "Directs the executor to include this field or fragment only when the `if` argument is true.",
            vec![argument("if", "Included when true.", "Boolean", Nullability::NonNull, None)],
            conditional_locations.into_iter().collect(),
        ),
        directive(
            "deprecated",
            "Marks an element of a GraphQL schema as no longer supported.",
            vec![argument(
                "reason",
                "Explains why this element was deprecated.",
                "String",
                Nullability::Nullable,
                Some(Value::new(
                    ValueKind::String(DEFAULT_DEPRECATION_REASON.to_string()),
                    Location::builtin(),
                )),
            )],
            [
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ]
            .into_iter()
            .collect(),
        ),
        directive(
            "specifiedBy",
            "Exposes a URL that specifies the behavior of this scalar.",
            vec![argument(
                "url",
                "The URL that specifies the behavior of this scalar.",
                "String",
                Nullability::NonNull,
                None,
            )],
            [DirectiveLocation::Scalar].into_iter().collect(),
        ),
    ]
}

fn directive(
    name: &str,
    description: &str,
    arguments: Vec<InputValue>,
    locations: DirectiveLocations,
) -> DirectiveDefinition {
    DirectiveDefinition {
        description: description.to_string(),
        name: name.to_string(),
        arguments: arguments
            .into_iter()
            .map(|arg| (arg.name.clone(), arg))
            .collect::<IndexMap<_, _>>(),
        repeatable: false,
        locations,
        location: Location::builtin(),
        builtin: true,
    }
}

fn argument(
    name: &str,
    description: &str,
    type_name: &str,
    nullability: Nullability,
    default_value: Option<Value>,
) -> InputValue {
    InputValue {
        description: description.to_string(),
        name: name.to_string(),
        ty: TypeRef::Named(NamedTypeRef {
            type_ref: NamedRef::new(type_name, Location::builtin()),
            nullability,
        }),
        default_value,
        directives: vec![],
        location: Location::builtin(),
    }
}
