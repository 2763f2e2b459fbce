//! Semantic nodes of the schema graph.
//!
//! These mirror the syntax tree but are deduplicated by name (members live
//! in [`IndexMap`](indexmap::IndexMap)s keyed by name, in declaration
//! order) and every cross-reference is a [`NamedRef`](crate::NamedRef)
//! that the link pass resolves.

mod builtins;
mod directive;
mod members;
mod schema_definition;
mod type_definition;
mod type_kind;
mod type_ref;

pub use builtins::BUILTIN_DIRECTIVE_NAMES;
pub use builtins::BUILTIN_SCALAR_NAMES;
pub(crate) use builtins::builtin_directives;
pub(crate) use builtins::builtin_types;
pub use directive::Directive;
pub use directive::DirectiveDefinition;
pub use members::EnumValue;
pub use members::Field;
pub use members::InputValue;
pub use schema_definition::SchemaDefinition;
pub use type_definition::EnumType;
pub use type_definition::InputObjectType;
pub use type_definition::InterfaceType;
pub use type_definition::ObjectType;
pub use type_definition::ScalarType;
pub use type_definition::TypeDefinition;
pub use type_definition::UnionType;
pub use type_kind::TypeKind;
pub use type_ref::ListTypeRef;
pub use type_ref::NamedTypeRef;
pub use type_ref::TypeRef;
