//! Location-tagged syntax tree for both document grammars.
//!
//! Nodes own their children outright and mirror the grammar one production
//! at a time. Nothing here checks names for uniqueness or resolves
//! references; that is left to whoever consumes the tree.

mod ast_node;
mod directive;
mod directive_location;
mod document;
mod executable;
mod name;
mod operation_kind;
mod type_reference;
mod type_system;
mod value;

pub(crate) use ast_node::impl_ast_node;
pub use ast_node::AstNode;
pub use directive::Argument;
pub use directive::DirectiveUsage;
pub use directive_location::DirectiveLocation;
pub use directive_location::DirectiveLocations;
pub use document::RequestDocument;
pub use document::SchemaDocument;
pub use executable::ExecutableDefinition;
pub use executable::Field;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpread;
pub use executable::InlineFragment;
pub use executable::OperationDefinition;
pub use executable::Selection;
pub use executable::SelectionSet;
pub use executable::VariableDefinition;
pub use name::Name;
pub use operation_kind::OperationKind;
pub use type_reference::ListTypeReference;
pub use type_reference::NamedTypeReference;
pub use type_reference::Nullability;
pub use type_reference::TypeReference;
pub use type_system::DirectiveDefinition;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumTypeExtension;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputObjectTypeExtension;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::InterfaceTypeExtension;
pub use type_system::ObjectTypeDefinition;
pub use type_system::ObjectTypeExtension;
pub use type_system::RootOperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::ScalarTypeExtension;
pub use type_system::SchemaDefinition;
pub use type_system::SchemaExtension;
pub use type_system::TypeDefinition;
pub use type_system::TypeExtension;
pub use type_system::TypeSystemDefinition;
pub use type_system::UnionTypeDefinition;
pub use type_system::UnionTypeExtension;
pub use value::write_string_literal;
pub use value::ObjectField;
pub use value::Value;
pub use value::ValueKind;
