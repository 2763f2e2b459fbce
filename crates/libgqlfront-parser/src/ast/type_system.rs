//! Syntax nodes of the type-system grammar.
//!
//! Every definition that accepts a description stores it as a plain
//! `String`, empty when no description literal preceded the definition.

use crate::ast::impl_ast_node;
use crate::ast::AstNode;
use crate::ast::DirectiveLocations;
use crate::ast::DirectiveUsage;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::Location;
use inherent::inherent;

/// A top-level entry of a schema document.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemDefinition {
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    Directive(DirectiveDefinition),
    SchemaExtension(SchemaExtension),
    TypeExtension(TypeExtension),
}

/// The six kinds of named type definitions.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

/// `extend` forms of the six type kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension {
    Scalar(ScalarTypeExtension),
    Object(ObjectTypeExtension),
    Interface(InterfaceTypeExtension),
    Union(UnionTypeExtension),
    Enum(EnumTypeExtension),
    InputObject(InputObjectTypeExtension),
}

// =============================================================================
// Schema
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub description: String,
    pub directives: Vec<DirectiveUsage>,
    pub operation_types: Vec<RootOperationTypeDefinition>,
    pub location: Location,
}

/// `query: Query` inside a `schema { ... }` block.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition {
    pub operation: OperationKind,
    pub named_type: Name,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension {
    pub directives: Vec<DirectiveUsage>,
    pub operation_types: Vec<RootOperationTypeDefinition>,
    pub location: Location,
}

// =============================================================================
// Type definitions
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub description: String,
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: String,
    pub name: String,
    pub interfaces: Vec<Name>,
    pub directives: Vec<DirectiveUsage>,
    pub fields: Vec<FieldDefinition>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: String,
    pub name: String,
    pub interfaces: Vec<Name>,
    pub directives: Vec<DirectiveUsage>,
    pub fields: Vec<FieldDefinition>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: String,
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub members: Vec<Name>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: String,
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub values: Vec<EnumValueDefinition>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: String,
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub fields: Vec<InputValueDefinition>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub description: String,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: DirectiveLocations,
    pub location: Location,
}

// =============================================================================
// Members
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub description: String,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub ty: TypeReference,
    pub directives: Vec<DirectiveUsage>,
    pub location: Location,
}

/// An argument definition or an input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub description: String,
    pub name: String,
    pub ty: TypeReference,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveUsage>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: String,
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub location: Location,
}

// =============================================================================
// Extensions
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension {
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension {
    pub name: String,
    pub interfaces: Vec<Name>,
    pub directives: Vec<DirectiveUsage>,
    pub fields: Vec<FieldDefinition>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension {
    pub name: String,
    pub interfaces: Vec<Name>,
    pub directives: Vec<DirectiveUsage>,
    pub fields: Vec<FieldDefinition>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension {
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub members: Vec<Name>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension {
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub values: Vec<EnumValueDefinition>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension {
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub fields: Vec<InputValueDefinition>,
    pub location: Location,
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            TypeDefinition::Scalar(def) => &def.description,
            TypeDefinition::Object(def) => &def.description,
            TypeDefinition::Interface(def) => &def.description,
            TypeDefinition::Union(def) => &def.description,
            TypeDefinition::Enum(def) => &def.description,
            TypeDefinition::InputObject(def) => &def.description,
        }
    }
}

impl TypeExtension {
    /// Name of the type being extended.
    pub fn name(&self) -> &str {
        match self {
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
        }
    }
}

#[inherent]
impl AstNode for TypeSystemDefinition {
    pub fn location(&self) -> &Location {
        match self {
            TypeSystemDefinition::Schema(def) => &def.location,
            TypeSystemDefinition::Type(def) => def.location(),
            TypeSystemDefinition::Directive(def) => &def.location,
            TypeSystemDefinition::SchemaExtension(ext) => &ext.location,
            TypeSystemDefinition::TypeExtension(ext) => ext.location(),
        }
    }
}

#[inherent]
impl AstNode for TypeDefinition {
    pub fn location(&self) -> &Location {
        match self {
            TypeDefinition::Scalar(def) => &def.location,
            TypeDefinition::Object(def) => &def.location,
            TypeDefinition::Interface(def) => &def.location,
            TypeDefinition::Union(def) => &def.location,
            TypeDefinition::Enum(def) => &def.location,
            TypeDefinition::InputObject(def) => &def.location,
        }
    }
}

#[inherent]
impl AstNode for TypeExtension {
    pub fn location(&self) -> &Location {
        match self {
            TypeExtension::Scalar(ext) => &ext.location,
            TypeExtension::Object(ext) => &ext.location,
            TypeExtension::Interface(ext) => &ext.location,
            TypeExtension::Union(ext) => &ext.location,
            TypeExtension::Enum(ext) => &ext.location,
            TypeExtension::InputObject(ext) => &ext.location,
        }
    }
}

impl_ast_node!(
    SchemaDefinition,
    RootOperationTypeDefinition,
    SchemaExtension,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
);
