//! Syntax nodes of the request grammar.

use crate::ast::impl_ast_node;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveUsage;
use crate::ast::OperationKind;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::Location;
use inherent::inherent;

/// A top-level entry of a request document.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableDefinition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

/// A query, mutation or subscription. Anonymous shorthand queries
/// (`{ ... }`) have no name and `kind == Query`.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variables: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveUsage>,
    pub selection_set: SelectionSet,
    pub location: Location,
}

/// `$name: Type = default @dirs`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub ty: TypeReference,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveUsage>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<DirectiveUsage>,
    pub selection_set: SelectionSet,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveUsage>,
    pub selection_set: Option<SelectionSet>,
    pub location: Location,
}

/// `...Name @dirs`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<DirectiveUsage>,
    pub location: Location,
}

/// `... on Type @dirs { ... }`, where the type condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<DirectiveUsage>,
    pub selection_set: SelectionSet,
    pub location: Location,
}

impl Field {
    /// The key this field contributes to a response: its alias if present,
    /// otherwise its name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[inherent]
impl AstNode for ExecutableDefinition {
    pub fn location(&self) -> &Location {
        match self {
            ExecutableDefinition::Operation(op) => &op.location,
            ExecutableDefinition::Fragment(frag) => &frag.location,
        }
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn location(&self) -> &Location {
        match self {
            Selection::Field(field) => &field.location,
            Selection::FragmentSpread(spread) => &spread.location,
            Selection::InlineFragment(inline) => &inline.location,
        }
    }
}

impl_ast_node!(
    OperationDefinition,
    VariableDefinition,
    FragmentDefinition,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
);
