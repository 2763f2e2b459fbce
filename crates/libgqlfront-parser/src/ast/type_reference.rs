use crate::ast::impl_ast_node;
use crate::ast::AstNode;
use crate::Location;
use inherent::inherent;

/// Whether a type reference ends in `!`.
///
/// Nullability is stored on each wrapper rather than modeled as its own
/// wrapper node, so `[String!]!` is a non-null list around a non-null
/// named type and redundant same-level wrapping cannot be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Nullability {
    NonNull,
    Nullable,
}

impl Nullability {
    pub fn is_non_null(&self) -> bool {
        matches!(self, Nullability::NonNull)
    }
}

/// A type as written in a field, argument, input field or variable
/// definition.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeReference {
    Named(NamedTypeReference),
    List(ListTypeReference),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeReference {
    pub name: String,
    pub nullability: Nullability,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeReference {
    pub item: Box<TypeReference>,
    pub nullability: Nullability,
    pub location: Location,
}

impl TypeReference {
    pub fn nullability(&self) -> Nullability {
        match self {
            TypeReference::Named(named) => named.nullability,
            TypeReference::List(list) => list.nullability,
        }
    }

    /// The named type at the bottom of any list wrappers.
    pub fn innermost(&self) -> &NamedTypeReference {
        match self {
            TypeReference::Named(named) => named,
            TypeReference::List(list) => list.item.innermost(),
        }
    }

    /// Number of list wrappers around the innermost named type.
    pub fn list_depth(&self) -> usize {
        match self {
            TypeReference::Named(_) => 0,
            TypeReference::List(list) => 1 + list.item.list_depth(),
        }
    }
}

impl std::fmt::Display for TypeReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeReference::Named(named) => f.write_str(&named.name)?,
            TypeReference::List(list) => write!(f, "[{}]", list.item)?,
        }
        if self.nullability().is_non_null() {
            f.write_str("!")?;
        }
        Ok(())
    }
}

#[inherent]
impl AstNode for TypeReference {
    pub fn location(&self) -> &Location {
        match self {
            TypeReference::Named(named) => &named.location,
            TypeReference::List(list) => &list.location,
        }
    }
}

impl_ast_node!(NamedTypeReference, ListTypeReference);
