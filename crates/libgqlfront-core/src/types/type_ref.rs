use crate::NamedRef;
use libgqlfront_parser::ast;
use libgqlfront_parser::ast::Nullability;
use libgqlfront_parser::Location;

/// The type of a field, argument or input field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeRef {
    Named(NamedTypeRef),
    List(ListTypeRef),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedTypeRef {
    pub type_ref: NamedRef,
    pub nullability: Nullability,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListTypeRef {
    pub item: Box<TypeRef>,
    pub nullability: Nullability,
    pub location: Location,
}

impl TypeRef {
    pub(crate) fn from_ast(ty: &ast::TypeReference) -> Self {
        match ty {
            ast::TypeReference::Named(named) => Self::Named(NamedTypeRef {
                type_ref: NamedRef::new(named.name.clone(), named.location.clone()),
                nullability: named.nullability,
            }),
            ast::TypeReference::List(list) => Self::List(ListTypeRef {
                item: Box::new(Self::from_ast(&list.item)),
                nullability: list.nullability,
                location: list.location.clone(),
            }),
        }
    }

    pub fn nullability(&self) -> Nullability {
        match self {
            Self::Named(named) => named.nullability,
            Self::List(list) => list.nullability,
        }
    }

    /// The named type under all list wrappers.
    pub fn innermost(&self) -> &NamedTypeRef {
        match self {
            Self::Named(named) => named,
            Self::List(list) => list.item.innermost(),
        }
    }

    pub(crate) fn innermost_mut(&mut self) -> &mut NamedTypeRef {
        match self {
            Self::Named(named) => named,
            Self::List(list) => list.item.innermost_mut(),
        }
    }

    /// Shorthand for the name of the innermost named type.
    pub fn type_name(&self) -> &str {
        self.innermost().type_ref.name()
    }

    pub fn location(&self) -> &Location {
        match self {
            Self::Named(named) => named.type_ref.location(),
            Self::List(list) => &list.location,
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(named) => f.write_str(named.type_ref.name())?,
            Self::List(list) => write!(f, "[{}]", list.item)?,
        }
        if self.nullability().is_non_null() {
            f.write_str("!")?;
        }
        Ok(())
    }
}
