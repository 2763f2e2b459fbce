use crate::types::Directive;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::TypeKind;
use crate::NamedRef;
use indexmap::IndexMap;
use libgqlfront_parser::Location;

/// A named type in the schema graph.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub description: String,
    pub name: String,
    pub directives: Vec<Directive>,
    pub location: Location,
    /// One of the pre-seeded `Int`, `Float`, `String`, `Boolean` or `ID`.
    pub builtin: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub description: String,
    pub name: String,
    pub interfaces: Vec<NamedRef>,
    pub directives: Vec<Directive>,
    pub fields: IndexMap<String, Field>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub description: String,
    pub name: String,
    pub interfaces: Vec<NamedRef>,
    pub directives: Vec<Directive>,
    pub fields: IndexMap<String, Field>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub description: String,
    pub name: String,
    pub directives: Vec<Directive>,
    pub members: Vec<NamedRef>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub description: String,
    pub name: String,
    pub directives: Vec<Directive>,
    pub values: IndexMap<String, EnumValue>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub description: String,
    pub name: String,
    pub directives: Vec<Directive>,
    pub fields: IndexMap<String, InputValue>,
    pub location: Location,
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => &t.name,
            Self::Object(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Scalar(t) => &t.description,
            Self::Object(t) => &t.description,
            Self::Interface(t) => &t.description,
            Self::Union(t) => &t.description,
            Self::Enum(t) => &t.description,
            Self::InputObject(t) => &t.description,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Self::Scalar(t) => &t.location,
            Self::Object(t) => &t.location,
            Self::Interface(t) => &t.location,
            Self::Union(t) => &t.location,
            Self::Enum(t) => &t.location,
            Self::InputObject(t) => &t.location,
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            Self::Scalar(t) => &t.directives,
            Self::Object(t) => &t.directives,
            Self::Interface(t) => &t.directives,
            Self::Union(t) => &t.directives,
            Self::Enum(t) => &t.directives,
            Self::InputObject(t) => &t.directives,
        }
    }

    pub(crate) fn directives_mut(&mut self) -> &mut Vec<Directive> {
        match self {
            Self::Scalar(t) => &mut t.directives,
            Self::Object(t) => &mut t.directives,
            Self::Interface(t) => &mut t.directives,
            Self::Union(t) => &mut t.directives,
            Self::Enum(t) => &mut t.directives,
            Self::InputObject(t) => &mut t.directives,
        }
    }

    /// Only the pre-seeded scalars are built in.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Scalar(ScalarType { builtin: true, .. }))
    }

    /// Fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Object(t) => Some(&t.fields),
            Self::Interface(t) => Some(&t.fields),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().and_then(|fields| fields.get(name))
    }

    /// Interfaces named in an `implements` list.
    pub fn interfaces(&self) -> &[NamedRef] {
        match self {
            Self::Object(t) => &t.interfaces,
            Self::Interface(t) => &t.interfaces,
            _ => &[],
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Self::Interface(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            Self::InputObject(t) => Some(t),
            _ => None,
        }
    }
}
