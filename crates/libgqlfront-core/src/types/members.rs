use crate::types::Directive;
use crate::types::TypeRef;
use indexmap::IndexMap;
use libgqlfront_parser::ast::Value;
use libgqlfront_parser::Location;

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub description: String,
    pub name: String,
    pub arguments: IndexMap<String, InputValue>,
    pub ty: TypeRef,
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// An argument definition or an input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub description: String,
    pub name: String,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub description: String,
    pub name: String,
    pub directives: Vec<Directive>,
    pub location: Location,
}
