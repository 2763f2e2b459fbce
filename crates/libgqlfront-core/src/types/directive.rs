use crate::types::InputValue;
use crate::NamedRef;
use indexmap::IndexMap;
use libgqlfront_parser::ast::DirectiveLocations;
use libgqlfront_parser::ast::Value;
use libgqlfront_parser::Location;

/// `directive @name(args) repeatable? on LOCATIONS`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub description: String,
    pub name: String,
    pub arguments: IndexMap<String, InputValue>,
    pub repeatable: bool,
    pub locations: DirectiveLocations,
    pub location: Location,
    pub builtin: bool,
}

/// An applied directive, e.g. `@deprecated(reason: "old")`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    /// Resolves into the graph's directive definitions.
    pub definition: NamedRef,
    pub arguments: IndexMap<String, Value>,
    pub location: Location,
}

impl Directive {
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }
}
