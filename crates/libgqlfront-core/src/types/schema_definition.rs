use crate::types::Directive;
use crate::NamedRef;
use indexmap::IndexMap;
use libgqlfront_parser::ast::OperationKind;
use libgqlfront_parser::Location;

/// The `schema { ... }` definition. A graph holds at most one.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub description: String,
    pub directives: Vec<Directive>,
    /// At most one entry per operation kind, each resolving to an object
    /// type.
    pub root_types: IndexMap<OperationKind, NamedRef>,
    pub location: Location,
}

impl SchemaDefinition {
    pub fn root_type(&self, operation: OperationKind) -> Option<&NamedRef> {
        self.root_types.get(&operation)
    }
}
