use crate::ast::ExecutableDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::TypeSystemDefinition;
use std::sync::Arc;

/// A parsed type-system document.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDocument {
    pub source: Arc<str>,
    pub definitions: Vec<TypeSystemDefinition>,
}

/// A parsed request document.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDocument {
    pub source: Arc<str>,
    pub definitions: Vec<ExecutableDefinition>,
}

impl RequestDocument {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Operation(op) => Some(op),
            ExecutableDefinition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Fragment(frag) => Some(frag),
            ExecutableDefinition::Operation(_) => None,
        })
    }

    /// Looks up a fragment definition by name, e.g. to resolve a spread.
    /// Returns the first match when a name is defined more than once.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name == name)
    }

    /// Looks up an operation by name. `None` finds the anonymous operation.
    pub fn operation(&self, name: Option<&str>) -> Option<&OperationDefinition> {
        self.operations().find(|op| op.name.as_deref() == name)
    }
}
