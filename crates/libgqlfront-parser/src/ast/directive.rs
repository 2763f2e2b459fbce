use crate::ast::impl_ast_node;
use crate::ast::Value;
use crate::Location;

/// An `@name(args...)` occurrence.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveUsage {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub location: Location,
}

/// A `name: value` pair inside a directive usage or a field selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
    pub location: Location,
}

impl DirectiveUsage {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

impl_ast_node!(DirectiveUsage, Argument);
