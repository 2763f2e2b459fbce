use crate::ast::impl_ast_node;
use crate::Location;

/// A name in reference position, e.g. an entry of an `implements` list or a
/// union member.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub location: Location,
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl_ast_node!(Name);
