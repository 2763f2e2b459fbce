use crate::Location;

/// Trait implemented by every syntax node.
///
/// Nodes implement it via `#[inherent] impl AstNode`, so `location()` is
/// callable without importing the trait while generic diagnostics code can
/// still bound on it.
pub trait AstNode {
    /// Where the node's first token starts.
    fn location(&self) -> &Location;
}

/// Implements [`AstNode`] for node structs that store a `location` field.
macro_rules! impl_ast_node {
    ($($node:ty),+ $(,)?) => {
        $(
            #[inherent::inherent]
            impl $crate::ast::AstNode for $node {
                pub fn location(&self) -> &$crate::Location {
                    &self.location
                }
            }
        )+
    };
}

pub(crate) use impl_ast_node;
