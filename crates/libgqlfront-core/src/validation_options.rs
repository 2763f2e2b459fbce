/// Optional checks run by [`SchemaGraph::validate()`](crate::SchemaGraph::validate).
///
/// Both are off by default: the baseline link pass only resolves names,
/// checks reference kinds and enforces the `__` reservation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationOptions {
    /// Reject directive usages at locations their definition does not list,
    /// and repeated usages of non-`repeatable` directives at one site.
    pub check_directive_locations: bool,

    /// Reject schemas whose root operation types reuse one object type.
    pub check_distinct_root_types: bool,
}

impl ValidationOptions {
    /// Every optional check enabled.
    pub fn strict() -> Self {
        Self {
            check_directive_locations: true,
            check_distinct_root_types: true,
        }
    }
}
