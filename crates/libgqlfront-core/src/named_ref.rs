use libgqlfront_parser::Location;

/// A by-name reference from one definition to another definition stored in
/// one of the [`SchemaGraph`](crate::SchemaGraph)'s arenas.
///
/// A freshly built reference only knows the name it was written with. The
/// link pass fills in `target`, the index of the referenced definition in
/// its arena, so that lookups after validation never hash a name and the
/// graph never stores pointers into itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedRef {
    name: String,
    location: Location,
    target: Option<usize>,
}

impl NamedRef {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            target: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the reference was written.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Arena index of the referenced definition, once linked.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }

    pub(crate) fn resolve(&mut self, index: usize) {
        self.target = Some(index);
    }

    pub(crate) fn clear(&mut self) {
        self.target = None;
    }
}
