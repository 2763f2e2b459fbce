/// The two top-level grammars understood by the parser.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DocumentKind {
    /// Type-system definitions and extensions (SDL).
    Schema,
    /// Operations and fragments.
    Request,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DocumentKind::Schema => "schema",
            DocumentKind::Request => "request",
        })
    }
}
