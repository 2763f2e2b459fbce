use crate::SchemaError;
use libgqlfront_parser::SyntaxError;

/// Any failure along the text-to-validated-graph pipeline.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl Error {
    pub fn location(&self) -> &libgqlfront_parser::Location {
        match self {
            Error::Syntax(err) => err.location(),
            Error::Schema(err) => err.location(),
        }
    }
}
