use crate::types::TypeKind;
use libgqlfront_parser::ast::DirectiveLocation;
use libgqlfront_parser::ast::OperationKind;
use libgqlfront_parser::Location;

/// A semantic error raised while merging, validating or printing a
/// [`SchemaGraph`](crate::SchemaGraph).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{location}: error: {kind}")]
pub struct SchemaError {
    kind: SchemaErrorKind,
    location: Location,
}

impl SchemaError {
    pub fn new(kind: SchemaErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    pub fn kind(&self) -> &SchemaErrorKind {
        &self.kind
    }

    /// Where the offending definition or reference was written.
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Categorized semantic error kinds.
///
/// References to nested elements are rendered as schema coordinates:
/// `Type`, `Type.field`, `Type.field(arg:)`, `@directive` and
/// `@directive(arg:)`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SchemaErrorKind {
    // =========================================================================
    // Building
    // =========================================================================
    #[error("Duplicate {kind} definition `{name}` (previously defined at {previous})")]
    DuplicateDefinition {
        kind: &'static str,
        name: String,
        previous: Location,
    },

    #[error("Multiple schema definitions (previously defined at {previous})")]
    MultipleSchemaDefinitions { previous: Location },

    #[error("Root operation type for `{operation}` is defined more than once")]
    DuplicateOperationType { operation: OperationKind },

    #[error("Duplicate {member} `{name}` in `{parent}`")]
    DuplicateMember {
        member: &'static str,
        name: String,
        parent: String,
    },

    #[error("Cannot extend undefined {kind} `{name}`")]
    ExtensionOfUndefined { kind: TypeKind, name: String },

    #[error("Cannot extend `{name}` as {expected}: it is defined as {found}")]
    ExtensionKindMismatch {
        name: String,
        expected: TypeKind,
        found: TypeKind,
    },

    #[error("Cannot extend the schema: no schema definition exists")]
    ExtensionOfUndefinedSchema,

    // =========================================================================
    // Linking
    // =========================================================================
    #[error("Undefined directive `@{name}` used at `{coordinate}`")]
    UndefinedDirective { name: String, coordinate: String },

    #[error("Undefined type `{name}` referenced at `{coordinate}`")]
    UndefinedType { name: String, coordinate: String },

    #[error("`{coordinate}` must reference {expected}, but `{name}` is of kind {found}")]
    WrongTypeKind {
        name: String,
        found: TypeKind,
        expected: &'static str,
        coordinate: String,
    },

    #[error("Name `{name}` at `{coordinate}` must not begin with `__`")]
    ReservedName { name: String, coordinate: String },

    #[error("Directive `@{name}` is not allowed on {location} (at `{coordinate}`)")]
    DirectiveLocationNotAllowed {
        name: String,
        location: DirectiveLocation,
        coordinate: String,
    },

    #[error("Non-repeatable directive `@{name}` is used more than once at `{coordinate}`")]
    RepeatedDirective { name: String, coordinate: String },

    #[error("Root operation types `{first}` and `{second}` both use `{type_name}`")]
    NonDistinctRootTypes {
        type_name: String,
        first: OperationKind,
        second: OperationKind,
    },

    // =========================================================================
    // Collaborators
    // =========================================================================
    #[error("The schema graph must be validated before it can be printed")]
    NotValidated,

    #[error("Variable `${name}` cannot be converted to JSON")]
    VariableInJson { name: String },

    #[error("Number `{lexeme}` cannot be represented in JSON")]
    InvalidJsonNumber { lexeme: String },
}
