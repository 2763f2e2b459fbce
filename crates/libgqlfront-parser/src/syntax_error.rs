use crate::DocumentKind;
use crate::Location;

/// A lexical or syntactic error. Parsing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{location}: error: {kind}")]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    location: Location,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Where the offending character or token starts.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The human-readable message without the location prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Categorized syntax error kinds.
///
/// The first group is raised by the lexer, the rest by the parser. Each
/// variant carries the values its message is built from so callers can
/// match on them without parsing text.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntaxErrorKind {
    // =========================================================================
    // Lexical errors
    // =========================================================================
    #[error("Unexpected character {}", describe_char(*found))]
    UnexpectedCharacter { found: char },

    #[error("Invalid number `{lexeme}`: leading zeros are not allowed")]
    LeadingZero { lexeme: String },

    #[error("Invalid number `{lexeme}`: expected digit after `.`")]
    MissingFractionDigits { lexeme: String },

    #[error("Invalid number `{lexeme}`: exponent must have at least one digit")]
    MissingExponentDigits { lexeme: String },

    /// A number immediately followed by a name character or `.`, e.g. `1_`.
    #[error("Invalid number: `{lexeme}` cannot be followed by {}", describe_char(*next))]
    InvalidNumberSuffix { lexeme: String, next: char },

    #[error("Invalid number: expected digit after `-`")]
    MissingDigitAfterMinus,

    #[error("Unexpected `..` (use `...` for spread)")]
    IncompleteSpread,

    #[error("Unexpected `.`")]
    UnexpectedDot,

    #[error("Unterminated string")]
    UnterminatedString,

    #[error("Unterminated block string")]
    UnterminatedBlockString,

    #[error("Invalid escape sequence `{sequence}`")]
    InvalidEscape { sequence: String },

    #[error("Invalid unicode escape `{sequence}`")]
    InvalidUnicodeEscape { sequence: String },

    // =========================================================================
    // Syntactic errors
    // =========================================================================
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Expected {expected} but found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Expected keyword `{expected}` but found {found}")]
    UnexpectedKeyword { expected: String, found: String },

    #[error("Unrecognized keyword `{keyword}` in {document} document")]
    UnrecognizedKeyword { keyword: String, document: DocumentKind },

    #[error("Unrecognized type extension `extend {keyword}`")]
    UnrecognizedExtension { keyword: String },

    #[error("`extend` definitions are not allowed in a request document")]
    ExtensionNotAllowed,

    #[error("Unrecognized token {found} at the top level of a {document} document")]
    UnrecognizedToken { found: String, document: DocumentKind },

    /// A token that is valid in general but not at this position, most
    /// commonly a variable inside a constant value.
    #[error("{found} is not allowed in {context}")]
    TokenNotAllowed { found: String, context: String },

    #[error("Type reference must be a name or a list, found {found}")]
    InvalidTypeReference { found: String },

    #[error("Fragment name cannot be `on`")]
    FragmentNamedOn,

    #[error("`extend {construct}` must specify at least one of {clauses}")]
    EmptyExtension {
        construct: &'static str,
        clauses: &'static str,
    },

    #[error("Invalid token {found} in selection set")]
    InvalidSelection { found: String },

    #[error("Unknown directive location `{name}`")]
    UnknownDirectiveLocation { name: String },

    #[error("Maximum nesting depth exceeded")]
    RecursionLimitExceeded,
}

/// Renders a character for error messages, spelling out control and
/// invisible characters by code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || ch == '\u{FEFF}' || ch.is_whitespace() {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
