/// The tag of a lexed [`Token`](crate::token::Token).
///
/// Kinds carry no payload so that they can live in the lexer's `const`
/// classification tables; the lexeme or decoded string is stored on the
/// token itself.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `}`
    BraceClose,
    /// `{`
    BraceOpen,
    /// `]`
    BracketClose,
    /// `[`
    BracketOpen,
    /// `:`
    Colon,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `...`
    Spread,

    Name,
    Int,
    Float,
    String,
    BlockString,

    /// End of input. The lexer yields this exactly once.
    Eof,
}

impl TokenKind {
    /// Returns the source text for punctuator kinds.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Ampersand => Some("&"),
            TokenKind::At => Some("@"),
            TokenKind::Bang => Some("!"),
            TokenKind::BraceClose => Some("}"),
            TokenKind::BraceOpen => Some("{"),
            TokenKind::BracketClose => Some("]"),
            TokenKind::BracketOpen => Some("["),
            TokenKind::Colon => Some(":"),
            TokenKind::Dollar => Some("$"),
            TokenKind::Equals => Some("="),
            TokenKind::ParenClose => Some(")"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::Pipe => Some("|"),
            TokenKind::Spread => Some("..."),
            TokenKind::Name
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::BlockString
            | TokenKind::Eof => None,
        }
    }

    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Either of the two string literal forms.
    pub fn is_string(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::BlockString)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Eof => "end of input",
            punct => return write!(f, "`{}`", punct.as_punctuator_str().unwrap_or_default()),
        };
        f.write_str(label)
    }
}
