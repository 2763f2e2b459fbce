use crate::ast::impl_ast_node;
use crate::Location;

/// A literal value (or, in non-constant positions, a variable).
///
/// Numbers keep their source lexeme so that no precision is lost before a
/// consumer decides how to interpret them.
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    Null,
    Boolean(bool),
    Int(String),
    Float(String),
    String(String),
    Enum(String),
    Variable(String),
    List(Vec<Value>),
    Object(Vec<ObjectField>),
}

/// One `name: value` entry of an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
    pub location: Location,
}

impl Value {
    pub fn new(kind: ValueKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// True when neither this value nor anything nested in it is a
    /// variable.
    pub fn is_const(&self) -> bool {
        match &self.kind {
            ValueKind::Variable(_) => false,
            ValueKind::List(items) => items.iter().all(Value::is_const),
            ValueKind::Object(fields) => fields.iter().all(|f| f.value.is_const()),
            _ => true,
        }
    }
}

impl std::fmt::Display for Value {
    /// Formats the value as it would be written in a document.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ValueKind::Null => f.write_str("null"),
            ValueKind::Boolean(b) => write!(f, "{b}"),
            ValueKind::Int(s) | ValueKind::Float(s) | ValueKind::Enum(s) => f.write_str(s),
            ValueKind::String(s) => write_string_literal(f, s),
            ValueKind::Variable(name) => write!(f, "${name}"),
            ValueKind::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            ValueKind::Object(fields) => {
                f.write_str("{")?;
                for (idx, field) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str("}")
            },
        }
    }
}

/// Writes `s` as a double-quoted string literal, escaping as needed.
pub fn write_string_literal(f: &mut impl std::fmt::Write, s: &str) -> std::fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl_ast_node!(Value, ObjectField);
