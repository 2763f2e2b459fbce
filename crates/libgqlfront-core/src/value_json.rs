//! Conversions between value literals and JSON.
//!
//! | literal          | JSON                      |
//! |------------------|---------------------------|
//! | `null`           | `null`                    |
//! | `true`/`false`   | boolean                   |
//! | int, float       | number                    |
//! | string, enum     | string                    |
//! | list             | array                     |
//! | object           | object (field order kept) |
//! | `$variable`      | error                     |

use crate::schema_error::SchemaErrorKind;
use crate::SchemaError;
use libgqlfront_parser::ast::ObjectField;
use libgqlfront_parser::ast::Value;
use libgqlfront_parser::ast::ValueKind;
use libgqlfront_parser::Location;
use serde::ser::Error as _;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;
use serde::Serialize;
use serde::Serializer;

/// Converts a literal to JSON. Fails on variables and on numbers JSON cannot
/// hold (integers outside 64 bits, infinite floats).
pub fn value_to_json(value: &Value) -> Result<serde_json::Value, SchemaError> {
    Ok(match &value.kind {
        ValueKind::Null => serde_json::Value::Null,
        ValueKind::Boolean(b) => serde_json::Value::Bool(*b),
        ValueKind::Int(lexeme) | ValueKind::Float(lexeme) => {
            serde_json::Value::Number(json_number(lexeme, &value.location)?)
        },
        ValueKind::String(s) | ValueKind::Enum(s) => serde_json::Value::String(s.clone()),
        ValueKind::Variable(name) => {
            return Err(SchemaError::new(
                SchemaErrorKind::VariableInJson { name: name.clone() },
                value.location.clone(),
            ));
        },
        ValueKind::List(items) => serde_json::Value::Array(
            items.iter().map(value_to_json).collect::<Result<_, _>>()?,
        ),
        ValueKind::Object(fields) => {
            let mut map = serde_json::Map::with_capacity(fields.len());
            for field in fields {
                map.insert(field.name.clone(), value_to_json(&field.value)?);
            }
            serde_json::Value::Object(map)
        },
    })
}

/// Converts JSON to a literal; every produced node carries `location`.
///
/// Numbers with a fractional part or exponent become float literals, all
/// others int literals. JSON never yields enum or variable literals.
pub fn value_from_json(json: &serde_json::Value, location: Location) -> Value {
    let kind = match json {
        serde_json::Value::Null => ValueKind::Null,
        serde_json::Value::Bool(b) => ValueKind::Boolean(*b),
        serde_json::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                ValueKind::Int(n.to_string())
            } else {
                ValueKind::Float(n.to_string())
            }
        },
        serde_json::Value::String(s) => ValueKind::String(s.clone()),
        serde_json::Value::Array(items) => ValueKind::List(
            items
                .iter()
                .map(|item| value_from_json(item, location.clone()))
                .collect(),
        ),
        serde_json::Value::Object(map) => ValueKind::Object(
            map.iter()
                .map(|(name, value)| ObjectField {
                    name: name.clone(),
                    value: value_from_json(value, location.clone()),
                    location: location.clone(),
                })
                .collect(),
        ),
    };
    Value::new(kind, location)
}

fn json_number(lexeme: &str, location: &Location) -> Result<serde_json::Number, SchemaError> {
    let invalid = || {
        SchemaError::new(
            SchemaErrorKind::InvalidJsonNumber {
                lexeme: lexeme.to_string(),
            },
            location.clone(),
        )
    };
    if let Ok(n) = lexeme.parse::<i64>() {
        return Ok(n.into());
    }
    if let Ok(n) = lexeme.parse::<u64>() {
        return Ok(n.into());
    }
    let is_float = lexeme.contains(['.', 'e', 'E']);
    if !is_float {
        return Err(invalid());
    }
    lexeme
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(invalid)
}

/// Serializes a borrowed [`Value`] with the same mapping as
/// [`value_to_json()`].
///
/// ```rust
/// use libgqlfront_core::SerializableValue;
/// use libgqlfront_parser::ast::{Value, ValueKind};
/// use libgqlfront_parser::Location;
///
/// let value = Value::new(ValueKind::Enum("RED".to_string()), Location::builtin());
/// assert_eq!(serde_json::to_string(&SerializableValue(&value)).unwrap(), "\"RED\"");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SerializableValue<'a>(pub &'a Value);

impl Serialize for SerializableValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0.kind {
            ValueKind::Null => serializer.serialize_unit(),
            ValueKind::Boolean(b) => serializer.serialize_bool(*b),
            ValueKind::Int(lexeme) | ValueKind::Float(lexeme) => {
                json_number(lexeme, &self.0.location)
                    .map_err(|err| S::Error::custom(err.message()))?
                    .serialize(serializer)
            },
            ValueKind::String(s) | ValueKind::Enum(s) => serializer.serialize_str(s),
            ValueKind::Variable(name) => Err(S::Error::custom(
                SchemaErrorKind::VariableInJson { name: name.clone() },
            )),
            ValueKind::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&SerializableValue(item))?;
                }
                seq.end()
            },
            ValueKind::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for field in fields {
                    map.serialize_entry(&field.name, &SerializableValue(&field.value))?;
                }
                map.end()
            },
        }
    }
}
