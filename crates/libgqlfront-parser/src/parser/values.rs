use crate::ast::ObjectField;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::parser::ParseResult;
use crate::parser::Parser;
use crate::parser::ValueContext;
use crate::token::TokenKind;
use crate::SyntaxError;
use crate::SyntaxErrorKind;

impl<'src> Parser<'src> {
    /// Parses a value literal, or a variable where `context` allows one.
    pub(super) fn parse_value(&mut self, context: ValueContext) -> ParseResult<Value> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ValueContext) -> ParseResult<Value> {
        let location = self.peek_location();
        let kind = match self.peek().kind {
            TokenKind::Dollar => {
                if !context.allows_variables() {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::TokenNotAllowed {
                            found: self.peek().describe(),
                            context: context.description().to_string(),
                        },
                        location,
                    ));
                }
                self.consume()?;
                let (name, _) = self.expect_name()?;
                ValueKind::Variable(name)
            },
            TokenKind::Int => ValueKind::Int(self.consume()?.value.into_owned()),
            TokenKind::Float => ValueKind::Float(self.consume()?.value.into_owned()),
            TokenKind::String | TokenKind::BlockString => {
                ValueKind::String(self.consume()?.value.into_owned())
            },
            TokenKind::Name => {
                let token = self.consume()?;
                match token.value.as_ref() {
                    "true" => ValueKind::Boolean(true),
                    "false" => ValueKind::Boolean(false),
                    "null" => ValueKind::Null,
                    _ => ValueKind::Enum(token.value.into_owned()),
                }
            },
            TokenKind::BracketOpen => self.parse_list_value(context)?,
            TokenKind::BraceOpen => self.parse_object_value(context)?,
            _ => return Err(self.unexpected("a value")),
        };
        Ok(Value::new(kind, location))
    }

    /// `[ value* ]`
    fn parse_list_value(&mut self, context: ValueContext) -> ParseResult<ValueKind> {
        self.expect(TokenKind::BracketOpen)?;
        let mut items = Vec::new();
        while self.eat(TokenKind::BracketClose)?.is_none() {
            items.push(self.parse_value(context)?);
        }
        Ok(ValueKind::List(items))
    }

    /// `{ (name: value)* }`
    fn parse_object_value(&mut self, context: ValueContext) -> ParseResult<ValueKind> {
        self.expect(TokenKind::BraceOpen)?;
        let mut fields = Vec::new();
        while self.eat(TokenKind::BraceClose)?.is_none() {
            let (name, location) = self.expect_name()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value(context)?;
            fields.push(ObjectField {
                name,
                value,
                location,
            });
        }
        Ok(ValueKind::Object(fields))
    }
}
