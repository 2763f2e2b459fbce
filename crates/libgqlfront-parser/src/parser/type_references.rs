use crate::ast::ListTypeReference;
use crate::ast::NamedTypeReference;
use crate::ast::Nullability;
use crate::ast::TypeReference;
use crate::parser::ParseResult;
use crate::parser::Parser;
use crate::token::TokenKind;
use crate::SyntaxError;
use crate::SyntaxErrorKind;

impl<'src> Parser<'src> {
    /// `Name !?` or `[ Type ] !?`
    pub(super) fn parse_type_reference(&mut self) -> ParseResult<TypeReference> {
        self.enter_recursion()?;
        let result = self.parse_type_reference_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_reference_impl(&mut self) -> ParseResult<TypeReference> {
        match self.peek().kind {
            TokenKind::Name => {
                let (name, location) = self.expect_name()?;
                Ok(TypeReference::Named(NamedTypeReference {
                    name,
                    nullability: self.parse_nullability()?,
                    location,
                }))
            },
            TokenKind::BracketOpen => {
                let location = self.consume()?.location;
                let item = self.parse_type_reference()?;
                self.expect(TokenKind::BracketClose)?;
                Ok(TypeReference::List(ListTypeReference {
                    item: Box::new(item),
                    nullability: self.parse_nullability()?,
                    location,
                }))
            },
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::InvalidTypeReference {
                    found: self.peek().describe(),
                },
                self.peek_location(),
            )),
        }
    }

    fn parse_nullability(&mut self) -> ParseResult<Nullability> {
        Ok(match self.eat(TokenKind::Bang)? {
            Some(_) => Nullability::NonNull,
            None => Nullability::Nullable,
        })
    }
}
