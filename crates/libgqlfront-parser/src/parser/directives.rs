use crate::ast::Argument;
use crate::ast::DirectiveLocation;
use crate::ast::DirectiveLocations;
use crate::ast::DirectiveUsage;
use crate::parser::ParseResult;
use crate::parser::Parser;
use crate::parser::ValueContext;
use crate::token::TokenKind;
use crate::SyntaxError;
use crate::SyntaxErrorKind;

impl<'src> Parser<'src> {
    /// Zero or more `@name(args?)`.
    pub(super) fn parse_directives(
        &mut self,
        context: ValueContext,
    ) -> ParseResult<Vec<DirectiveUsage>> {
        let mut directives = Vec::new();
        while self.peek_is(TokenKind::At) {
            let location = self.consume()?.location;
            let (name, _) = self.expect_name()?;
            let arguments = if self.peek_is(TokenKind::ParenOpen) {
                self.parse_arguments(context)?
            } else {
                Vec::new()
            };
            directives.push(DirectiveUsage {
                name,
                arguments,
                location,
            });
        }
        Ok(directives)
    }

    /// `( name: value ... )` with at least one argument.
    pub(super) fn parse_arguments(
        &mut self,
        context: ValueContext,
    ) -> ParseResult<Vec<Argument>> {
        self.expect(TokenKind::ParenOpen)?;
        let mut arguments = Vec::new();
        loop {
            let (name, location) = self.expect_name()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value(context)?;
            arguments.push(Argument {
                name,
                value,
                location,
            });
            if self.eat(TokenKind::ParenClose)?.is_some() {
                return Ok(arguments);
            }
        }
    }

    /// `|? LOCATION (| LOCATION)*`
    pub(super) fn parse_directive_locations(&mut self) -> ParseResult<DirectiveLocations> {
        self.eat(TokenKind::Pipe)?;
        let mut locations = DirectiveLocations::new();
        loop {
            if !self.peek_is(TokenKind::Name) {
                return Err(self.unexpected("a directive location"));
            }
            let (keyword, location) = self.expect_name()?;
            let Some(parsed) = DirectiveLocation::from_keyword(&keyword) else {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnknownDirectiveLocation { name: keyword },
                    location,
                ));
            };
            locations.insert(parsed);
            if self.eat(TokenKind::Pipe)?.is_none() {
                return Ok(locations);
            }
        }
    }
}
