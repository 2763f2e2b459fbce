use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::parser::ParseResult;
use crate::parser::Parser;
use crate::parser::ValueContext;
use crate::token::TokenKind;
use crate::SyntaxError;
use crate::SyntaxErrorKind;

impl<'src> Parser<'src> {
    /// `{ selection+ }`
    pub(super) fn parse_selection_set(&mut self) -> ParseResult<SelectionSet> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<SelectionSet> {
        let location = self.expect(TokenKind::BraceOpen)?.location;
        let mut selections = Vec::new();
        loop {
            selections.push(self.parse_selection()?);
            if self.eat(TokenKind::BraceClose)?.is_some() {
                return Ok(SelectionSet {
                    selections,
                    location,
                });
            }
        }
    }

    fn parse_selection(&mut self) -> ParseResult<Selection> {
        match self.peek().kind {
            TokenKind::Name => Ok(Selection::Field(self.parse_field()?)),
            TokenKind::Spread => self.parse_spread(),
            TokenKind::Eof => Err(self.unexpected("a selection")),
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::InvalidSelection {
                    found: self.peek().describe(),
                },
                self.peek_location(),
            )),
        }
    }

    /// `(alias :)? name arguments? directives? selection_set?`
    fn parse_field(&mut self) -> ParseResult<Field> {
        let (first, location) = self.expect_name()?;
        let (alias, name) = if self.eat(TokenKind::Colon)?.is_some() {
            let (name, _) = self.expect_name()?;
            (Some(first), name)
        } else {
            (None, first)
        };
        let arguments = if self.peek_is(TokenKind::ParenOpen) {
            self.parse_arguments(ValueContext::AllowVariables)?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives(ValueContext::AllowVariables)?;
        let selection_set = if self.peek_is(TokenKind::BraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location,
        })
    }

    /// A fragment spread (`...Name`) or an inline fragment
    /// (`... on Type? { ... }`). `on` is never a fragment name, so it
    /// always starts a type condition.
    fn parse_spread(&mut self) -> ParseResult<Selection> {
        let location = self.expect(TokenKind::Spread)?.location;

        if self.peek_is(TokenKind::Name) && !self.peek_is_keyword("on") {
            let (name, _) = self.expect_name()?;
            let directives = self.parse_directives(ValueContext::AllowVariables)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                location,
            }));
        }

        let type_condition = if self.peek_is_keyword("on") {
            self.consume()?;
            Some(self.expect_name()?.0)
        } else {
            None
        };
        let directives = self.parse_directives(ValueContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            location,
        }))
    }
}
