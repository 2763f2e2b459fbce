use crate::ast::ExecutableDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::VariableDefinition;
use crate::parser::ParseResult;
use crate::parser::Parser;
use crate::parser::ValueContext;
use crate::token::TokenKind;
use crate::DocumentKind;
use crate::SyntaxError;
use crate::SyntaxErrorKind;

impl<'src> Parser<'src> {
    pub(super) fn parse_executable_definitions(
        &mut self,
    ) -> ParseResult<Vec<ExecutableDefinition>> {
        let mut definitions = Vec::new();
        loop {
            let definition = match self.peek().kind {
                TokenKind::Eof => return Ok(definitions),
                TokenKind::BraceOpen => {
                    ExecutableDefinition::Operation(self.parse_shorthand_query()?)
                },
                TokenKind::Name => self.parse_executable_definition()?,
                _ => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnrecognizedToken {
                            found: self.peek().describe(),
                            document: DocumentKind::Request,
                        },
                        self.peek_location(),
                    ));
                },
            };
            definitions.push(definition);
        }
    }

    fn parse_executable_definition(&mut self) -> ParseResult<ExecutableDefinition> {
        let keyword = self.peek().value.to_string();
        if let Some(kind) = OperationKind::from_keyword(&keyword) {
            return Ok(ExecutableDefinition::Operation(
                self.parse_operation_definition(kind)?,
            ));
        }
        match keyword.as_str() {
            "fragment" => Ok(ExecutableDefinition::Fragment(
                self.parse_fragment_definition()?,
            )),
            "extend" => Err(SyntaxError::new(
                SyntaxErrorKind::ExtensionNotAllowed,
                self.peek_location(),
            )),
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::UnrecognizedKeyword {
                    keyword,
                    document: DocumentKind::Request,
                },
                self.peek_location(),
            )),
        }
    }

    /// `{ ... }` with no keyword, name, variables or directives.
    fn parse_shorthand_query(&mut self) -> ParseResult<OperationDefinition> {
        let location = self.peek_location();
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            kind: OperationKind::Query,
            name: None,
            variables: Vec::new(),
            directives: Vec::new(),
            selection_set,
            location,
        })
    }

    /// `query|mutation|subscription Name? VariableDefinitions? Directives? SelectionSet`
    fn parse_operation_definition(
        &mut self,
        kind: OperationKind,
    ) -> ParseResult<OperationDefinition> {
        let location = self.expect_keyword(kind.as_str())?;
        let name = if self.peek_is(TokenKind::Name) {
            Some(self.expect_name()?.0)
        } else {
            None
        };
        let variables = self.parse_variable_definitions()?;
        let directives = self.parse_directives(ValueContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            kind,
            name,
            variables,
            directives,
            selection_set,
            location,
        })
    }

    /// `( VariableDefinition+ )`, or nothing.
    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<VariableDefinition>> {
        let mut variables = Vec::new();
        if self.eat(TokenKind::ParenOpen)?.is_none() {
            return Ok(variables);
        }
        loop {
            let location = self.expect(TokenKind::Dollar)?.location;
            let (name, _) = self.expect_name()?;
            self.expect(TokenKind::Colon)?;
            let ty = self.parse_type_reference()?;
            let default_value = if self.eat(TokenKind::Equals)?.is_some() {
                Some(self.parse_value(ValueContext::VariableDefaultValue)?)
            } else {
                None
            };
            let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
            variables.push(VariableDefinition {
                name,
                ty,
                default_value,
                directives,
                location,
            });
            if self.eat(TokenKind::ParenClose)?.is_some() {
                return Ok(variables);
            }
        }
    }

    /// `fragment Name on Type Directives? SelectionSet`
    fn parse_fragment_definition(&mut self) -> ParseResult<FragmentDefinition> {
        let location = self.expect_keyword("fragment")?;
        if self.peek_is_keyword("on") {
            return Err(SyntaxError::new(
                SyntaxErrorKind::FragmentNamedOn,
                self.peek_location(),
            ));
        }
        let (name, _) = self.expect_name()?;
        self.expect_keyword("on")?;
        let (type_condition, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            location,
        })
    }
}
