use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::Name;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::OperationKind;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeSystemDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::parser::ParseResult;
use crate::parser::Parser;
use crate::parser::ValueContext;
use crate::token::TokenKind;
use crate::DocumentKind;
use crate::Location;
use crate::SyntaxError;
use crate::SyntaxErrorKind;

/// A description literal waiting for the definition it documents.
struct PendingDescription {
    value: String,
    location: Location,
}

impl<'src> Parser<'src> {
    // =========================================================================
    // Top-level dispatch
    // =========================================================================

    pub(super) fn parse_type_system_definitions(
        &mut self,
    ) -> ParseResult<Vec<TypeSystemDefinition>> {
        let mut definitions = Vec::new();
        let mut pending_description: Option<PendingDescription> = None;
        loop {
            match self.peek().kind {
                TokenKind::Eof => {
                    if pending_description.is_some() {
                        return Err(self.unexpected("a definition after description"));
                    }
                    return Ok(definitions);
                },
                TokenKind::String | TokenKind::BlockString => {
                    if pending_description.is_some() {
                        return Err(self.unexpected("a definition after description"));
                    }
                    let token = self.consume()?;
                    pending_description = Some(PendingDescription {
                        value: token.value.into_owned(),
                        location: token.location,
                    });
                },
                TokenKind::Name => {
                    let description = pending_description.take();
                    definitions.push(self.parse_type_system_definition(description)?);
                },
                _ => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnrecognizedToken {
                            found: self.peek().describe(),
                            document: DocumentKind::Schema,
                        },
                        self.peek_location(),
                    ));
                },
            }
        }
    }

    fn parse_type_system_definition(
        &mut self,
        description: Option<PendingDescription>,
    ) -> ParseResult<TypeSystemDefinition> {
        let keyword = self.peek().value.to_string();
        if keyword == "extend" {
            if description.is_some() {
                return Err(self.unexpected("a definition after description"));
            }
            return self.parse_extension();
        }

        let (description, location) = match description {
            Some(pending) => (pending.value, pending.location),
            None => (String::new(), self.peek_location()),
        };
        let definition = match keyword.as_str() {
            "schema" => TypeSystemDefinition::Schema(
                self.parse_schema_definition(description, location)?,
            ),
            "scalar" => TypeSystemDefinition::Type(TypeDefinition::Scalar(
                self.parse_scalar_type_definition(description, location)?,
            )),
            "type" => TypeSystemDefinition::Type(TypeDefinition::Object(
                self.parse_object_type_definition(description, location)?,
            )),
            "interface" => TypeSystemDefinition::Type(TypeDefinition::Interface(
                self.parse_interface_type_definition(description, location)?,
            )),
            "union" => TypeSystemDefinition::Type(TypeDefinition::Union(
                self.parse_union_type_definition(description, location)?,
            )),
            "enum" => TypeSystemDefinition::Type(TypeDefinition::Enum(
                self.parse_enum_type_definition(description, location)?,
            )),
            "input" => TypeSystemDefinition::Type(TypeDefinition::InputObject(
                self.parse_input_object_type_definition(description, location)?,
            )),
            "directive" => TypeSystemDefinition::Directive(
                self.parse_directive_definition(description, location)?,
            ),
            _ => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnrecognizedKeyword {
                        keyword,
                        document: DocumentKind::Schema,
                    },
                    self.peek_location(),
                ));
            },
        };
        Ok(definition)
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_schema_definition(
        &mut self,
        description: String,
        location: Location,
    ) -> ParseResult<SchemaDefinition> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let operation_types = self.parse_root_operation_types()?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            location,
        })
    }

    /// `{ (operation: Name)+ }`
    fn parse_root_operation_types(&mut self) -> ParseResult<Vec<RootOperationTypeDefinition>> {
        self.expect(TokenKind::BraceOpen)?;
        let mut operation_types = Vec::new();
        loop {
            let location = self.peek_location();
            let operation = if self.peek_is(TokenKind::Name) {
                OperationKind::from_keyword(&self.peek().value)
            } else {
                None
            };
            let Some(operation) = operation else {
                return Err(self.unexpected("`query`, `mutation` or `subscription`"));
            };
            self.consume()?;
            self.expect(TokenKind::Colon)?;
            let (name, name_location) = self.expect_name()?;
            operation_types.push(RootOperationTypeDefinition {
                operation,
                named_type: Name {
                    value: name,
                    location: name_location,
                },
                location,
            });
            if self.eat(TokenKind::BraceClose)?.is_some() {
                return Ok(operation_types);
            }
        }
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: String,
        location: Location,
    ) -> ParseResult<ScalarTypeDefinition> {
        self.expect_keyword("scalar")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            location,
        })
    }

    fn parse_object_type_definition(
        &mut self,
        description: String,
        location: Location,
    ) -> ParseResult<ObjectTypeDefinition> {
        self.expect_keyword("type")?;
        let (name, _) = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let fields = self.parse_fields_definition()?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location,
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        description: String,
        location: Location,
    ) -> ParseResult<InterfaceTypeDefinition> {
        self.expect_keyword("interface")?;
        let (name, _) = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let fields = self.parse_fields_definition()?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location,
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: String,
        location: Location,
    ) -> ParseResult<UnionTypeDefinition> {
        self.expect_keyword("union")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let members = self.parse_union_members()?;
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            members,
            location,
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        description: String,
        location: Location,
    ) -> ParseResult<EnumTypeDefinition> {
        self.expect_keyword("enum")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let values = self.parse_enum_values_definition()?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            location,
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: String,
        location: Location,
    ) -> ParseResult<InputObjectTypeDefinition> {
        self.expect_keyword("input")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let fields = self.parse_input_fields_definition()?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            location,
        })
    }

    /// `directive @name args? repeatable? on LOCATIONS`
    fn parse_directive_definition(
        &mut self,
        description: String,
        location: Location,
    ) -> ParseResult<DirectiveDefinition> {
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At)?;
        let (name, _) = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        let repeatable = if self.peek_is_keyword("repeatable") {
            self.consume()?;
            true
        } else {
            false
        };
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            location,
        })
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Parses the description that may precede a member definition. Absent
    /// descriptions are the empty string.
    fn parse_description(&mut self) -> ParseResult<String> {
        if self.peek().kind.is_string() {
            Ok(self.consume()?.value.into_owned())
        } else {
            Ok(String::new())
        }
    }

    /// `implements &? Name (& Name)*`, or nothing.
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<Name>> {
        let mut interfaces = Vec::new();
        if !self.peek_is_keyword("implements") {
            return Ok(interfaces);
        }
        self.consume()?;
        self.eat(TokenKind::Ampersand)?;
        loop {
            let (value, location) = self.expect_name()?;
            interfaces.push(Name { value, location });
            if self.eat(TokenKind::Ampersand)?.is_none() {
                return Ok(interfaces);
            }
        }
    }

    /// `= |? Name (| Name)*`, or nothing.
    fn parse_union_members(&mut self) -> ParseResult<Vec<Name>> {
        let mut members = Vec::new();
        if self.eat(TokenKind::Equals)?.is_none() {
            return Ok(members);
        }
        self.eat(TokenKind::Pipe)?;
        loop {
            let (value, location) = self.expect_name()?;
            members.push(Name { value, location });
            if self.eat(TokenKind::Pipe)?.is_none() {
                return Ok(members);
            }
        }
    }

    /// `{ FieldDefinition+ }`, or nothing.
    fn parse_fields_definition(&mut self) -> ParseResult<Vec<FieldDefinition>> {
        let mut fields = Vec::new();
        if self.eat(TokenKind::BraceOpen)?.is_none() {
            return Ok(fields);
        }
        loop {
            fields.push(self.parse_field_definition()?);
            if self.eat(TokenKind::BraceClose)?.is_some() {
                return Ok(fields);
            }
        }
    }

    fn parse_field_definition(&mut self) -> ParseResult<FieldDefinition> {
        let location = self.peek_location();
        let description = self.parse_description()?;
        let (name, _) = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
            location,
        })
    }

    /// `( InputValueDefinition+ )`, or nothing.
    fn parse_arguments_definition(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        self.parse_input_value_definitions(TokenKind::ParenOpen, TokenKind::ParenClose)
    }

    /// `{ InputValueDefinition+ }`, or nothing.
    fn parse_input_fields_definition(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        self.parse_input_value_definitions(TokenKind::BraceOpen, TokenKind::BraceClose)
    }

    fn parse_input_value_definitions(
        &mut self,
        open: TokenKind,
        close: TokenKind,
    ) -> ParseResult<Vec<InputValueDefinition>> {
        let mut values = Vec::new();
        if self.eat(open)?.is_none() {
            return Ok(values);
        }
        loop {
            values.push(self.parse_input_value_definition()?);
            if self.eat(close)?.is_some() {
                return Ok(values);
            }
        }
    }

    /// `Description? name : Type (= ConstValue)? Directives?`
    fn parse_input_value_definition(&mut self) -> ParseResult<InputValueDefinition> {
        let location = self.peek_location();
        let description = self.parse_description()?;
        let (name, _) = self.expect_name()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.eat(TokenKind::Equals)?.is_some() {
            Some(self.parse_value(ValueContext::InputDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        Ok(InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
            location,
        })
    }

    /// `{ EnumValueDefinition+ }`, or nothing.
    fn parse_enum_values_definition(&mut self) -> ParseResult<Vec<EnumValueDefinition>> {
        let mut values = Vec::new();
        if self.eat(TokenKind::BraceOpen)?.is_none() {
            return Ok(values);
        }
        loop {
            let location = self.peek_location();
            let description = self.parse_description()?;
            if matches!(self.peek().value.as_ref(), "true" | "false" | "null") {
                return Err(self.unexpected("an enum value name"));
            }
            let (name, _) = self.expect_name()?;
            let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
            values.push(EnumValueDefinition {
                description,
                name,
                directives,
                location,
            });
            if self.eat(TokenKind::BraceClose)?.is_some() {
                return Ok(values);
            }
        }
    }

    // =========================================================================
    // Extensions
    // =========================================================================

    fn parse_extension(&mut self) -> ParseResult<TypeSystemDefinition> {
        let location = self.expect_keyword("extend")?;
        if !self.peek_is(TokenKind::Name) {
            return Err(self.unexpected("a type-system keyword after `extend`"));
        }
        let keyword = self.peek().value.to_string();
        let extension = match keyword.as_str() {
            "schema" => {
                return Ok(TypeSystemDefinition::SchemaExtension(
                    self.parse_schema_extension(location)?,
                ));
            },
            "scalar" => TypeExtension::Scalar(self.parse_scalar_type_extension(location)?),
            "type" => TypeExtension::Object(self.parse_object_type_extension(location)?),
            "interface" => {
                TypeExtension::Interface(self.parse_interface_type_extension(location)?)
            },
            "union" => TypeExtension::Union(self.parse_union_type_extension(location)?),
            "enum" => TypeExtension::Enum(self.parse_enum_type_extension(location)?),
            "input" => {
                TypeExtension::InputObject(self.parse_input_object_type_extension(location)?)
            },
            _ => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnrecognizedExtension { keyword },
                    self.peek_location(),
                ));
            },
        };
        Ok(TypeSystemDefinition::TypeExtension(extension))
    }

    fn parse_schema_extension(&mut self, location: Location) -> ParseResult<SchemaExtension> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let operation_types = if self.peek_is(TokenKind::BraceOpen) {
            self.parse_root_operation_types()?
        } else {
            Vec::new()
        };
        if directives.is_empty() && operation_types.is_empty() {
            return Err(empty_extension(
                "schema",
                "directives or root operation types",
                location,
            ));
        }
        Ok(SchemaExtension {
            directives,
            operation_types,
            location,
        })
    }

    fn parse_scalar_type_extension(
        &mut self,
        location: Location,
    ) -> ParseResult<ScalarTypeExtension> {
        self.expect_keyword("scalar")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        if directives.is_empty() {
            return Err(empty_extension("scalar", "directives", location));
        }
        Ok(ScalarTypeExtension {
            name,
            directives,
            location,
        })
    }

    fn parse_object_type_extension(
        &mut self,
        location: Location,
    ) -> ParseResult<ObjectTypeExtension> {
        self.expect_keyword("type")?;
        let (name, _) = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(empty_extension(
                "type",
                "an implements clause, directives or a field set",
                location,
            ));
        }
        Ok(ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            location,
        })
    }

    fn parse_interface_type_extension(
        &mut self,
        location: Location,
    ) -> ParseResult<InterfaceTypeExtension> {
        self.expect_keyword("interface")?;
        let (name, _) = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(empty_extension(
                "interface",
                "an implements clause, directives or a field set",
                location,
            ));
        }
        Ok(InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            location,
        })
    }

    fn parse_union_type_extension(
        &mut self,
        location: Location,
    ) -> ParseResult<UnionTypeExtension> {
        self.expect_keyword("union")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let members = self.parse_union_members()?;
        if directives.is_empty() && members.is_empty() {
            return Err(empty_extension("union", "directives or union members", location));
        }
        Ok(UnionTypeExtension {
            name,
            directives,
            members,
            location,
        })
    }

    fn parse_enum_type_extension(
        &mut self,
        location: Location,
    ) -> ParseResult<EnumTypeExtension> {
        self.expect_keyword("enum")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let values = self.parse_enum_values_definition()?;
        if directives.is_empty() && values.is_empty() {
            return Err(empty_extension("enum", "directives or enum values", location));
        }
        Ok(EnumTypeExtension {
            name,
            directives,
            values,
            location,
        })
    }

    fn parse_input_object_type_extension(
        &mut self,
        location: Location,
    ) -> ParseResult<InputObjectTypeExtension> {
        self.expect_keyword("input")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::ConstDirectiveArgument)?;
        let fields = self.parse_input_fields_definition()?;
        if directives.is_empty() && fields.is_empty() {
            return Err(empty_extension("input", "directives or input fields", location));
        }
        Ok(InputObjectTypeExtension {
            name,
            directives,
            fields,
            location,
        })
    }
}

fn empty_extension(
    construct: &'static str,
    clauses: &'static str,
    location: Location,
) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::EmptyExtension { construct, clauses },
        location,
    )
}
