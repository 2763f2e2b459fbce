//! Reference resolution and naming checks over a fully built graph.
//!
//! The linker snapshots the name tables it resolves against (type kinds and
//! directive locations) before walking the arenas mutably, so every
//! [`NamedRef`] can be filled in place.

use crate::schema_error::SchemaErrorKind;
use crate::types::Directive;
use crate::types::DirectiveDefinition;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::SchemaDefinition;
use crate::types::TypeDefinition;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::NamedRef;
use crate::SchemaError;
use crate::SchemaGraph;
use crate::ValidationOptions;
use indexmap::IndexMap;
use libgqlfront_parser::ast::DirectiveLocation;
use libgqlfront_parser::ast::DirectiveLocations;
use libgqlfront_parser::Location;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaError>;

const RESERVED_PREFIX: &str = "__";

impl SchemaGraph {
    /// Forgets every resolved target so that linking starts from names only.
    pub(crate) fn clear_links(&mut self) {
        for def in self.directives.values_mut() {
            for arg in def.arguments.values_mut() {
                clear_input_value(arg);
            }
        }
        for ty in self.types.values_mut() {
            clear_directives(ty.directives_mut());
            match ty {
                TypeDefinition::Scalar(_) => {},
                TypeDefinition::Object(obj) => {
                    obj.interfaces.iter_mut().for_each(NamedRef::clear);
                    obj.fields.values_mut().for_each(clear_field);
                },
                TypeDefinition::Interface(iface) => {
                    iface.interfaces.iter_mut().for_each(NamedRef::clear);
                    iface.fields.values_mut().for_each(clear_field);
                },
                TypeDefinition::Union(union) => {
                    union.members.iter_mut().for_each(NamedRef::clear);
                },
                TypeDefinition::Enum(enum_type) => {
                    for value in enum_type.values.values_mut() {
                        clear_directives(&mut value.directives);
                    }
                },
                TypeDefinition::InputObject(input) => {
                    input.fields.values_mut().for_each(clear_input_value);
                },
            }
        }
        if let Some(schema) = self.schema.as_mut() {
            clear_directives(&mut schema.directives);
            schema.root_types.values_mut().for_each(NamedRef::clear);
        }
    }

    pub(crate) fn link(&mut self) -> Result<()> {
        let linker = Linker::new(self);
        for def in self.directives.values_mut() {
            linker.link_directive_definition(def)?;
        }
        for ty in self.types.values_mut() {
            linker.link_type(ty)?;
        }
        if let Some(schema) = self.schema.as_mut() {
            linker.link_schema(schema)?;
        }
        log::debug!(
            "Linked {} types and {} directives",
            self.types.len(),
            self.directives.len(),
        );
        Ok(())
    }
}

fn clear_directives(directives: &mut [Directive]) {
    for directive in directives {
        directive.definition.clear();
    }
}

fn clear_field(field: &mut Field) {
    field.ty.innermost_mut().type_ref.clear();
    field.arguments.values_mut().for_each(clear_input_value);
    clear_directives(&mut field.directives);
}

fn clear_input_value(value: &mut InputValue) {
    value.ty.innermost_mut().type_ref.clear();
    clear_directives(&mut value.directives);
}

/// Name tables captured from the graph before linking begins.
struct Linker {
    type_kinds: IndexMap<String, TypeKind>,
    directives: IndexMap<String, (DirectiveLocations, bool)>,
    options: ValidationOptions,
}

/// What a named reference must point at.
#[derive(Clone, Copy)]
enum Expected {
    Object,
    Interface,
    Input,
    Output,
}

impl Expected {
    fn accepts(&self, kind: TypeKind) -> bool {
        match self {
            Expected::Object => kind == TypeKind::Object,
            Expected::Interface => kind == TypeKind::Interface,
            Expected::Input => kind.is_input(),
            Expected::Output => kind.is_output(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Expected::Object => "an object type",
            Expected::Interface => "an interface type",
            Expected::Input => "an input type",
            Expected::Output => "an output type",
        }
    }
}

impl Linker {
    fn new(graph: &SchemaGraph) -> Self {
        Self {
            type_kinds: graph
                .types
                .iter()
                .map(|(name, def)| (name.clone(), def.kind()))
                .collect(),
            directives: graph
                .directives
                .iter()
                .map(|(name, def)| (name.clone(), (def.locations, def.repeatable)))
                .collect(),
            options: graph.options.clone(),
        }
    }

    fn check_name(&self, name: &str, coordinate: &str, location: &Location) -> Result<()> {
        if name.starts_with(RESERVED_PREFIX) {
            return Err(SchemaError::new(
                SchemaErrorKind::ReservedName {
                    name: name.to_string(),
                    coordinate: coordinate.to_string(),
                },
                location.clone(),
            ));
        }
        Ok(())
    }

    fn link_named(
        &self,
        named: &mut NamedRef,
        expected: Expected,
        coordinate: &str,
    ) -> Result<()> {
        let Some((index, _, kind)) = self.type_kinds.get_full(named.name()) else {
            return Err(SchemaError::new(
                SchemaErrorKind::UndefinedType {
                    name: named.name().to_string(),
                    coordinate: coordinate.to_string(),
                },
                named.location().clone(),
            ));
        };
        if !expected.accepts(*kind) {
            return Err(SchemaError::new(
                SchemaErrorKind::WrongTypeKind {
                    name: named.name().to_string(),
                    found: *kind,
                    expected: expected.describe(),
                    coordinate: coordinate.to_string(),
                },
                named.location().clone(),
            ));
        }
        named.resolve(index);
        Ok(())
    }

    fn link_type_ref(&self, ty: &mut TypeRef, expected: Expected, coordinate: &str) -> Result<()> {
        self.link_named(&mut ty.innermost_mut().type_ref, expected, coordinate)
    }

    fn link_directives(
        &self,
        directives: &mut [Directive],
        site: DirectiveLocation,
        coordinate: &str,
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for directive in directives {
            let Some((index, _, (locations, repeatable))) =
                self.directives.get_full(directive.name())
            else {
                return Err(SchemaError::new(
                    SchemaErrorKind::UndefinedDirective {
                        name: directive.name().to_string(),
                        coordinate: coordinate.to_string(),
                    },
                    directive.location.clone(),
                ));
            };
            if self.options.check_directive_locations {
                if !locations.contains(site) {
                    return Err(SchemaError::new(
                        SchemaErrorKind::DirectiveLocationNotAllowed {
                            name: directive.name().to_string(),
                            location: site,
                            coordinate: coordinate.to_string(),
                        },
                        directive.location.clone(),
                    ));
                }
                if !repeatable && !seen.insert(directive.name().to_string()) {
                    return Err(SchemaError::new(
                        SchemaErrorKind::RepeatedDirective {
                            name: directive.name().to_string(),
                            coordinate: coordinate.to_string(),
                        },
                        directive.location.clone(),
                    ));
                }
            }
            directive.definition.resolve(index);
        }
        Ok(())
    }

    fn link_input_value(
        &self,
        value: &mut InputValue,
        site: DirectiveLocation,
        coordinate: &str,
    ) -> Result<()> {
        self.check_name(&value.name, coordinate, &value.location)?;
        self.link_type_ref(&mut value.ty, Expected::Input, coordinate)?;
        self.link_directives(&mut value.directives, site, coordinate)
    }

    fn link_arguments(
        &self,
        arguments: &mut IndexMap<String, InputValue>,
        parent: &str,
    ) -> Result<()> {
        for arg in arguments.values_mut() {
            let coordinate = format!("{parent}({}:)", arg.name);
            self.link_input_value(arg, DirectiveLocation::ArgumentDefinition, &coordinate)?;
        }
        Ok(())
    }

    fn link_fields(&self, fields: &mut IndexMap<String, Field>, parent: &str) -> Result<()> {
        for field in fields.values_mut() {
            let coordinate = format!("{parent}.{}", field.name);
            self.check_name(&field.name, &coordinate, &field.location)?;
            self.link_type_ref(&mut field.ty, Expected::Output, &coordinate)?;
            self.link_arguments(&mut field.arguments, &coordinate)?;
            self.link_directives(
                &mut field.directives,
                DirectiveLocation::FieldDefinition,
                &coordinate,
            )?;
        }
        Ok(())
    }

    fn link_directive_definition(&self, def: &mut DirectiveDefinition) -> Result<()> {
        let coordinate = format!("@{}", def.name);
        self.check_name(&def.name, &coordinate, &def.location)?;
        self.link_arguments(&mut def.arguments, &coordinate)
    }

    fn link_type(&self, ty: &mut TypeDefinition) -> Result<()> {
        let name = ty.name().to_string();
        self.check_name(&name, &name, ty.location())?;
        match ty {
            TypeDefinition::Scalar(scalar) => {
                self.link_directives(&mut scalar.directives, DirectiveLocation::Scalar, &name)?;
            },
            TypeDefinition::Object(obj) => {
                for iface in &mut obj.interfaces {
                    self.link_named(iface, Expected::Interface, &name)?;
                }
                self.link_directives(&mut obj.directives, DirectiveLocation::Object, &name)?;
                self.link_fields(&mut obj.fields, &name)?;
            },
            TypeDefinition::Interface(iface) => {
                for parent in &mut iface.interfaces {
                    self.link_named(parent, Expected::Interface, &name)?;
                }
                self.link_directives(&mut iface.directives, DirectiveLocation::Interface, &name)?;
                self.link_fields(&mut iface.fields, &name)?;
            },
            TypeDefinition::Union(union) => {
                for member in &mut union.members {
                    self.link_named(member, Expected::Object, &name)?;
                }
                self.link_directives(&mut union.directives, DirectiveLocation::Union, &name)?;
            },
            TypeDefinition::Enum(enum_type) => {
                self.link_directives(&mut enum_type.directives, DirectiveLocation::Enum, &name)?;
                for value in enum_type.values.values_mut() {
                    let coordinate = format!("{name}.{}", value.name);
                    self.check_name(&value.name, &coordinate, &value.location)?;
                    self.link_directives(
                        &mut value.directives,
                        DirectiveLocation::EnumValue,
                        &coordinate,
                    )?;
                }
            },
            TypeDefinition::InputObject(input) => {
                self.link_directives(
                    &mut input.directives,
                    DirectiveLocation::InputObject,
                    &name,
                )?;
                for field in input.fields.values_mut() {
                    let coordinate = format!("{name}.{}", field.name);
                    self.link_input_value(
                        field,
                        DirectiveLocation::InputFieldDefinition,
                        &coordinate,
                    )?;
                }
            },
        }
        Ok(())
    }

    fn link_schema(&self, schema: &mut SchemaDefinition) -> Result<()> {
        self.link_directives(&mut schema.directives, DirectiveLocation::Schema, "schema")?;
        for (operation, root) in schema.root_types.iter_mut() {
            let coordinate = format!("schema.{operation}");
            self.link_named(root, Expected::Object, &coordinate)?;
        }
        if self.options.check_distinct_root_types {
            let roots: Vec<_> = schema.root_types.iter().collect();
            for (idx, (first, first_ref)) in roots.iter().enumerate() {
                for (second, second_ref) in &roots[idx + 1..] {
                    if first_ref.name() == second_ref.name() {
                        return Err(SchemaError::new(
                            SchemaErrorKind::NonDistinctRootTypes {
                                type_name: second_ref.name().to_string(),
                                first: **first,
                                second: **second,
                            },
                            second_ref.location().clone(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
