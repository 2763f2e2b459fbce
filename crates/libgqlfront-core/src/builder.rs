//! Syntax tree to schema graph conversion.
//!
//! Nothing here resolves a reference: every [`NamedRef`] leaves the builder
//! unlinked. Name uniqueness is enforced for every collection as it is
//! filled.

use crate::schema_error::SchemaErrorKind;
use crate::types::Directive;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::SchemaDefinition;
use crate::types::TypeDefinition;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::NamedRef;
use crate::SchemaError;
use crate::SchemaGraph;
use indexmap::IndexMap;
use libgqlfront_parser::ast;
use libgqlfront_parser::ast::OperationKind;
use libgqlfront_parser::Location;

type Result<T> = std::result::Result<T, SchemaError>;

/// An `extend` definition waiting for every base definition to be merged.
#[derive(Clone, Debug)]
pub(crate) enum PendingExtension {
    Schema(ast::SchemaExtension),
    Type(ast::TypeExtension),
}

impl SchemaGraph {
    pub(crate) fn build_document(&mut self, document: &ast::SchemaDocument) -> Result<()> {
        log::debug!(
            "Merging `{}` ({} definitions)",
            document.source,
            document.definitions.len(),
        );
        for definition in &document.definitions {
            match definition {
                ast::TypeSystemDefinition::Schema(def) => self.build_schema_definition(def)?,
                ast::TypeSystemDefinition::Type(def) => self.build_type_definition(def)?,
                ast::TypeSystemDefinition::Directive(def) => {
                    self.build_directive_definition(def)?
                },
                ast::TypeSystemDefinition::SchemaExtension(ext) => self
                    .pending_extensions
                    .push(PendingExtension::Schema(ext.clone())),
                ast::TypeSystemDefinition::TypeExtension(ext) => self
                    .pending_extensions
                    .push(PendingExtension::Type(ext.clone())),
            }
        }
        log::debug!(
            "Graph now holds {} types, {} directives and {} pending extensions",
            self.types.len(),
            self.directives.len(),
            self.pending_extensions.len(),
        );
        Ok(())
    }

    fn build_schema_definition(&mut self, def: &ast::SchemaDefinition) -> Result<()> {
        if let Some(existing) = &self.schema {
            return Err(SchemaError::new(
                SchemaErrorKind::MultipleSchemaDefinitions {
                    previous: existing.location.clone(),
                },
                def.location.clone(),
            ));
        }
        let mut root_types = IndexMap::new();
        add_root_types(&mut root_types, &def.operation_types)?;
        self.schema = Some(SchemaDefinition {
            description: def.description.clone(),
            directives: build_directives(&def.directives)?,
            root_types,
            location: def.location.clone(),
        });
        Ok(())
    }

    fn build_directive_definition(&mut self, def: &ast::DirectiveDefinition) -> Result<()> {
        if let Some(existing) = self.directives.get(&def.name) {
            return Err(SchemaError::new(
                SchemaErrorKind::DuplicateDefinition {
                    kind: "directive",
                    name: format!("@{}", def.name),
                    previous: existing.location.clone(),
                },
                def.location.clone(),
            ));
        }
        let mut arguments = IndexMap::new();
        add_input_values(
            &mut arguments,
            "argument",
            &format!("@{}", def.name),
            &def.arguments,
        )?;
        log::trace!("Built directive `@{}`", def.name);
        self.directives.insert(
            def.name.clone(),
            DirectiveDefinition {
                description: def.description.clone(),
                name: def.name.clone(),
                arguments,
                repeatable: def.repeatable,
                locations: def.locations,
                location: def.location.clone(),
                builtin: false,
            },
        );
        Ok(())
    }

    fn build_type_definition(&mut self, def: &ast::TypeDefinition) -> Result<()> {
        let built = build_type(def)?;
        if let Some(existing) = self.types.get(def.name()) {
            return Err(SchemaError::new(
                SchemaErrorKind::DuplicateDefinition {
                    kind: built.kind().as_str(),
                    name: def.name().to_string(),
                    previous: existing.location().clone(),
                },
                def.location().clone(),
            ));
        }
        log::trace!("Built {} `{}`", built.kind(), built.name());
        self.types.insert(def.name().to_string(), built);
        Ok(())
    }

    pub(crate) fn apply_extension(&mut self, extension: PendingExtension) -> Result<()> {
        match extension {
            PendingExtension::Schema(ext) => self.apply_schema_extension(&ext),
            PendingExtension::Type(ext) => self.apply_type_extension(&ext),
        }
    }

    fn apply_schema_extension(&mut self, ext: &ast::SchemaExtension) -> Result<()> {
        let Some(schema) = self.schema.as_mut() else {
            return Err(SchemaError::new(
                SchemaErrorKind::ExtensionOfUndefinedSchema,
                ext.location.clone(),
            ));
        };
        schema.directives.extend(build_directives(&ext.directives)?);
        add_root_types(&mut schema.root_types, &ext.operation_types)
    }

    fn apply_type_extension(&mut self, ext: &ast::TypeExtension) -> Result<()> {
        let name = ext.name();
        let expected = extension_kind(ext);
        let Some(target) = self.types.get_mut(name) else {
            return Err(SchemaError::new(
                SchemaErrorKind::ExtensionOfUndefined {
                    kind: expected,
                    name: name.to_string(),
                },
                ext.location().clone(),
            ));
        };
        let found = target.kind();
        if found != expected {
            return Err(SchemaError::new(
                SchemaErrorKind::ExtensionKindMismatch {
                    name: name.to_string(),
                    expected,
                    found,
                },
                ext.location().clone(),
            ));
        }

        target
            .directives_mut()
            .extend(build_directives(extension_directives(ext))?);
        match (target, ext) {
            (TypeDefinition::Object(obj), ast::TypeExtension::Object(ext)) => {
                add_interfaces(&mut obj.interfaces, &obj.name, &ext.interfaces)?;
                add_fields(&mut obj.fields, &obj.name, &ext.fields)?;
            },
            (TypeDefinition::Interface(iface), ast::TypeExtension::Interface(ext)) => {
                add_interfaces(&mut iface.interfaces, &iface.name, &ext.interfaces)?;
                add_fields(&mut iface.fields, &iface.name, &ext.fields)?;
            },
            (TypeDefinition::Union(union), ast::TypeExtension::Union(ext)) => {
                add_union_members(&mut union.members, &union.name, &ext.members)?;
            },
            (TypeDefinition::Enum(enum_type), ast::TypeExtension::Enum(ext)) => {
                add_enum_values(&mut enum_type.values, &enum_type.name, &ext.values)?;
            },
            (TypeDefinition::InputObject(input), ast::TypeExtension::InputObject(ext)) => {
                add_input_values(&mut input.fields, "input field", &input.name, &ext.fields)?;
            },
            // Kinds already agree; scalar extensions only carry directives.
            _ => {},
        }
        log::trace!("Applied extension of {expected} `{name}`");
        Ok(())
    }
}

fn extension_kind(ext: &ast::TypeExtension) -> TypeKind {
    match ext {
        ast::TypeExtension::Scalar(_) => TypeKind::Scalar,
        ast::TypeExtension::Object(_) => TypeKind::Object,
        ast::TypeExtension::Interface(_) => TypeKind::Interface,
        ast::TypeExtension::Union(_) => TypeKind::Union,
        ast::TypeExtension::Enum(_) => TypeKind::Enum,
        ast::TypeExtension::InputObject(_) => TypeKind::InputObject,
    }
}

fn extension_directives(ext: &ast::TypeExtension) -> &[ast::DirectiveUsage] {
    match ext {
        ast::TypeExtension::Scalar(ext) => &ext.directives,
        ast::TypeExtension::Object(ext) => &ext.directives,
        ast::TypeExtension::Interface(ext) => &ext.directives,
        ast::TypeExtension::Union(ext) => &ext.directives,
        ast::TypeExtension::Enum(ext) => &ext.directives,
        ast::TypeExtension::InputObject(ext) => &ext.directives,
    }
}

fn build_type(def: &ast::TypeDefinition) -> Result<TypeDefinition> {
    Ok(match def {
        ast::TypeDefinition::Scalar(def) => TypeDefinition::Scalar(ScalarType {
            description: def.description.clone(),
            name: def.name.clone(),
            directives: build_directives(&def.directives)?,
            location: def.location.clone(),
            builtin: false,
        }),
        ast::TypeDefinition::Object(def) => {
            let mut interfaces = vec![];
            add_interfaces(&mut interfaces, &def.name, &def.interfaces)?;
            let mut fields = IndexMap::new();
            add_fields(&mut fields, &def.name, &def.fields)?;
            TypeDefinition::Object(ObjectType {
                description: def.description.clone(),
                name: def.name.clone(),
                interfaces,
                directives: build_directives(&def.directives)?,
                fields,
                location: def.location.clone(),
            })
        },
        ast::TypeDefinition::Interface(def) => {
            let mut interfaces = vec![];
            add_interfaces(&mut interfaces, &def.name, &def.interfaces)?;
            let mut fields = IndexMap::new();
            add_fields(&mut fields, &def.name, &def.fields)?;
            TypeDefinition::Interface(InterfaceType {
                description: def.description.clone(),
                name: def.name.clone(),
                interfaces,
                directives: build_directives(&def.directives)?,
                fields,
                location: def.location.clone(),
            })
        },
        ast::TypeDefinition::Union(def) => {
            let mut members = vec![];
            add_union_members(&mut members, &def.name, &def.members)?;
            TypeDefinition::Union(UnionType {
                description: def.description.clone(),
                name: def.name.clone(),
                directives: build_directives(&def.directives)?,
                members,
                location: def.location.clone(),
            })
        },
        ast::TypeDefinition::Enum(def) => {
            let mut values = IndexMap::new();
            add_enum_values(&mut values, &def.name, &def.values)?;
            TypeDefinition::Enum(EnumType {
                description: def.description.clone(),
                name: def.name.clone(),
                directives: build_directives(&def.directives)?,
                values,
                location: def.location.clone(),
            })
        },
        ast::TypeDefinition::InputObject(def) => {
            let mut fields = IndexMap::new();
            add_input_values(&mut fields, "input field", &def.name, &def.fields)?;
            TypeDefinition::InputObject(InputObjectType {
                description: def.description.clone(),
                name: def.name.clone(),
                directives: build_directives(&def.directives)?,
                fields,
                location: def.location.clone(),
            })
        },
    })
}

fn duplicate_member(member: &'static str, name: &str, parent: &str, location: &Location) -> SchemaError {
    SchemaError::new(
        SchemaErrorKind::DuplicateMember {
            member,
            name: name.to_string(),
            parent: parent.to_string(),
        },
        location.clone(),
    )
}

fn add_root_types(
    root_types: &mut IndexMap<OperationKind, NamedRef>,
    defs: &[ast::RootOperationTypeDefinition],
) -> Result<()> {
    for def in defs {
        if root_types.contains_key(&def.operation) {
            return Err(SchemaError::new(
                SchemaErrorKind::DuplicateOperationType {
                    operation: def.operation,
                },
                def.location.clone(),
            ));
        }
        root_types.insert(
            def.operation,
            NamedRef::new(def.named_type.value.clone(), def.named_type.location.clone()),
        );
    }
    Ok(())
}

fn add_interfaces(
    interfaces: &mut Vec<NamedRef>,
    parent: &str,
    names: &[ast::Name],
) -> Result<()> {
    for name in names {
        if interfaces.iter().any(|existing| existing.name() == name.as_str()) {
            return Err(duplicate_member("interface", name.as_str(), parent, &name.location));
        }
        interfaces.push(NamedRef::new(name.value.clone(), name.location.clone()));
    }
    Ok(())
}

fn add_union_members(
    members: &mut Vec<NamedRef>,
    parent: &str,
    names: &[ast::Name],
) -> Result<()> {
    for name in names {
        if members.iter().any(|existing| existing.name() == name.as_str()) {
            return Err(duplicate_member("union member", name.as_str(), parent, &name.location));
        }
        members.push(NamedRef::new(name.value.clone(), name.location.clone()));
    }
    Ok(())
}

fn add_fields(
    fields: &mut IndexMap<String, Field>,
    parent: &str,
    defs: &[ast::FieldDefinition],
) -> Result<()> {
    for def in defs {
        if fields.contains_key(&def.name) {
            return Err(duplicate_member("field", &def.name, parent, &def.location));
        }
        let mut arguments = IndexMap::new();
        add_input_values(
            &mut arguments,
            "argument",
            &format!("{parent}.{}", def.name),
            &def.arguments,
        )?;
        fields.insert(
            def.name.clone(),
            Field {
                description: def.description.clone(),
                name: def.name.clone(),
                arguments,
                ty: TypeRef::from_ast(&def.ty),
                directives: build_directives(&def.directives)?,
                location: def.location.clone(),
            },
        );
    }
    Ok(())
}

/// Shared by argument lists and input object fields.
fn add_input_values(
    values: &mut IndexMap<String, InputValue>,
    member: &'static str,
    parent: &str,
    defs: &[ast::InputValueDefinition],
) -> Result<()> {
    for def in defs {
        if values.contains_key(&def.name) {
            return Err(duplicate_member(member, &def.name, parent, &def.location));
        }
        values.insert(
            def.name.clone(),
            InputValue {
                description: def.description.clone(),
                name: def.name.clone(),
                ty: TypeRef::from_ast(&def.ty),
                default_value: def.default_value.clone(),
                directives: build_directives(&def.directives)?,
                location: def.location.clone(),
            },
        );
    }
    Ok(())
}

fn add_enum_values(
    values: &mut IndexMap<String, EnumValue>,
    parent: &str,
    defs: &[ast::EnumValueDefinition],
) -> Result<()> {
    for def in defs {
        if values.contains_key(&def.name) {
            return Err(duplicate_member("enum value", &def.name, parent, &def.location));
        }
        values.insert(
            def.name.clone(),
            EnumValue {
                description: def.description.clone(),
                name: def.name.clone(),
                directives: build_directives(&def.directives)?,
                location: def.location.clone(),
            },
        );
    }
    Ok(())
}

fn build_directives(usages: &[ast::DirectiveUsage]) -> Result<Vec<Directive>> {
    usages.iter().map(build_directive).collect()
}

fn build_directive(usage: &ast::DirectiveUsage) -> Result<Directive> {
    let mut arguments = IndexMap::new();
    for arg in &usage.arguments {
        if arguments.contains_key(&arg.name) {
            return Err(duplicate_member(
                "argument",
                &arg.name,
                &format!("@{}", usage.name),
                &arg.location,
            ));
        }
        arguments.insert(arg.name.clone(), arg.value.clone());
    }
    Ok(Directive {
        definition: NamedRef::new(usage.name.clone(), usage.location.clone()),
        arguments,
        location: usage.location.clone(),
    })
}
