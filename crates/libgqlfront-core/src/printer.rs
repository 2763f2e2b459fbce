//! Re-emits a validated [`SchemaGraph`] as SDL.

use crate::schema_error::SchemaErrorKind;
use crate::types::Directive;
use crate::types::DirectiveDefinition;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::SchemaDefinition;
use crate::types::TypeDefinition;
use crate::SchemaError;
use crate::SchemaGraph;
use indexmap::IndexMap;
use indexmap::IndexSet;
use libgqlfront_parser::ast::write_string_literal;
use libgqlfront_parser::ast::OperationKind;
use libgqlfront_parser::Location;
use std::fmt;
use std::fmt::Write;

/// Controls the layout and content of [`print_schema()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrintOptions {
    pub indent_char: char,
    /// Number of `indent_char`s per nesting level.
    pub indent_width: usize,
    pub include_descriptions: bool,
    /// Print the built-in scalars and directives too.
    pub include_builtins: bool,
    /// When false, only types reachable from a root operation type (and
    /// from printed directive arguments) are printed.
    pub include_unrooted: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_char: ' ',
            indent_width: 2,
            include_descriptions: true,
            include_builtins: false,
            include_unrooted: true,
        }
    }
}

/// Prints `graph` as a schema document: the schema definition (if any),
/// then directive definitions, then types, each in declaration order.
pub fn print_schema(graph: &SchemaGraph, options: &PrintOptions) -> Result<String, SchemaError> {
    if !graph.is_validated() {
        return Err(SchemaError::new(
            SchemaErrorKind::NotValidated,
            Location::builtin(),
        ));
    }
    let mut printer = Printer {
        graph,
        options,
        indent: options.indent_char.to_string().repeat(options.indent_width),
        blocks: vec![],
    };
    if let Some(schema) = graph.schema_definition() {
        printer.blocks.push(Block::Schema(schema));
    }
    let directives: Vec<&DirectiveDefinition> = graph
        .directives()
        .values()
        .filter(|def| options.include_builtins || !def.builtin)
        .collect();
    let reachable = if options.include_unrooted {
        None
    } else {
        Some(printer.reachable_types(&directives))
    };
    printer.blocks.extend(directives.into_iter().map(Block::Directive));
    for (index, ty) in graph.types().values().enumerate() {
        if ty.is_builtin() && !options.include_builtins {
            continue;
        }
        if reachable.as_ref().is_some_and(|set| !set.contains(&index)) {
            continue;
        }
        printer.blocks.push(Block::Type(ty));
    }
    log::debug!("Printed {} definitions", printer.blocks.len());
    Ok(printer.to_string())
}

/// One top-level definition in the printed document.
enum Block<'a> {
    Schema(&'a SchemaDefinition),
    Directive(&'a DirectiveDefinition),
    Type(&'a TypeDefinition),
}

struct Printer<'a> {
    graph: &'a SchemaGraph,
    options: &'a PrintOptions,
    indent: String,
    blocks: Vec<Block<'a>>,
}

/// Blocks are separated by one blank line; each ends with a newline.
impl fmt::Display for Printer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, block) in self.blocks.iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            match block {
                Block::Schema(schema) => self.schema_definition(f, schema)?,
                Block::Directive(def) => self.directive_definition(f, def)?,
                Block::Type(ty) => self.type_definition(f, ty)?,
            }
        }
        Ok(())
    }
}

impl Printer<'_> {
    /// Indices of every type reachable from the root operation types and
    /// the arguments of `directives`.
    fn reachable_types(&self, directives: &[&DirectiveDefinition]) -> IndexSet<usize> {
        let mut queue: Vec<usize> = vec![];
        for operation in OperationKind::ALL {
            if let Some(name) = self.graph.root_type_name(operation) {
                queue.extend(self.graph.types().get_index_of(name));
            }
        }
        for def in directives {
            for arg in def.arguments.values() {
                queue.extend(arg.ty.innermost().type_ref.target());
            }
        }

        let mut seen = IndexSet::new();
        while let Some(index) = queue.pop() {
            if !seen.insert(index) {
                continue;
            }
            let Some(ty) = self.graph.type_at(index) else {
                continue;
            };
            match ty {
                TypeDefinition::Scalar(_) | TypeDefinition::Enum(_) => {},
                TypeDefinition::Object(_) | TypeDefinition::Interface(_) => {
                    queue.extend(ty.interfaces().iter().filter_map(|r| r.target()));
                    for field in ty.fields().into_iter().flat_map(IndexMap::values) {
                        queue.extend(field.ty.innermost().type_ref.target());
                        for arg in field.arguments.values() {
                            queue.extend(arg.ty.innermost().type_ref.target());
                        }
                    }
                },
                TypeDefinition::Union(union) => {
                    queue.extend(union.members.iter().filter_map(|r| r.target()));
                },
                TypeDefinition::InputObject(input) => {
                    for field in input.fields.values() {
                        queue.extend(field.ty.innermost().type_ref.target());
                    }
                },
            }
        }
        seen
    }

    fn schema_definition(&self, f: &mut fmt::Formatter<'_>, schema: &SchemaDefinition) -> fmt::Result {
        self.description(f, &schema.description, 0)?;
        f.write_str("schema")?;
        self.directives(f, &schema.directives)?;
        f.write_str(" {\n")?;
        for (operation, root) in &schema.root_types {
            writeln!(f, "{}{operation}: {}", self.indent, root.name())?;
        }
        f.write_str("}\n")
    }

    fn directive_definition(&self, f: &mut fmt::Formatter<'_>, def: &DirectiveDefinition) -> fmt::Result {
        self.description(f, &def.description, 0)?;
        write!(f, "directive @{}", def.name)?;
        self.arguments(f, &def.arguments, 0)?;
        if def.repeatable {
            f.write_str(" repeatable")?;
        }
        let locations: Vec<&str> = def.locations.iter().map(|loc| loc.as_str()).collect();
        writeln!(f, " on {}", locations.join(" | "))
    }

    fn type_definition(&self, f: &mut fmt::Formatter<'_>, ty: &TypeDefinition) -> fmt::Result {
        self.description(f, ty.description(), 0)?;
        write!(f, "{} {}", ty.kind().keyword(), ty.name())?;
        if !ty.interfaces().is_empty() {
            let names: Vec<&str> = ty.interfaces().iter().map(|r| r.name()).collect();
            write!(f, " implements {}", names.join(" & "))?;
        }
        self.directives(f, ty.directives())?;
        match ty {
            TypeDefinition::Scalar(_) => f.write_char('\n'),
            TypeDefinition::Object(_) | TypeDefinition::Interface(_) => {
                let fields: Vec<&Field> = ty.fields().into_iter().flat_map(IndexMap::values).collect();
                self.block(f, &fields, |f, field| self.field(f, field))
            },
            TypeDefinition::Union(union) => {
                if !union.members.is_empty() {
                    let names: Vec<&str> = union.members.iter().map(|r| r.name()).collect();
                    write!(f, " = {}", names.join(" | "))?;
                }
                f.write_char('\n')
            },
            TypeDefinition::Enum(enum_type) => {
                let values: Vec<&EnumValue> = enum_type.values.values().collect();
                self.block(f, &values, |f, value| {
                    self.description(f, &value.description, 1)?;
                    write!(f, "{}{}", self.indent, value.name)?;
                    self.directives(f, &value.directives)
                })
            },
            TypeDefinition::InputObject(input) => {
                let fields: Vec<&InputValue> = input.fields.values().collect();
                self.block(f, &fields, |f, field| {
                    self.description(f, &field.description, 1)?;
                    f.write_str(&self.indent)?;
                    self.input_value(f, field)
                })
            },
        }
    }

    /// ` {\n<item>\n...}\n`, or just a newline when there are no items.
    fn block<T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        items: &[T],
        mut item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    ) -> fmt::Result {
        if items.is_empty() {
            return f.write_char('\n');
        }
        f.write_str(" {\n")?;
        for entry in items {
            item(f, entry)?;
            f.write_char('\n')?;
        }
        f.write_str("}\n")
    }

    fn field(&self, f: &mut fmt::Formatter<'_>, field: &Field) -> fmt::Result {
        self.description(f, &field.description, 1)?;
        write!(f, "{}{}", self.indent, field.name)?;
        self.arguments(f, &field.arguments, 1)?;
        write!(f, ": {}", field.ty)?;
        self.directives(f, &field.directives)
    }

    /// Arguments print inline unless one of them has a description to show.
    fn arguments(
        &self,
        f: &mut fmt::Formatter<'_>,
        arguments: &IndexMap<String, InputValue>,
        depth: usize,
    ) -> fmt::Result {
        if arguments.is_empty() {
            return Ok(());
        }
        let multiline = self.options.include_descriptions
            && arguments.values().any(|arg| !arg.description.is_empty());
        if !multiline {
            f.write_char('(')?;
            for (idx, arg) in arguments.values().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                self.input_value(f, arg)?;
            }
            return f.write_char(')');
        }
        f.write_str("(\n")?;
        for arg in arguments.values() {
            self.description(f, &arg.description, depth + 1)?;
            f.write_str(&self.indent.repeat(depth + 1))?;
            self.input_value(f, arg)?;
            f.write_char('\n')?;
        }
        f.write_str(&self.indent.repeat(depth))?;
        f.write_char(')')
    }

    fn input_value(&self, f: &mut fmt::Formatter<'_>, value: &InputValue) -> fmt::Result {
        write!(f, "{}: {}", value.name, value.ty)?;
        if let Some(default) = &value.default_value {
            write!(f, " = {default}")?;
        }
        self.directives(f, &value.directives)
    }

    fn directives(&self, f: &mut fmt::Formatter<'_>, directives: &[Directive]) -> fmt::Result {
        for directive in directives {
            write!(f, " @{}", directive.name())?;
            if directive.arguments.is_empty() {
                continue;
            }
            f.write_char('(')?;
            for (idx, (name, value)) in directive.arguments.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}: {value}")?;
            }
            f.write_char(')')?;
        }
        Ok(())
    }

    /// Multi-line descriptions print as block strings when that decodes
    /// back to the same text, otherwise as plain strings.
    fn description(&self, f: &mut fmt::Formatter<'_>, description: &str, depth: usize) -> fmt::Result {
        if !self.options.include_descriptions || description.is_empty() {
            return Ok(());
        }
        let indent = self.indent.repeat(depth);
        if !description.contains('\n') || !survives_block_string(description) {
            f.write_str(&indent)?;
            write_string_literal(f, description)?;
            return f.write_char('\n');
        }
        writeln!(f, "{indent}\"\"\"")?;
        for line in description.split('\n') {
            if line.is_empty() {
                f.write_char('\n')?;
            } else {
                writeln!(f, "{indent}{}", line.replace("\"\"\"", "\\\"\"\""))?;
            }
        }
        writeln!(f, "{indent}\"\"\"")
    }
}

/// Whether `text`, printed one line per line between `"""` delimiters,
/// decodes back to itself. Block strings drop blank leading and trailing
/// lines, strip the common indent and normalize line terminators.
fn survives_block_string(text: &str) -> bool {
    let is_blank = |line: &str| line.trim_start_matches([' ', '\t']).is_empty();
    let lines: Vec<&str> = text.split('\n').collect();
    !text.chars().any(|ch| ch.is_control() && ch != '\n' && ch != '\t')
        && lines.first().is_some_and(|line| !is_blank(line))
        && lines.last().is_some_and(|line| !is_blank(line))
        && lines
            .iter()
            .filter(|line| !is_blank(line))
            .any(|line| !line.starts_with([' ', '\t']))
}
