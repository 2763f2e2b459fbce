use crate::builder::PendingExtension;
use crate::types::builtin_directives;
use crate::types::builtin_types;
use crate::types::Directive;
use crate::types::DirectiveDefinition;
use crate::types::ObjectType;
use crate::types::SchemaDefinition;
use crate::types::TypeDefinition;
use crate::Error;
use crate::NamedRef;
use crate::SchemaError;
use crate::ValidationOptions;
use indexmap::IndexMap;
use libgqlfront_parser::ast::OperationKind;
use libgqlfront_parser::ast::SchemaDocument;

/// Lifecycle of a [`SchemaGraph`].
///
/// ```text
/// Unvalidated --validate()--> Cleaning -> Building -> Linking -> Validated
///      ^                                                            |
///      +------------------------ merge() ---------------------------+
/// ```
///
/// Any error while merging or validating resets the graph to an empty
/// `Unvalidated` state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphState {
    Unvalidated,
    /// Clearing links left over from a previous validation.
    Cleaning,
    /// Applying queued `extend` definitions.
    Building,
    /// Resolving every reference.
    Linking,
    Validated,
}

/// The deduplicated, cross-referenced model of every schema document merged
/// into it.
///
/// ```rust
/// use libgqlfront_core::SchemaGraph;
///
/// let mut graph = SchemaGraph::new();
/// graph.merge_str("type Query { hello: String }", "schema.graphql").unwrap();
/// graph.validate().unwrap();
///
/// let query = graph.get_type("Query").unwrap();
/// let hello = query.field("hello").unwrap();
/// assert_eq!(graph.resolve_type(&hello.ty.innermost().type_ref).unwrap().name(), "String");
/// ```
#[derive(Clone, Debug)]
pub struct SchemaGraph {
    pub(crate) state: GraphState,
    pub(crate) options: ValidationOptions,
    pub(crate) directives: IndexMap<String, DirectiveDefinition>,
    pub(crate) types: IndexMap<String, TypeDefinition>,
    pub(crate) schema: Option<SchemaDefinition>,
    pub(crate) pending_extensions: Vec<PendingExtension>,
}

impl SchemaGraph {
    /// An empty graph holding only the built-in scalars and directives.
    pub fn new() -> Self {
        Self::with_options(ValidationOptions::default())
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        let mut graph = Self {
            state: GraphState::Unvalidated,
            options,
            directives: IndexMap::new(),
            types: IndexMap::new(),
            schema: None,
            pending_extensions: vec![],
        };
        graph.reset();
        graph
    }

    /// Drops everything merged so far, keeping only the built-ins and the
    /// configured [`ValidationOptions`].
    pub fn reset(&mut self) {
        self.state = GraphState::Unvalidated;
        self.directives = builtin_directives()
            .into_iter()
            .map(|def| (def.name.clone(), def))
            .collect();
        self.types = builtin_types()
            .into_iter()
            .map(|def| (def.name().to_string(), def))
            .collect();
        self.schema = None;
        self.pending_extensions.clear();
    }

    /// Adds every definition of `document` to the graph.
    ///
    /// Base definitions are built immediately, so a name collision with
    /// anything merged earlier fails here. `extend` definitions are queued
    /// and applied by [`validate()`](Self::validate). On failure the graph
    /// is reset.
    pub fn merge(&mut self, document: &SchemaDocument) -> Result<(), SchemaError> {
        self.state = GraphState::Unvalidated;
        let result = self.build_document(document);
        if result.is_err() {
            self.reset();
        }
        result
    }

    pub fn merge_all<'a>(
        &mut self,
        documents: impl IntoIterator<Item = &'a SchemaDocument>,
    ) -> Result<(), SchemaError> {
        for document in documents {
            self.merge(document)?;
        }
        Ok(())
    }

    /// Parses `text` as a schema document and merges it.
    ///
    /// A syntax error resets the graph just like a merge error does.
    pub fn merge_str(
        &mut self,
        text: &str,
        source: impl Into<std::sync::Arc<str>>,
    ) -> Result<(), Error> {
        let document = match libgqlfront_parser::parse_schema_document(text, source) {
            Ok(document) => document,
            Err(err) => {
                self.reset();
                return Err(err.into());
            },
        };
        Ok(self.merge(&document)?)
    }

    /// Applies queued extensions and resolves every reference in one atomic
    /// step. On failure the graph is reset.
    pub fn validate(&mut self) -> Result<(), SchemaError> {
        let result = self.run_validation();
        if result.is_err() {
            self.reset();
        }
        result
    }

    fn run_validation(&mut self) -> Result<(), SchemaError> {
        self.set_state(GraphState::Cleaning);
        self.clear_links();

        self.set_state(GraphState::Building);
        for extension in std::mem::take(&mut self.pending_extensions) {
            self.apply_extension(extension)?;
        }

        self.set_state(GraphState::Linking);
        self.link()?;

        self.set_state(GraphState::Validated);
        Ok(())
    }

    fn set_state(&mut self, state: GraphState) {
        log::debug!("Schema graph: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn state(&self) -> GraphState {
        self.state
    }

    pub fn is_validated(&self) -> bool {
        self.state == GraphState::Validated
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Replaces the validation options. The graph must be validated again.
    pub fn set_options(&mut self, options: ValidationOptions) {
        self.options = options;
        self.state = GraphState::Unvalidated;
    }

    pub fn types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn type_at(&self, index: usize) -> Option<&TypeDefinition> {
        self.types.get_index(index).map(|(_, def)| def)
    }

    pub fn directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directives
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    pub fn directive_at(&self, index: usize) -> Option<&DirectiveDefinition> {
        self.directives.get_index(index).map(|(_, def)| def)
    }

    /// Follows a linked type reference. Unlinked references fall back to a
    /// lookup by name.
    pub fn resolve_type(&self, type_ref: &NamedRef) -> Option<&TypeDefinition> {
        match type_ref.target() {
            Some(index) => self.type_at(index),
            None => self.get_type(type_ref.name()),
        }
    }

    pub fn resolve_directive(&self, directive: &Directive) -> Option<&DirectiveDefinition> {
        match directive.definition.target() {
            Some(index) => self.directive_at(index),
            None => self.directive(directive.name()),
        }
    }

    pub fn schema_definition(&self) -> Option<&SchemaDefinition> {
        self.schema.as_ref()
    }

    /// The name of the root type for `operation`.
    ///
    /// Without a `schema { ... }` definition the conventional `Query`,
    /// `Mutation` and `Subscription` object types serve as roots.
    pub fn root_type_name(&self, operation: OperationKind) -> Option<&str> {
        match &self.schema {
            Some(schema) => schema.root_type(operation).map(NamedRef::name),
            None => {
                let name = operation.default_type_name();
                match self.types.get_key_value(name) {
                    Some((key, TypeDefinition::Object(_))) => Some(key.as_str()),
                    _ => None,
                }
            },
        }
    }

    pub fn root_type(&self, operation: OperationKind) -> Option<&ObjectType> {
        self.root_type_name(operation)
            .and_then(|name| self.get_type(name))
            .and_then(TypeDefinition::as_object)
    }
}

impl Default for SchemaGraph {
    fn default() -> Self {
        Self::new()
    }
}
