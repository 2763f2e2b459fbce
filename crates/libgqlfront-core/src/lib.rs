//! Semantic layer over [`libgqlfront_parser`]: merges parsed schema
//! documents into a [`SchemaGraph`], resolves every by-name reference, and
//! prints or JSON-encodes the result.
//!
//! ```rust
//! use libgqlfront_core::SchemaGraph;
//!
//! let mut graph = SchemaGraph::new();
//! graph.merge_str(
//!     "directive @foo (bar: Int = 3) on ENUM\ntype Query { color: Color }\nenum Color @foo { RED }",
//!     "schema.graphql",
//! ).unwrap();
//! graph.validate().unwrap();
//! assert!(graph.is_validated());
//! ```

mod builder;
mod error;
mod linker;
mod named_ref;
mod printer;
mod schema_error;
mod schema_graph;
pub mod types;
mod validation_options;
mod value_json;

pub use error::Error;
pub use named_ref::NamedRef;
pub use printer::print_schema;
pub use printer::PrintOptions;
pub use schema_error::SchemaError;
pub use schema_error::SchemaErrorKind;
pub use schema_graph::GraphState;
pub use schema_graph::SchemaGraph;
pub use validation_options::ValidationOptions;
pub use value_json::value_from_json;
pub use value_json::value_to_json;
pub use value_json::SerializableValue;

#[cfg(test)]
mod tests;
