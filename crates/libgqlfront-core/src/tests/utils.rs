//! Shared helpers for schema graph tests.

use crate::Error;
use crate::SchemaError;
use crate::SchemaGraph;
use crate::ValidationOptions;

pub const TEST_SOURCE: &str = "test.graphql";

/// A graph with `text` merged but not validated.
pub fn merged(text: &str) -> SchemaGraph {
    let mut graph = SchemaGraph::new();
    graph
        .merge_str(text, TEST_SOURCE)
        .unwrap_or_else(|err| panic!("expected `{text}` to merge: {err}"));
    graph
}

pub fn validated(text: &str) -> SchemaGraph {
    validated_with(text, ValidationOptions::default())
}

pub fn validated_with(text: &str, options: ValidationOptions) -> SchemaGraph {
    let mut graph = SchemaGraph::with_options(options);
    graph
        .merge_str(text, TEST_SOURCE)
        .unwrap_or_else(|err| panic!("expected `{text}` to merge: {err}"));
    graph
        .validate()
        .unwrap_or_else(|err| panic!("expected `{text}` to validate: {err}"));
    graph
}

/// The schema error raised while merging `text`.
pub fn merge_error(text: &str) -> SchemaError {
    let mut graph = SchemaGraph::new();
    match graph.merge_str(text, TEST_SOURCE) {
        Ok(()) => panic!("expected `{text}` to fail to merge"),
        Err(Error::Schema(err)) => err,
        Err(Error::Syntax(err)) => panic!("expected a schema error, got: {err}"),
    }
}

pub fn validate_error(text: &str) -> SchemaError {
    validate_error_with(text, ValidationOptions::default())
}

/// The schema error raised while validating `text`, which must merge.
pub fn validate_error_with(text: &str, options: ValidationOptions) -> SchemaError {
    let mut graph = merged(text);
    graph.set_options(options);
    match graph.validate() {
        Ok(()) => panic!("expected `{text}` to fail validation"),
        Err(err) => err,
    }
}
