//! Synthetic inputs for the parse benchmarks.

pub mod operations;

pub const SMALL_SCHEMA: &str = r#"
"The root query."
type Query {
  user(id: ID!): User
  users(first: Int = 10, after: String): [User!]!
}

interface Node {
  id: ID!
}

"A registered user."
type User implements Node @key(fields: "id") {
  id: ID!
  name: String
  role: Role!
  tags: [String!]
}

enum Role { ADMIN EDITOR VIEWER }

input UserFilter {
  role: Role
  nameContains: String
}

directive @key(fields: String!) repeatable on OBJECT | INTERFACE
"#;

/// A schema of `type_count` object types, each with a handful of fields
/// referencing its neighbours, plus matching inputs and enums.
pub fn synthetic_schema(type_count: usize) -> String {
    let mut out = String::with_capacity(type_count * 400);
    out.push_str("type Query {\n");
    for i in 0..type_count {
        out.push_str(&format!("  type{i}(id: ID!, filter: Filter{i}): Type{i}\n"));
    }
    out.push_str("}\n\n");
    for i in 0..type_count {
        let next = (i + 1) % type_count;
        out.push_str(&format!(
            "\"\"\"\n  Type number {i}.\n\"\"\"\n\
             type Type{i} @tag(name: \"t{i}\") {{\n\
             \x20 id: ID!\n\
             \x20 name: String\n\
             \x20 score: Float\n\
             \x20 next: Type{next}\n\
             \x20 list(first: Int = 10): [Type{next}!]!\n\
             \x20 status: Status{i}\n\
             }}\n\n\
             input Filter{i} {{ name: String, min: Float = 0.5, tags: [String!] }}\n\n\
             enum Status{i} {{ ACTIVE INACTIVE ARCHIVED }}\n\n",
        ));
    }
    out.push_str("directive @tag(name: String!) on OBJECT | FIELD_DEFINITION\n");
    out
}
