pub const SIMPLE_QUERY: &str = "{ user(id: 1) { id name } }";

pub const COMPLEX_QUERY: &str = r#"
query Dashboard($id: ID!, $first: Int = 20, $withTags: Boolean = false) {
  user(id: $id) {
    ...UserFields
    friends(first: $first) @include(if: true) {
      id
      ... on Admin { permissions }
      ... @skip(if: $withTags) { tags }
    }
  }
  search(filter: { role: ADMIN, names: ["a", "b"], nested: { depth: 3 } }) {
    id
  }
}

fragment UserFields on User {
  id
  name
  avatar: picture(size: 64)
}
"#;

/// `{ a { a { ... leaf } } }` with `depth` selection sets.
pub fn deeply_nested_query(depth: usize) -> String {
    format!("{}leaf{}", "{ a ".repeat(depth), " }".repeat(depth))
}

pub fn many_operations(count: usize) -> String {
    (0..count)
        .map(|i| format!("query Op{i}($v: Int) {{ field{i}(arg: $v) {{ id name }} }}\n"))
        .collect()
}
