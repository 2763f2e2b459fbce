use crate::commands::print::PrintCmd;
use crate::commands::tests::utils::cli;
use crate::commands::tests::utils::file_args;
use crate::commands::tests::utils::schema_dir;
use std::path::Path;

fn print_cmd(path: &Path) -> PrintCmd {
    PrintCmd {
        files: file_args(&[path]),
        indent_width: 2,
        no_descriptions: false,
        include_builtins: false,
        only_reachable: false,
    }
}

#[tokio::test]
async fn prints_merged_schema() {
    let dir = schema_dir(&[
        ("a.graphql", "\"Entry point\" type Query { user: User }"),
        ("b.graphql", "type User { id: ID! }\ntype Unused { x: Int }"),
    ]);
    let result = print_cmd(dir.path()).run(&cli()).await;
    assert!(result.is_success());
    assert_eq!(
        result.stdout.unwrap(),
        "\"Entry point\"\ntype Query {\n  user: User\n}\n\ntype User {\n  id: ID!\n}\n\ntype Unused {\n  x: Int\n}",
    );
}

#[tokio::test]
async fn print_flags_shape_output() {
    let dir = schema_dir(&[(
        "a.graphql",
        "\"Entry point\" type Query { user: User }\ntype User { id: ID! }\ntype Unused { x: Int }",
    )]);
    let mut cmd = print_cmd(dir.path());
    cmd.indent_width = 4;
    cmd.no_descriptions = true;
    cmd.only_reachable = true;
    let result = cmd.run(&cli()).await;
    assert_eq!(
        result.stdout.unwrap(),
        "type Query {\n    user: User\n}\n\ntype User {\n    id: ID!\n}",
    );
}

#[tokio::test]
async fn invalid_schema_is_not_printed() {
    let dir = schema_dir(&[("a.graphql", "type Query { a: Int }\ntype Query { b: Int }")]);
    let result = print_cmd(dir.path()).run(&cli()).await;
    assert!(!result.is_success());
    assert!(result.stdout.is_none());
    assert!(result.stderr.unwrap().contains("Duplicate object definition `Query`"));
}
