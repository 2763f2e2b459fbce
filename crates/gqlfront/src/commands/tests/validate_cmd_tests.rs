use crate::commands::tests::utils::cli;
use crate::commands::tests::utils::file_args;
use crate::commands::tests::utils::schema_dir;
use crate::commands::validate::ValidateCmd;

#[tokio::test]
async fn reports_a_summary_on_success() {
    let dir = schema_dir(&[
        ("query.graphql", "type Query { user: User }"),
        ("user.graphql", "type User { id: ID }\ndirective @key on OBJECT"),
        ("README.md", "docs"),
    ]);
    let cmd = ValidateCmd {
        files: file_args(&[dir.path()]),
        check_directive_locations: false,
        check_distinct_root_types: false,
    };
    let result = cmd.run(&cli()).await;
    assert!(result.is_success());
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("Analyzed 2 files."), "{stdout}");
    assert!(stdout.contains("Skipped 1 non-schema files."), "{stdout}");
    assert!(stdout.contains("Validated 2 type definitions."), "{stdout}");
    assert!(stdout.contains("Validated 1 directive definitions."), "{stdout}");
}

#[tokio::test]
async fn reports_semantic_errors() {
    let dir = schema_dir(&[("schema.graphql", "type Query { user: Missing }")]);
    let cmd = ValidateCmd {
        files: file_args(&[dir.path()]),
        check_directive_locations: false,
        check_distinct_root_types: false,
    };
    let result = cmd.run(&cli()).await;
    assert!(!result.is_success());
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("Undefined type `Missing` referenced at `Query.user`"), "{stderr}");
}

#[tokio::test]
async fn optional_checks_follow_flags() {
    let dir = schema_dir(&[(
        "schema.graphql",
        "schema { query: Q mutation: Q }\ntype Q { a: Int }",
    )]);
    let lenient = ValidateCmd {
        files: file_args(&[dir.path()]),
        check_directive_locations: false,
        check_distinct_root_types: false,
    };
    assert!(lenient.run(&cli()).await.is_success());

    let strict = ValidateCmd {
        files: file_args(&[dir.path()]),
        check_directive_locations: false,
        check_distinct_root_types: true,
    };
    let result = strict.run(&cli()).await;
    assert!(!result.is_success());
    assert!(result.stderr.unwrap().contains("both use `Q`"));
}
