use crate::commands::lex::LexCmd;
use crate::commands::tests::utils::cli;
use crate::commands::tests::utils::schema_dir;

#[tokio::test]
async fn dumps_tokens_with_locations() {
    let dir = schema_dir(&[("a.graphql", "type Q {\n  a: \"s\"\n}")]);
    let path = dir.path().join("a.graphql");
    let result = LexCmd { file_path: path.clone() }.run(&cli()).await;
    assert!(result.is_success());
    let stdout = result.stdout.unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    let source = path.display().to_string();
    assert_eq!(lines.len(), 8, "{stdout}");
    assert_eq!(lines[0], format!("{source}:1:1  Name  type"));
    assert_eq!(lines[2], format!("{source}:1:8  BraceOpen  {{"));
    assert_eq!(lines[5], format!("{source}:2:6  String  \"s\""));
    assert_eq!(lines[7], format!("{source}:3:2  Eof"));
}

#[tokio::test]
async fn reports_lexical_errors() {
    let dir = schema_dir(&[("a.graphql", "type Q 01")]);
    let result = LexCmd { file_path: dir.path().join("a.graphql") }.run(&cli()).await;
    assert!(!result.is_success());
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("Name  Q"), "{stderr}");
    assert!(stderr.contains("Invalid number `01`: leading zeros are not allowed"), "{stderr}");
}

#[tokio::test]
async fn missing_file_is_reported() {
    let dir = schema_dir(&[]);
    let result = LexCmd { file_path: dir.path().join("nope.graphql") }.run(&cli()).await;
    assert!(!result.is_success());
    assert!(result.stderr.unwrap().contains("Failed to read"));
}

#[tokio::test]
async fn string_values_are_escaped() {
    let dir = schema_dir(&[("a.graphql", "\"a\\tb\" \"\"\"\n  x\n\"\"\"")]);
    let path = dir.path().join("a.graphql");
    let result = LexCmd { file_path: path.clone() }.run(&cli()).await;
    let stdout = result.stdout.unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    let source = path.display().to_string();
    assert_eq!(lines[0], format!("{source}:1:1  String  \"a\\tb\""));
    assert_eq!(lines[1], format!("{source}:1:8  BlockString  \"x\""));
    assert_eq!(lines.len(), 3, "{stdout}");
}
