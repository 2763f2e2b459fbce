use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn cli() -> Cli {
    Cli {
        cmd: None,
        verbose: false,
    }
}

/// A temporary directory holding `files` as `(relative path, contents)`.
pub fn schema_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }
    dir
}

pub fn file_args(paths: &[&Path]) -> SchemaFileArgs {
    SchemaFileArgs {
        graphql_file_exts: vec!["graphql".to_string(), "graphqls".to_string()],
        file_or_dir_paths: paths.iter().map(|p| p.to_path_buf()).collect::<Vec<PathBuf>>(),
    }
}
