use anyhow::Context;
use libgqlfront_core::SchemaGraph;
use libgqlfront_core::ValidationOptions;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Input paths shared by every command that loads a schema.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

impl SchemaFileArgs {
    /// Every file at or under the input paths whose extension is one of
    /// `graphql_file_exts`, in walk order.
    pub(crate) fn find_files(&self) -> anyhow::Result<FoundFiles> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut found = FoundFiles::default();
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan {}",
                    path.display(),
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                let matches_ext = entry_path
                    .extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()));
                if matches_ext {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    found.paths.push(entry_path.to_path_buf());
                } else {
                    found.num_skipped += 1;
                }
            }
        }

        // A single file passed explicitly is loaded regardless of its
        // extension.
        if found.paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding with {only_path:#?} even though it doesn't match \
                any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            found.paths.push(only_path.clone());
            found.num_skipped = found.num_skipped.saturating_sub(1);
        }

        log::debug!("Found {} schema files.", found.paths.len());
        Ok(found)
    }
}

/// Parses and merges every file in `paths`, then validates the graph.
pub(crate) async fn load_schema_graph(
    paths: &[PathBuf],
    options: ValidationOptions,
) -> anyhow::Result<SchemaGraph> {
    let mut graph = SchemaGraph::with_options(options);
    for path in paths {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let document = libgqlfront_parser::parse_schema_document(
            &text,
            path.display().to_string(),
        )?;
        graph.merge(&document)?;
    }
    graph.validate()?;
    Ok(graph)
}
