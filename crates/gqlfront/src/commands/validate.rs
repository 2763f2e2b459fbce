use crate::output_utils;
use crate::schema_files;
use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqlfront_core::ValidationOptions;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    pub files: SchemaFileArgs,

    #[arg(
        help="Reject directives used at locations their definition does not \
             list, and repeated non-repeatable directives.",
        long,
    )]
    pub check_directive_locations: bool,

    #[arg(
        help="Reject schemas whose root operation types share an object type.",
        long,
    )]
    pub check_distinct_root_types: bool,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let found = match self.files.find_files() {
            Ok(found) => found,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors locating schema files: {e:#}",
                output_utils::RED_X,
            )),
        };

        let options = ValidationOptions {
            check_directive_locations: self.check_directive_locations,
            check_distinct_root_types: self.check_distinct_root_types,
        };
        match schema_files::load_schema_graph(&found.paths, options).await {
            Ok(graph) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All schema files validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-schema files.\n",
                    "  * Validated {} type definitions.\n",
                    "  * Validated {} directive definitions.",
                ),
                output_utils::GREEN_CHECK,
                found.paths.len(),
                found.num_skipped,
                graph.types().values().filter(|t| !t.is_builtin()).count(),
                graph.directives().values().filter(|d| !d.builtin).count(),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors validating schema: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
