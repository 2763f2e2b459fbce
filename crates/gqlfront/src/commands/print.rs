use crate::output_utils;
use crate::schema_files;
use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqlfront_core::PrintOptions;
use libgqlfront_core::ValidationOptions;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[command(flatten)]
    pub files: SchemaFileArgs,

    #[arg(
        default_value_t=2,
        help="Number of spaces per indentation level.",
        long,
    )]
    pub indent_width: usize,

    #[arg(help="Leave descriptions out of the printed schema.", long)]
    pub no_descriptions: bool,

    #[arg(help="Print built-in scalars and directives too.", long)]
    pub include_builtins: bool,

    #[arg(
        help="Only print types reachable from a root operation type.",
        long,
    )]
    pub only_reachable: bool,
}

impl PrintCmd {
    fn print_options(&self) -> PrintOptions {
        PrintOptions {
            indent_width: self.indent_width,
            include_descriptions: !self.no_descriptions,
            include_builtins: self.include_builtins,
            include_unrooted: !self.only_reachable,
            ..PrintOptions::default()
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let found = match self.files.find_files() {
            Ok(found) => found,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors locating schema files: {e:#}",
                output_utils::RED_X,
            )),
        };

        let graph = match schema_files::load_schema_graph(
            &found.paths,
            ValidationOptions::default(),
        ).await {
            Ok(graph) => graph,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors validating schema: {e:#}",
                output_utils::RED_X,
            )),
        };

        match libgqlfront_core::print_schema(&graph, &self.print_options()) {
            Ok(sdl) => CommandResult::stdout(format_args!("{}", sdl.trim_end())),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors printing schema: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
