use crate::Cli;
use crate::CommandResult;

/// A parsed `gqlfront` subcommand.
///
/// Output goes into the returned [`CommandResult`] instead of straight to
/// stdout/stderr; `main` reports it once the command finishes.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// `cli` holds the global flags parsed alongside the subcommand.
    async fn run(self, cli: &Cli) -> CommandResult;
}
