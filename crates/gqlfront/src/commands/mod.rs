mod lex;
mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use lex::LexCmd;
use print::PrintCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlfront")]
pub(crate) enum CommandEnum {
    /// Parse, merge and validate schema files.
    Validate(Box<ValidateCmd>),
    /// Validate schema files and print the merged schema as SDL.
    Print(Box<PrintCmd>),
    /// Dump the token stream of a single file.
    Lex(Box<LexCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Validate(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Lex(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
