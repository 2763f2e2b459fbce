use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqlfront_parser::token::Token;
use libgqlfront_parser::token::TokenKind;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct LexCmd {
    #[arg(help="Path to the file to tokenize.", name="FILE_PATH")]
    pub file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for LexCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let text = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(text) => text,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read {}: {e}",
                output_utils::RED_X,
                self.file_path.display(),
            )),
        };

        let mut out = String::new();
        let mut num_tokens = 0;
        for token in libgqlfront_parser::lex(&text, self.file_path.display().to_string()) {
            let token = match token {
                Ok(token) => token,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{out}{} {e}",
                    output_utils::RED_X,
                )),
            };
            num_tokens += 1;
            out.push_str(&TokenLine(&token).to_string());
            out.push('\n');
        }
        log::debug!("Lexed {num_tokens} tokens from {:#?}.", self.file_path);
        CommandResult::stdout(format_args!("{}", out.trim_end()))
    }
}

/// `{location}  {kind}  {value}`; string values are quoted and escaped, and
/// `Eof` has no value column.
struct TokenLine<'a, 'src>(&'a Token<'src>);

impl fmt::Display for TokenLine<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.0;
        write!(f, "{}  {:?}", token.location, token.kind)?;
        match token.kind {
            TokenKind::Eof => Ok(()),
            kind if kind.is_string() => write!(f, "  {:?}", token.value),
            _ => write!(f, "  {}", token.value),
        }
    }
}
