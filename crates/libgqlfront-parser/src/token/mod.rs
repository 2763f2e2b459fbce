//! Token types produced by the [`Lexer`](crate::Lexer) and consumed by the
//! parser.

mod block_string;
pub(crate) mod char_class;
#[allow(clippy::module_inception)]
mod token;
mod token_kind;

pub use block_string::block_string_value;
pub(crate) use block_string::decode_block_string;
pub use token::Token;
pub use token_kind::TokenKind;
