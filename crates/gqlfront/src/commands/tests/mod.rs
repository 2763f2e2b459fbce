mod lex_cmd_tests;
mod print_cmd_tests;
mod utils;
mod validate_cmd_tests;
