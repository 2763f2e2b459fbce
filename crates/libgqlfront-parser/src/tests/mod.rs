mod location_tests;
mod parser_error_tests;
mod parser_request_tests;
mod parser_schema_tests;
mod parser_value_tests;
mod utils;
