//! DDL parsing

mod cursor;
mod ddl_parser;
mod script_parser;

pub use cursor::Cursor;
pub use ddl_parser::{parse_ddl, LOOKAHEAD};
pub use script_parser::{parse_script_file, parse_script_files, read_script, ParsedScript};
